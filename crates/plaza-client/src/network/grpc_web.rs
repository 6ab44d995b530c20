//! gRPC-Web client for WASM
//!
//! Simple HTTP-based gRPC-Web client that works in browser.

use gloo::net::http::Request;
use prost::Message;
use tracing::debug;

const GRPC_WEB_CONTENT_TYPE: &str = "application/grpc-web+proto";

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Decode error: {0}")]
    Decode(String),
    /// Non-zero `grpc-status`. `message` is the server's own text.
    #[error("gRPC error (code={code}): {message}")]
    GrpcStatus { code: u32, message: String },
}

fn encode_grpc_message<M: Message>(msg: &M) -> Vec<u8> {
    let encoded = msg.encode_to_vec();
    let len = u32::try_from(encoded.len()).unwrap_or(u32::MAX);

    let mut frame = Vec::with_capacity(5 + encoded.len());
    frame.push(0); // compression flag
    frame.extend_from_slice(&len.to_be_bytes());
    frame.extend_from_slice(&encoded);
    frame
}

fn decode_grpc_message<M: Message + Default>(data: &[u8]) -> Result<M, RpcError> {
    if data.len() < 5 {
        return Err(RpcError::Decode("Response too short".to_string()));
    }

    let len = u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
    let Some(end) = len.checked_add(5) else {
        return Err(RpcError::Decode(format!("Frame length {len} overflows")));
    };

    if data.len() < end {
        return Err(RpcError::Decode(format!(
            "Response truncated: expected {end} bytes, got {}",
            data.len()
        )));
    }

    M::decode(&data[5..end]).map_err(|e| RpcError::Decode(e.to_string()))
}

pub async fn call<Req: Message, Resp: Message + Default>(
    base_url: &str,
    service: &str,
    method: &str,
    request: &Req,
) -> Result<Resp, RpcError> {
    let url = format!("{base_url}/{service}/{method}");
    let body = encode_grpc_message(request);

    debug!("gRPC request: POST {url}");

    let response = Request::post(&url)
        .header("Content-Type", GRPC_WEB_CONTENT_TYPE)
        .header("Accept", GRPC_WEB_CONTENT_TYPE)
        .header("x-grpc-web", "1")
        .body(body)
        .map_err(|e| RpcError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| RpcError::Network(e.to_string()))?;

    let status = response.status();
    debug!("gRPC response status: {status}");

    if status != 200 {
        let text = response.text().await.unwrap_or_default();
        return Err(RpcError::Network(format!("HTTP {status}: {text}")));
    }

    // Trailers-only responses carry the status in the headers
    if let Some(grpc_status) = response.headers().get("grpc-status") {
        let code: u32 = grpc_status.parse().unwrap_or(2);
        if code != 0 {
            let message = response
                .headers()
                .get("grpc-message")
                .map(|m| js_sys::decode_uri_component(&m).map_or(m, String::from))
                .unwrap_or_default();
            return Err(RpcError::GrpcStatus { code, message });
        }
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| RpcError::Network(e.to_string()))?;

    debug!("gRPC response body: {} bytes", bytes.len());

    if bytes.is_empty() {
        return Err(RpcError::Decode("Empty response body".to_string()));
    }

    decode_grpc_message(&bytes)
}

/// Room service client
pub mod room {
    use plaza_core::{JoinError, RoomSessionClient};
    use plaza_proto::room::{JoinRoomRequest, JoinRoomResponse, SERVICE};

    use super::{RpcError, call};

    pub struct RoomClient {
        base_url: String,
    }

    impl RoomClient {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                base_url: base_url.into(),
            }
        }

        pub async fn join_room(
            &self,
            room_id: &str,
            password: Option<&str>,
        ) -> Result<JoinRoomResponse, RpcError> {
            let req = JoinRoomRequest {
                room_id: room_id.to_string(),
                password: password.map(str::to_string),
            };
            call(&self.base_url, SERVICE, "JoinRoom", &req).await
        }
    }

    impl RoomSessionClient for RoomClient {
        async fn join_by_id(&self, room_id: &str, password: Option<&str>) -> Result<(), JoinError> {
            match self.join_room(room_id, password).await {
                Ok(response) => {
                    tracing::debug!(admitted = %response.room_id, "JoinRoom accepted");
                    Ok(())
                }
                // The server's status text is what gets classified ("Password required", ...)
                Err(RpcError::GrpcStatus { message, .. }) => Err(JoinError::new(message)),
                Err(e) => Err(JoinError::new(e.to_string())),
            }
        }
    }
}
