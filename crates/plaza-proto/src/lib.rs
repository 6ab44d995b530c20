//! Plaza-Live Protocol Library
//!
//! Protobuf messages exchanged with the room service over gRPC-Web.
//!
//! The messages are declared with `prost` derives directly, so no `protoc`
//! step is needed at build time. Field tags must stay in sync with the
//! server's `room.proto`.

#[allow(clippy::pedantic)]
pub mod room {
    /// Fully-qualified gRPC service name.
    pub const SERVICE: &str = "room.RoomService";

    /// Request to join a room by its identifier.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct JoinRoomRequest {
        #[prost(string, tag = "1")]
        pub room_id: String,
        /// Absent on the first attempt; set when answering a password challenge.
        #[prost(string, optional, tag = "2")]
        pub password: Option<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct JoinRoomResponse {
        /// Room the session was admitted to.
        #[prost(string, tag = "1")]
        pub room_id: String,
    }
}
