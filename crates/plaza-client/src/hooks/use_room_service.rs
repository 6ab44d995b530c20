use std::rc::Rc;

use yew::prelude::*;

use crate::network::RoomClient;

#[hook]
pub fn use_room_service(rpc_path: &str) -> Rc<RoomClient> {
    use_memo(rpc_path.to_string(), |rpc_path| {
        let Some(window) = web_sys::window() else {
            panic!("No window object available");
        };
        let origin = window.location().origin().unwrap_or_default();
        RoomClient::new(format!("{origin}{rpc_path}"))
    })
}
