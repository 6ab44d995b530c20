mod use_config;
mod use_room_join;
mod use_room_service;

pub use use_config::use_config;
pub use use_room_join::*;
pub use use_room_service::use_room_service;
