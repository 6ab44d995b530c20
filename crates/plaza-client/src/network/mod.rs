//! Network layer for the room service.

pub mod grpc_web;

pub use grpc_web::room::RoomClient;
