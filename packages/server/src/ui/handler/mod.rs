//! Request handlers.

mod http;
mod message_router;
mod websocket;

pub use http::{health_check, room_state};
pub use websocket::websocket_handler;
