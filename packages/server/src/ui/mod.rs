//! WebSocket relay server: HTTP routing, connection handling and the playback ticker.

mod handler;
mod server;
mod signal;
pub mod state;
mod ticker;

pub use server::Server;
pub use state::AppState;
