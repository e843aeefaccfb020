//! Watch party sync server.
//!
//! Keeps one shared playback state and relays it, along with chat and danmaku,
//! to every connected client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin watchparty-server
//! cargo run --bin watchparty-server -- --host 0.0.0.0 --port 3001 --tick-interval-ms 1000
//! ```

use std::{collections::HashMap, sync::Arc, time::Duration};

use clap::Parser;
use tokio::sync::Mutex;
use watchparty_server::{
    domain::{Room, RoomIdFactory, Timestamp},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
    ui::{AppState, Server},
};
use watchparty_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[derive(Parser, Debug)]
#[command(name = "watchparty-server")]
#[command(about = "Watch party playback sync server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3001")]
    port: u16,

    /// Period of the playback clock in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    tick_interval_ms: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger("watchparty_server", env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. UseCases (AppState)
    // 4. Server

    // 1. Create Repository (in-memory database)
    let clock = Arc::new(SystemClock);
    let room_id = match RoomIdFactory::generate() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to generate room id: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Room {} created!", room_id.as_str());
    let room = Arc::new(Mutex::new(Room::new(
        room_id,
        Timestamp::new(clock.now_millis()),
    )));
    let repository = Arc::new(InMemoryRoomRepository::new(room));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 3. Create UseCases
    let state = AppState::new(repository, message_pusher, clock);

    // 4. Create and run the server
    let server = Server::new(state, Duration::from_millis(args.tick_interval_ms));
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
