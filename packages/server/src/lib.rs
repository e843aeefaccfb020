//! Watch party synchronization relay.
//!
//! A single room keeps one shared playback state. Connected clients change it
//! under a priority rule (an elected admin first, then the lowest id), and
//! every accepted change is fanned out over WebSocket. Chat, actions, system
//! notices and danmaku are relayed untouched.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
