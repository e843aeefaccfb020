//! Infrastructure layer: wire DTOs, storage and message delivery.

pub mod dto;
pub mod message_pusher;
pub mod repository;
