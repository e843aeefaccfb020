//! Domain layer: the watch room and the seams it is driven through.

pub mod election;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod playback;
pub mod registry;
pub mod repository;
pub mod room;
pub mod value_object;

#[cfg(test)]
pub use message_pusher::MockMessagePusher;

pub use election::{Election, ElectionStatus, VoteOutcome, votes_needed};
pub use error::{MessagePushError, ValueObjectError};
pub use event::{RelayKind, RelayMessage, RoomEvent};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use playback::{PlaybackMutation, PlaybackState};
pub use registry::{Client, ConnectionRegistry};
pub use repository::RoomRepository;
pub use room::{NicknameChange, Room, UNBOUNDED_WEIGHT, Weight};
pub use value_object::{
    ClientId, Nickname, PlaybackPosition, PlaybackRate, RoomId, RoomIdFactory, Timestamp,
    VideoSource,
};
