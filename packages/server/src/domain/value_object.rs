//! Value objects of the watch room.

use std::fmt;

use super::error::ValueObjectError;

/// Connection identity assigned by the registry.
///
/// Ids start at 1 and are never reused for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(u64);

impl ClientId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Self-reported display name of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nickname(String);

impl Nickname {
    /// Maximum number of characters kept from a requested nickname.
    pub const MAX_CHARS: usize = 32;

    /// Trim the value and cap it at [`Nickname::MAX_CHARS`] characters.
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyNickname);
        }
        Ok(Self(trimmed.chars().take(Self::MAX_CHARS).collect()))
    }

    /// Nickname given to a client that has not chosen one.
    pub fn default_for(client_id: ClientId) -> Self {
        Self(format!("User{}", client_id.value()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Position in the shared video, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PlaybackPosition(f64);

impl PlaybackPosition {
    pub const ZERO: Self = Self(0.0);

    pub fn new(seconds: f64) -> Result<Self, ValueObjectError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ValueObjectError::InvalidPlaybackPosition(seconds));
        }
        Ok(Self(seconds))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Move forward by `seconds`, ignoring non-finite or negative steps.
    pub fn advanced_by(self, seconds: f64) -> Self {
        if !seconds.is_finite() || seconds <= 0.0 {
            return self;
        }
        let next = self.0 + seconds;
        if next.is_finite() { Self(next) } else { self }
    }
}

/// Playback speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    pub const NORMAL: Self = Self(1.0);

    pub fn new(rate: f64) -> Result<Self, ValueObjectError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ValueObjectError::InvalidPlaybackRate(rate));
        }
        Ok(Self(rate))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// The video currently loaded in the room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    url: String,
    title: Option<String>,
}

impl VideoSource {
    pub fn new(url: String, title: Option<String>) -> Result<Self, ValueObjectError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ValueObjectError::EmptyVideoUrl);
        }
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Ok(Self {
            url: url.to_string(),
            title,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Identifier of the (single) room served by this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyRoomId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Generates fresh room ids.
pub struct RoomIdFactory;

impl RoomIdFactory {
    pub fn generate() -> Result<RoomId, ValueObjectError> {
        RoomId::new(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_is_trimmed_and_truncated() {
        // テスト項目: ニックネームは前後の空白が除去され、最大文字数で切り詰められる
        // given (前提条件):
        let long = format!("  {}  ", "あ".repeat(40));

        // when (操作):
        let short = Nickname::new("  alice ".to_string()).unwrap();
        let truncated = Nickname::new(long).unwrap();

        // then (期待する結果):
        assert_eq!(short.as_str(), "alice");
        assert_eq!(truncated.as_str().chars().count(), Nickname::MAX_CHARS);
    }

    #[test]
    fn test_nickname_rejects_blank() {
        // テスト項目: 空白のみのニックネームはエラーになる
        // given (前提条件):
        let blank = "   ".to_string();

        // when (操作):
        let result = Nickname::new(blank);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyNickname));
    }

    #[test]
    fn test_default_nickname_uses_client_id() {
        // テスト項目: デフォルトのニックネームは "User<id>" になる
        // given (前提条件):
        let client_id = ClientId::new(7);

        // when (操作):
        let nickname = Nickname::default_for(client_id);

        // then (期待する結果):
        assert_eq!(nickname.as_str(), "User7");
    }

    #[test]
    fn test_playback_position_rejects_negative_and_non_finite() {
        // テスト項目: 負の値・非有限値の再生位置は拒否される
        // given (前提条件):
        let invalid = [-1.0, f64::NAN, f64::INFINITY];

        // when (操作) / then (期待する結果):
        for value in invalid {
            assert!(PlaybackPosition::new(value).is_err(), "{value} should be rejected");
        }
        assert_eq!(PlaybackPosition::new(0.0).unwrap(), PlaybackPosition::ZERO);
        assert_eq!(PlaybackPosition::new(42.5).unwrap().value(), 42.5);
    }

    #[test]
    fn test_playback_position_advance_ignores_invalid_steps() {
        // テスト項目: 再生位置の前進は不正なステップを無視する
        // given (前提条件):
        let position = PlaybackPosition::new(10.0).unwrap();

        // when (操作):
        let advanced = position.advanced_by(1.0);
        let unchanged = position.advanced_by(f64::NAN);

        // then (期待する結果):
        assert_eq!(advanced.value(), 11.0);
        assert_eq!(unchanged.value(), 10.0);
    }

    #[test]
    fn test_playback_rate_must_be_positive() {
        // テスト項目: 再生速度は有限の正数でなければならない
        // given (前提条件):
        let invalid = [0.0, -1.5, f64::NAN, f64::NEG_INFINITY];

        // when (操作) / then (期待する結果):
        for value in invalid {
            assert!(PlaybackRate::new(value).is_err(), "{value} should be rejected");
        }
        assert_eq!(PlaybackRate::new(1.5).unwrap().value(), 1.5);
        assert_eq!(PlaybackRate::default(), PlaybackRate::NORMAL);
    }

    #[test]
    fn test_video_source_requires_url() {
        // テスト項目: 動画 URL は空であってはならず、空のタイトルは None になる
        // given (前提条件):
        let url = " https://example.com/movie.mp4 ".to_string();

        // when (操作):
        let video = VideoSource::new(url, Some("  ".to_string())).unwrap();
        let empty = VideoSource::new("   ".to_string(), None);

        // then (期待する結果):
        assert_eq!(video.url(), "https://example.com/movie.mp4");
        assert_eq!(video.title(), None);
        assert_eq!(empty, Err(ValueObjectError::EmptyVideoUrl));
    }

    #[test]
    fn test_room_id_factory_generates_unique_ids() {
        // テスト項目: RoomIdFactory は毎回異なる ID を生成する
        // given (前提条件):

        // when (操作):
        let id1 = RoomIdFactory::generate().unwrap();
        let id2 = RoomIdFactory::generate().unwrap();

        // then (期待する結果):
        assert_ne!(id1, id2);
    }
}
