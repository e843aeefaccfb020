//! Canonical playback state of the room.

use super::value_object::{ClientId, PlaybackPosition, PlaybackRate, Timestamp, VideoSource};

/// A state change requested by a client.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackMutation {
    Play,
    Pause,
    Seek(PlaybackPosition),
    RateChange(PlaybackRate),
    /// Loading a new video always rewinds to 0 and pauses.
    VideoChange(VideoSource),
}

impl PlaybackMutation {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Seek(_) => "seek",
            Self::RateChange(_) => "ratechange",
            Self::VideoChange(_) => "video_change",
        }
    }
}

/// Read-only copy of the room's playback state.
///
/// Fields are only writable through [`PlaybackState::apply`] and
/// [`PlaybackState::advance`], which the room aggregate guards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    current_time: PlaybackPosition,
    paused: bool,
    playback_rate: PlaybackRate,
    video: Option<VideoSource>,
    last_update_by: Option<ClientId>,
    last_update_time: Timestamp,
}

impl PlaybackState {
    /// Paused at 0, normal speed, no video.
    pub fn new(created_at: Timestamp) -> Self {
        Self {
            current_time: PlaybackPosition::ZERO,
            paused: true,
            playback_rate: PlaybackRate::NORMAL,
            video: None,
            last_update_by: None,
            last_update_time: created_at,
        }
    }

    pub fn current_time(&self) -> PlaybackPosition {
        self.current_time
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn playback_rate(&self) -> PlaybackRate {
        self.playback_rate
    }

    pub fn video(&self) -> Option<&VideoSource> {
        self.video.as_ref()
    }

    pub fn last_update_by(&self) -> Option<ClientId> {
        self.last_update_by
    }

    pub fn last_update_time(&self) -> Timestamp {
        self.last_update_time
    }

    /// Apply an accepted mutation on behalf of `by`.
    ///
    /// `last_update_time` never moves backwards even if the clock does.
    pub(super) fn apply(&mut self, mutation: PlaybackMutation, by: ClientId, now: Timestamp) {
        match mutation {
            PlaybackMutation::Play => self.paused = false,
            PlaybackMutation::Pause => self.paused = true,
            PlaybackMutation::Seek(position) => self.current_time = position,
            PlaybackMutation::RateChange(rate) => self.playback_rate = rate,
            PlaybackMutation::VideoChange(video) => {
                self.video = Some(video);
                self.current_time = PlaybackPosition::ZERO;
                self.paused = true;
            }
        }
        self.last_update_by = Some(by);
        self.last_update_time = self.last_update_time.max(now);
    }

    /// Background time passage. Does not touch the update owner or time.
    pub(super) fn advance(&mut self, seconds: f64) -> bool {
        if self.paused {
            return false;
        }
        self.current_time = self.current_time.advanced_by(seconds);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seek(seconds: f64) -> PlaybackMutation {
        PlaybackMutation::Seek(PlaybackPosition::new(seconds).unwrap())
    }

    #[test]
    fn test_initial_state_is_paused_at_zero() {
        // テスト項目: 初期状態は 0 秒で一時停止、通常速度、動画なし
        // given (前提条件):
        let created_at = Timestamp::new(1_000);

        // when (操作):
        let state = PlaybackState::new(created_at);

        // then (期待する結果):
        assert_eq!(state.current_time(), PlaybackPosition::ZERO);
        assert!(state.paused());
        assert_eq!(state.playback_rate(), PlaybackRate::NORMAL);
        assert_eq!(state.video(), None);
        assert_eq!(state.last_update_by(), None);
        assert_eq!(state.last_update_time(), created_at);
    }

    #[test]
    fn test_apply_records_owner_and_time() {
        // テスト項目: 変更を適用すると更新者と更新時刻が記録される
        // given (前提条件):
        let mut state = PlaybackState::new(Timestamp::new(0));

        // when (操作):
        state.apply(seek(42.0), ClientId::new(2), Timestamp::new(500));
        state.apply(PlaybackMutation::Play, ClientId::new(1), Timestamp::new(600));

        // then (期待する結果):
        assert_eq!(state.current_time().value(), 42.0);
        assert!(!state.paused());
        assert_eq!(state.last_update_by(), Some(ClientId::new(1)));
        assert_eq!(state.last_update_time(), Timestamp::new(600));
    }

    #[test]
    fn test_last_update_time_is_monotonic() {
        // テスト項目: 時計が戻っても lastUpdateTime は減少しない
        // given (前提条件):
        let mut state = PlaybackState::new(Timestamp::new(0));
        state.apply(PlaybackMutation::Play, ClientId::new(1), Timestamp::new(900));

        // when (操作):
        state.apply(PlaybackMutation::Pause, ClientId::new(1), Timestamp::new(100));

        // then (期待する結果):
        assert_eq!(state.last_update_time(), Timestamp::new(900));
    }

    #[test]
    fn test_video_change_resets_position_and_pauses() {
        // テスト項目: 動画変更は再生位置を 0 に戻し、一時停止にする
        // given (前提条件):
        let mut state = PlaybackState::new(Timestamp::new(0));
        state.apply(seek(120.0), ClientId::new(1), Timestamp::new(1));
        state.apply(PlaybackMutation::Play, ClientId::new(1), Timestamp::new(2));
        let video = VideoSource::new(
            "https://example.com/a.mp4".to_string(),
            Some("A".to_string()),
        )
        .unwrap();

        // when (操作):
        state.apply(
            PlaybackMutation::VideoChange(video.clone()),
            ClientId::new(1),
            Timestamp::new(3),
        );

        // then (期待する結果):
        assert_eq!(state.current_time(), PlaybackPosition::ZERO);
        assert!(state.paused());
        assert_eq!(state.video(), Some(&video));
    }

    #[test]
    fn test_advance_only_while_playing() {
        // テスト項目: 時間経過による前進は再生中のみ行われ、更新者を変更しない
        // given (前提条件):
        let mut state = PlaybackState::new(Timestamp::new(0));

        // when (操作): 一時停止中に前進
        let advanced_while_paused = state.advance(1.0);

        // then (期待する結果):
        assert!(!advanced_while_paused);
        assert_eq!(state.current_time(), PlaybackPosition::ZERO);

        // when (操作): 再生中に前進
        state.apply(PlaybackMutation::Play, ClientId::new(3), Timestamp::new(10));
        assert!(state.advance(1.0));
        assert!(state.advance(1.0));

        // then (期待する結果):
        assert_eq!(state.current_time().value(), 2.0);
        assert_eq!(state.last_update_by(), Some(ClientId::new(3)));
        assert_eq!(state.last_update_time(), Timestamp::new(10));
    }
}
