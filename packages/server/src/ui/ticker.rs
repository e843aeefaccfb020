//! Background playback clock.

use std::{sync::Arc, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};

use crate::usecase::AdvancePlaybackUseCase;

/// Advance the playback position by `period` every `period` while playing.
///
/// Nothing is broadcast; clients keep their own players running and only
/// late joiners or `sync_request`s observe the advanced position.
pub fn spawn_ticker(usecase: Arc<AdvancePlaybackUseCase>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let seconds = period.as_secs_f64();
        loop {
            ticker.tick().await;
            usecase.execute(seconds).await;
        }
    })
}
