//! Auto-advance timer for the hero carousel.

use std::sync::Arc;
use std::time::Duration;

use pocketshop_core::Carousel;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Shared slide state: the timer and manual navigation both write to it,
/// renderers subscribe to it.
pub type SlideState = Arc<watch::Sender<Carousel>>;

/// A recurring task that advances the carousel once per period.
///
/// Dropping the timer cancels it. The first advance happens one full period
/// after [`start`](Self::start), never immediately.
#[derive(Debug, Default)]
pub struct CarouselTimer {
    handle: Option<JoinHandle<()>>,
}

impl CarouselTimer {
    /// Spawn the timer on the current tokio runtime.
    #[must_use]
    pub fn start(slides: SlideState, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                slides.send_if_modified(|carousel| {
                    let before = carousel.current();
                    carousel.advance();
                    carousel.current() != before
                });
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Cancel the running timer, if any, then start a fresh one.
    pub fn restart(&mut self, slides: SlideState, period: Duration) {
        self.cancel();
        *self = Self::start(slides, period);
    }

    /// Stop advancing. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for CarouselTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
