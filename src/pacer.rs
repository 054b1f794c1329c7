use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Hands out one permit per request. Every network call acquires exactly one
/// permit right before it is issued.
#[async_trait]
pub trait Pacer: Send {
    async fn acquire(&mut self);
}

/// One permit per `period`, the first one a full period after creation.
/// No burst: a permit that nobody waited for is dropped, except the most
/// recent one which is handed out immediately.
pub struct IntervalPacer {
    interval: Interval,
}

impl IntervalPacer {
    pub fn new(period: Duration) -> IntervalPacer {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        IntervalPacer { interval }
    }
}

#[async_trait]
impl Pacer for IntervalPacer {
    async fn acquire(&mut self) {
        self.interval.tick().await;
    }
}
