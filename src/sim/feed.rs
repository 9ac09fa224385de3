//! Async section feed.
//!
//! Drives a [`Section`] on a tokio interval in a background task and
//! publishes a snapshot after every tick through a watch channel. Used by the
//! headless stream mode; the interactive UI polls [`Mounted`](super::Mounted)
//! sections instead.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use super::{Section, Simulator};

/// A section ticking in a background task.
///
/// Dropping the feed aborts the task, so no snapshot is published after the
/// owner goes away.
///
/// # Example
///
/// ```
/// use ragentech_console::sections::Hero;
/// use ragentech_console::sim::{Feed, Simulator};
///
/// # tokio_test::block_on(async {
/// let feed = Feed::spawn(Hero::new(), Simulator::seeded(1));
/// assert_eq!(feed.latest().index(), 0);
/// feed.cancel();
/// # });
/// ```
#[derive(Debug)]
pub struct Feed<S> {
    receiver: watch::Receiver<S>,
    handle: JoinHandle<()>,
}

impl<S> Feed<S>
where
    S: Section + Clone + Send + Sync + 'static,
{
    /// Spawn the ticking task. Must be called inside a tokio runtime.
    pub fn spawn(section: S, mut sim: Simulator) -> Self {
        let period = section.interval();
        let name = section.name();
        let (tx, receiver) = watch::channel(section.clone());

        let handle = tokio::spawn(async move {
            let mut section = section;
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticks.tick().await;
                section.on_tick(&mut sim);
                if tx.send(section.clone()).is_err() {
                    debug!(section = name, "feed receivers dropped, stopping");
                    break;
                }
            }
        });

        Self { receiver, handle }
    }

    /// Wait for the next snapshot. Returns `None` once the task has stopped.
    pub async fn changed(&mut self) -> Option<S> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Most recent snapshot without waiting.
    pub fn latest(&self) -> S {
        self.receiver.borrow().clone()
    }

    /// Another receiver of the same snapshots.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.receiver.clone()
    }

    /// Stop the task.
    pub fn cancel(self) {
        drop(self);
    }
}

impl<S> Drop for Feed<S> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
