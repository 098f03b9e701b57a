//! Tick bookkeeping shared by timer drivers.
//!
//! A [`Ticker`] owns the teardown flag and the cancel hook of the timer that
//! is currently pending. The browser driver in [`crate::components`] schedules
//! one page timeout per tick and calls [`Ticker::tick`] from it; unmounting
//! calls [`Ticker::teardown`], after which no tick steps the machine or writes
//! text.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::typewriter::Typewriter;

type CancelHook = Box<dyn FnOnce() + Send>;

/// Teardown flag plus the cancel hook of the pending timer. Clones share state.
#[derive(Clone, Default)]
pub struct Ticker {
    torn_down: Arc<AtomicBool>,
    pending: Arc<Mutex<Option<CancelHook>>>,
}

impl Ticker {
    /// Remember how to cancel the timer that was just scheduled. Cancels it
    /// right away if teardown already happened.
    pub fn set_pending(&self, cancel: impl FnOnce() + Send + 'static) {
        if self.is_torn_down() {
            cancel();
            return;
        }
        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(Box::new(cancel));
        }
    }

    /// Stop ticking: set the flag and cancel the pending timer, if any.
    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
        let cancel = self
            .pending
            .lock()
            .ok()
            .and_then(|mut pending| pending.take());
        if let Some(cancel) = cancel {
            cancel();
        }
    }

    /// Whether [`Ticker::teardown`] ran.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// Run one tick of `typewriter` and hand the new text to `write`.
    ///
    /// `write` returns `false` when its target is gone (a disposed signal).
    /// Returns the delay before the next tick, or `None` when the chain must
    /// end: torn down, target gone, or the machine stopped.
    pub fn tick(
        &self,
        typewriter: &mut Typewriter,
        write: impl FnOnce(String) -> bool,
    ) -> Option<Duration> {
        if self.is_torn_down() {
            return None;
        }
        let delay = typewriter.step();
        if !write(typewriter.text().to_string()) {
            return None;
        }
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::Phase;
    use crate::types::TypewriterConfig;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;

    fn typewriter() -> Typewriter {
        Typewriter::new(TypewriterConfig::default())
    }

    #[test]
    fn ticks_step_and_write() {
        let ticker = Ticker::default();
        let mut tw = typewriter();
        let mut written = Vec::new();

        let delay = ticker.tick(&mut tw, |text| {
            written.push(text);
            true
        });

        assert_eq!(delay, Some(Duration::from_millis(100)));
        assert_eq!(written, vec!["T".to_string()]);
    }

    #[test]
    fn no_step_and_no_write_after_teardown() {
        let ticker = Ticker::default();
        let mut tw = typewriter();
        ticker.tick(&mut tw, |_| true);
        ticker.tick(&mut tw, |_| true);
        let before = tw.phase();

        ticker.clone().teardown();

        let mut writes = 0;
        for _ in 0..10 {
            assert_eq!(
                ticker.tick(&mut tw, |_| {
                    writes += 1;
                    true
                }),
                None
            );
        }
        assert_eq!(writes, 0);
        assert_eq!(tw.phase(), before);
        assert_eq!(tw.text(), "Ta");
    }

    #[test]
    fn teardown_cancels_pending_timer_once() {
        let ticker = Ticker::default();
        let cancelled = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&cancelled);
        ticker.set_pending(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        ticker.teardown();
        ticker.teardown();
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn timer_scheduled_after_teardown_is_cancelled() {
        let ticker = Ticker::default();
        ticker.teardown();

        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        ticker.set_pending(move || flag.store(true, Ordering::SeqCst));
        assert!(cancelled.load(Ordering::SeqCst));
    }

    #[test]
    fn disposed_target_ends_the_chain() {
        let ticker = Ticker::default();
        let mut tw = typewriter();
        assert_eq!(ticker.tick(&mut tw, |_| false), None);
        assert!(!ticker.is_torn_down());
    }

    #[test]
    fn stopped_machine_ends_the_chain() {
        let ticker = Ticker::default();
        let mut tw = Typewriter::new(TypewriterConfig {
            words: vec!["a".into()],
            loops: 1,
            ..Default::default()
        });
        let mut last = String::new();
        assert_eq!(
            ticker.tick(&mut tw, |text| {
                last = text;
                true
            }),
            None
        );
        assert_eq!(last, "a");
        assert_eq!(tw.phase(), Phase::Stopped);
    }
}
