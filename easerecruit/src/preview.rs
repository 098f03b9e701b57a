//! `easerecruit preview` - play the tagline typewriter in the terminal.
//!
//! The machine is driven on the Tokio timer, one tick per sleep. A shutdown
//! future (Ctrl-C from `main`) races every sleep; once it wins the loop
//! returns and no further tick runs.

use std::future::Future;

use easerecruit_site::typewriter::Typewriter;
use tracing::{debug, warn};

/// How a preview run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The machine stopped on its final word
    Finished,
    /// Shutdown fired first
    Cancelled,
}

/// Drive `typewriter` until it stops or `shutdown` resolves, calling `render`
/// once up front and after every tick.
pub async fn animate<F, S>(mut typewriter: Typewriter, mut render: F, shutdown: S) -> Outcome
where
    F: FnMut(&Typewriter),
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    render(&typewriter);

    let Some(mut delay) = typewriter.initial_delay() else {
        return Outcome::Finished;
    };

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                debug!(text = typewriter.text(), "preview cancelled");
                return Outcome::Cancelled;
            }
            _ = tokio::time::sleep(delay) => {}
        }

        let next = typewriter.step();
        render(&typewriter);
        match next {
            Some(d) => delay = d,
            None => return Outcome::Finished,
        }
    }
}

/// Resolve when `signal` fires. If the listener cannot be installed, log it
/// and never resolve, so the run is not cut short.
pub async fn until_signal<S>(signal: S)
where
    S: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!(%err, "cannot listen for Ctrl-C, preview runs to completion");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easerecruit_site::types::TypewriterConfig;
    use std::io;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::oneshot;

    fn words(words: &[&str], loops: u32) -> Typewriter {
        Typewriter::new(TypewriterConfig {
            words: words.iter().map(|w| w.to_string()).collect(),
            loops,
            ..Default::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn runs_to_the_final_word() {
        let mut last = String::new();
        let outcome = animate(
            words(&["hi", "yo"], 2),
            |tw| last = tw.text().to_string(),
            std::future::pending(),
        )
        .await;

        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(last, "yo");
    }

    #[tokio::test(start_paused = true)]
    async fn finished_run_takes_its_run_time() {
        let typewriter = words(&["ab", "c"], 1);
        let expected = typewriter.run_time().expect("finite");

        let start = tokio::time::Instant::now();
        animate(typewriter, |_| {}, std::future::pending()).await;
        assert_eq!(start.elapsed(), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_word_list_finishes_immediately() {
        let mut renders = 0;
        let outcome = animate(words(&[], 5), |_| renders += 1, std::future::pending()).await;
        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(renders, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_mid_cycle_halts_ticks() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let (stop, stopped) = oneshot::channel::<()>();

        let task = tokio::spawn(animate(
            Typewriter::new(TypewriterConfig::default()),
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            async move {
                let _ = stopped.await;
            },
        ));

        tokio::time::sleep(Duration::from_millis(350)).await;
        stop.send(()).expect("preview still running");
        assert_eq!(task.await.expect("join"), Outcome::Cancelled);

        let seen = ticks.load(Ordering::SeqCst);
        assert!(seen > 1, "some ticks ran before teardown");
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_signal_listener_does_not_cancel() {
        let typewriter = words(&["hi", "yo"], 1);
        let expected = typewriter.run_time().expect("finite");
        let failure = async { Err(io::Error::other("no signal handler")) };

        let start = tokio::time::Instant::now();
        let mut last = String::new();
        let outcome = animate(
            typewriter,
            |tw| last = tw.text().to_string(),
            until_signal(failure),
        )
        .await;

        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(last, "yo");
        assert_eq!(start.elapsed(), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn delivered_signal_cancels() {
        let outcome = animate(
            words(&["hello"], 0),
            |_| {},
            until_signal(async { Ok(()) }),
        )
        .await;
        assert_eq!(outcome, Outcome::Cancelled);
    }
}
