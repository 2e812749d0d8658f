use std::{sync::Arc, time::Duration};

use tokio::{sync::watch, task::JoinHandle, time::sleep};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, error, info, info_span};

use crate::{config::Config, refresh::pipeline::Pipeline};

#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    pub refresh_interval: Duration,
    pub retry_cooldown: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(3600),
            retry_cooldown: Duration::from_secs(300), // 5 minutes
        }
    }
}

impl From<&Config> for SchedulerConfig {
    fn from(config: &Config) -> Self {
        Self {
            refresh_interval: config.refresh_interval(),
            retry_cooldown: config.retry_cooldown(),
        }
    }
}

impl SchedulerConfig {
    fn delay_after(&self, outcome: CycleOutcome) -> Duration {
        match outcome {
            CycleOutcome::Success => self.refresh_interval,
            CycleOutcome::Failure => self.retry_cooldown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    /// Waiting out the regular interval after a successful cycle.
    SleepLong,
    /// Waiting out the cooldown after a cycle that panicked.
    SleepShort,
    Stopped,
}

/// Periodic driver of the refresh pipeline.
pub struct Scheduler;

impl Scheduler {
    /// Runs one cycle before returning, so the snapshot is populated before
    /// anyone reads it, then keeps refreshing in a background task until
    /// `shutdown` is cancelled.
    pub async fn start(
        pipeline: Arc<Pipeline>,
        config: SchedulerConfig,
        shutdown: CancellationToken,
    ) -> SchedulerHandle {
        info!(
            "Starting refresh scheduler - interval: {}s, cooldown: {}s",
            config.refresh_interval.as_secs(),
            config.retry_cooldown.as_secs()
        );

        let (state_tx, state_rx) = watch::channel(SchedulerState::Idle);
        let first = run_cycle(&pipeline, &state_tx).await;

        let join = tokio::spawn(
            run_loop(pipeline, config, first, state_tx, shutdown.clone())
                .instrument(info_span!("scheduler")),
        );

        SchedulerHandle {
            shutdown,
            join,
            state: state_rx,
        }
    }
}

/// Owner's view of the background loop.
pub struct SchedulerHandle {
    shutdown: CancellationToken,
    join: JoinHandle<()>,
    state: watch::Receiver<SchedulerState>,
}

impl SchedulerHandle {
    pub fn state(&self) -> SchedulerState {
        *self.state.borrow()
    }

    /// Stops the loop at its next wait and waits for it to exit. A cycle that
    /// is already running is allowed to finish.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(e) = self.join.await {
            error!("Refresh scheduler task ended abnormally: {}", e);
        }
    }
}

async fn run_loop(
    pipeline: Arc<Pipeline>,
    config: SchedulerConfig,
    mut outcome: CycleOutcome,
    state: watch::Sender<SchedulerState>,
    shutdown: CancellationToken,
) {
    loop {
        let delay = config.delay_after(outcome);
        state.send_replace(match outcome {
            CycleOutcome::Success => SchedulerState::SleepLong,
            CycleOutcome::Failure => SchedulerState::SleepShort,
        });
        debug!("Next refresh in {}s", delay.as_secs());

        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!("Refresh scheduler shutting down");
                break;
            }
            _ = sleep(delay) => {}
        }

        state.send_replace(SchedulerState::Idle);
        outcome = run_cycle(&pipeline, &state).await;
    }
    state.send_replace(SchedulerState::Stopped);
}

/// Runs the pipeline in its own task so a panic anywhere in the cycle is
/// contained and reported as a failed cycle.
async fn run_cycle(
    pipeline: &Arc<Pipeline>,
    state: &watch::Sender<SchedulerState>,
) -> CycleOutcome {
    state.send_replace(SchedulerState::Running);

    let pipeline = pipeline.clone();
    match tokio::spawn(async move { pipeline.run().await }).await {
        Ok(snapshot) => {
            debug!("Refresh cycle published {} listings", snapshot.len());
            CycleOutcome::Success
        }
        Err(e) => {
            error!("Refresh cycle failed unexpectedly: {}", e);
            CycleOutcome::Failure
        }
    }
}
