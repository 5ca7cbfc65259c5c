// scheduler.rs - Fixed-delay tick loop driving the grid model

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, trace};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::model::GridModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    Running,
    #[default]
    Stopped,
}

/// Handle to one spawned tick loop. Setting `stopped` makes the loop exit at
/// its next wake-up without stepping again.
#[derive(Debug)]
struct TickLoop {
    stopped: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl TickLoop {
    fn cancel(&self) {
        self.stopped.store(true, Ordering::Release);
    }
}

/// Drives [`GridModel::advance`] at a fixed delay while running.
///
/// At most one tick loop is live at a time: `start` on a running scheduler is a
/// no-op, and `stop` detaches the current loop so a later `start` spawns a
/// fresh one. A loop that is mid-step when `stop` is called still publishes
/// that generation; it never schedules another.
#[derive(Debug)]
pub struct SimulationScheduler {
    model: Arc<GridModel>,
    interval: Duration,
    runtime: Handle,
    active: Mutex<Option<TickLoop>>,
}

impl SimulationScheduler {
    pub fn new(model: Arc<GridModel>, interval: Duration, runtime: Handle) -> Self {
        Self {
            model,
            interval,
            runtime,
            active: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> RunState {
        if self.active.lock().is_some() {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn start(&self) {
        let mut active = self.active.lock();
        if active.is_some() {
            trace!("start ignored, tick loop already running");
            return;
        }

        let stopped = Arc::new(AtomicBool::new(false));
        let task = self.runtime.spawn(run_ticks(
            Arc::clone(&self.model),
            self.interval,
            Arc::clone(&stopped),
        ));
        *active = Some(TickLoop { stopped, task });
        debug!("simulation started, ticking every {:?}", self.interval);
    }

    pub fn stop(&self) {
        let Some(tick_loop) = self.active.lock().take() else {
            return;
        };
        tick_loop.cancel();
        debug!(
            "simulation stopped at generation {} (loop finished: {})",
            self.model.generation(),
            tick_loop.task.is_finished()
        );
    }
}

impl Drop for SimulationScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sleeps, checks for cancellation, steps; repeat. The next sleep only begins
/// once the previous generation has been published, so steps never overlap.
async fn run_ticks(model: Arc<GridModel>, interval: Duration, stopped: Arc<AtomicBool>) {
    loop {
        tokio::time::sleep(interval).await;
        if stopped.load(Ordering::Acquire) {
            trace!("tick loop exiting");
            break;
        }
        let generation = model.advance();
        trace!("generation {generation}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::BLINKER;
    use tokio::time::sleep;

    const TICK: Duration = Duration::from_millis(100);

    fn blinker_scheduler() -> (Arc<GridModel>, SimulationScheduler) {
        let model = Arc::new(GridModel::empty(5, 5));
        model.load_pattern(&BLINKER).unwrap();
        let scheduler = SimulationScheduler::new(Arc::clone(&model), TICK, Handle::current());
        (model, scheduler)
    }

    #[tokio::test(start_paused = true)]
    async fn starts_stopped() {
        let (_, scheduler) = blinker_scheduler();
        assert_eq!(scheduler.state(), RunState::Stopped);
        assert!(!scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn one_generation_per_interval() {
        let (model, scheduler) = blinker_scheduler();
        scheduler.start();
        assert!(scheduler.is_running());

        sleep(Duration::from_millis(350)).await;
        assert_eq!(model.generation(), 3);
        scheduler.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn second_start_does_not_add_a_loop() {
        let (model, scheduler) = blinker_scheduler();
        scheduler.start();
        scheduler.start();

        sleep(Duration::from_millis(550)).await;
        assert_eq!(model.generation(), 5);

        // Starting mid-run must not add a second loop either.
        scheduler.start();
        sleep(Duration::from_millis(200)).await;
        assert_eq!(model.generation(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_before_first_tick_changes_nothing() {
        let (model, scheduler) = blinker_scheduler();
        let before = model.snapshot();

        scheduler.start();
        scheduler.stop();
        sleep(Duration::from_secs(1)).await;

        assert_eq!(model.generation(), 0);
        assert!(Arc::ptr_eq(&before, &model.snapshot()));
        assert_eq!(scheduler.state(), RunState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_stop() {
        let (model, scheduler) = blinker_scheduler();
        scheduler.start();
        sleep(Duration::from_millis(250)).await;
        scheduler.stop();
        assert_eq!(model.generation(), 2);

        sleep(Duration::from_millis(500)).await;
        assert_eq!(model.generation(), 2);

        scheduler.start();
        sleep(Duration::from_millis(150)).await;
        assert_eq!(model.generation(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_then_start_within_one_interval_keeps_single_cadence() {
        let (model, scheduler) = blinker_scheduler();
        scheduler.start();
        sleep(Duration::from_millis(50)).await;
        scheduler.stop();
        scheduler.start();

        // The old loop wakes at 100ms, sees it was cancelled and exits; only
        // the new loop (ticking at 150ms, 250ms, ...) steps the grid.
        sleep(Duration::from_millis(220)).await;
        assert_eq!(model.generation(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_scheduler_stops_ticking() {
        let (model, scheduler) = blinker_scheduler();
        scheduler.start();
        sleep(Duration::from_millis(150)).await;
        drop(scheduler);

        sleep(Duration::from_secs(1)).await;
        assert_eq!(model.generation(), 1);
    }
}
