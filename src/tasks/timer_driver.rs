//! Timer driver background task

use std::time::Duration;

use tokio::{
    sync::{mpsc, oneshot},
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    engine::{TickOutcome, TimerEngine},
    error::Result,
    services::{NotificationService, PresentationSink},
    state::TimerState,
};

/// Operations front ends can ask the engine to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    Start,
    Pause,
    Reset,
    SwitchMode(String),
    Snapshot,
}

impl TimerAction {
    /// Short name used for logging and last-action tracking
    pub fn name(&self) -> &'static str {
        match self {
            TimerAction::Start => "start",
            TimerAction::Pause => "pause",
            TimerAction::Reset => "reset",
            TimerAction::SwitchMode(_) => "mode",
            TimerAction::Snapshot => "snapshot",
        }
    }
}

/// An action together with the channel its outcome is reported on
#[derive(Debug)]
pub struct TimerCommand {
    pub action: TimerAction,
    pub reply: oneshot::Sender<Result<TimerState>>,
}

/// Background task that owns the engine and serializes commands and ticks into it.
///
/// The one-second interval exists only while the engine is running. It is
/// dropped as soon as an operation leaves the running phase, so no tick
/// is delivered after a pause, reset, mode switch or completion.
pub async fn timer_driver_task<P, N>(
    mut engine: TimerEngine<P, N>,
    mut commands: mpsc::Receiver<TimerCommand>,
    tick_period: Duration,
) where
    P: PresentationSink,
    N: NotificationService,
{
    info!("Starting timer driver task");
    engine.notifier().request_permission_if_undetermined();

    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            _ = next_tick(&mut ticker) => {
                match engine.tick() {
                    TickOutcome::Counting { remaining_seconds } => {
                        debug!("Tick: {}s remaining", remaining_seconds);
                    }
                    TickOutcome::Completed => {
                        info!("Countdown finished, tick process halted");
                    }
                    TickOutcome::Ignored => {
                        warn!("Tick delivered while not running");
                    }
                }
                sync_ticker(&engine, &mut ticker, tick_period);
            }

            command = commands.recv() => {
                let Some(command) = command else {
                    info!("All command senders dropped, stopping timer driver");
                    break;
                };

                debug!("Timer driver received command: {}", command.action.name());
                let result = apply(&mut engine, command.action);
                sync_ticker(&engine, &mut ticker, tick_period);

                if command.reply.send(result).is_err() {
                    debug!("Command issuer went away before the reply");
                }
            }
        }
    }
}

fn apply<P, N>(engine: &mut TimerEngine<P, N>, action: TimerAction) -> Result<TimerState>
where
    P: PresentationSink,
    N: NotificationService,
{
    match action {
        TimerAction::Start => {
            engine.start();
        }
        TimerAction::Pause => {
            engine.pause();
        }
        TimerAction::Reset => engine.reset(),
        TimerAction::SwitchMode(mode_id) => {
            engine.switch_mode(&mode_id)?;
        }
        TimerAction::Snapshot => {}
    }
    Ok(engine.state().clone())
}

/// Arm the interval on entering the running phase, drop it on leaving
fn sync_ticker<P, N>(engine: &TimerEngine<P, N>, ticker: &mut Option<Interval>, period: Duration)
where
    P: PresentationSink,
    N: NotificationService,
{
    if engine.is_running() {
        if ticker.is_none() {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            *ticker = Some(interval);
            debug!("Tick process armed");
        }
    } else if ticker.take().is_some() {
        debug!("Tick process cancelled");
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
