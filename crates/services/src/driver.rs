//! Runs a `QuizSession` on its own task.
//!
//! DESIGN
//! ======
//! One task owns the session and serializes every mutation: periodic ticks,
//! submitted answers and the delayed advance after an answer. Snapshots go
//! out on a `watch` channel after each mutation. The answer record is
//! committed before the advance timer is armed, so question N's record is
//! always published before question N+1 becomes current.
//!
//! CANCELLATION
//! ============
//! The task ends when the session finishes, when a handle calls `shutdown`,
//! or when every handle has been dropped. Ending drops the ticker and any
//! pending advance.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use quiz_core::{
    OptionKey, PendingAdvance, QuizSession, SessionPhase, SessionSnapshot, SubmitOutcome,
    TickOutcome,
};

/// Timing knobs for the session task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Period of the countdown ticker.
    pub tick_interval: Duration,
    /// Delay between recording an answer and showing the next question.
    pub advance_delay: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            advance_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug)]
enum Command {
    Submit(OptionKey),
    Shutdown,
}

/// Cloneable handle to a running session task.
#[derive(Clone, Debug)]
pub struct QuizHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl QuizHandle {
    /// Queue an answer for the current question.
    ///
    /// Returns false if the session task has already stopped.
    pub fn submit(&self, key: OptionKey) -> bool {
        self.commands.send(Command::Submit(key)).is_ok()
    }

    /// Stop the session task. Pending ticks and advances are cancelled.
    pub fn shutdown(&self) {
        let _ = self.commands.send(Command::Shutdown);
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that wakes on every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// True once the task is gone (finished, shut down, or panicked).
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.commands.is_closed()
    }
}

/// Spawn the session task on the current tokio runtime.
///
/// The join handle resolves to the final session state once the task stops.
#[must_use]
pub fn spawn_session(session: QuizSession, config: DriverConfig) -> (QuizHandle, JoinHandle<QuizSession>) {
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let (snapshots_tx, snapshots_rx) = watch::channel(session.snapshot());

    info!(
        questions = session.question_count(),
        tick_ms = config.tick_interval.as_millis(),
        advance_delay_ms = config.advance_delay.as_millis(),
        "quiz session started"
    );

    let task = tokio::spawn(run_session(session, config, commands_rx, snapshots_tx));
    let handle = QuizHandle {
        commands: commands_tx,
        snapshots: snapshots_rx,
    };
    (handle, task)
}

async fn run_session(
    mut session: QuizSession,
    config: DriverConfig,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<SessionSnapshot>,
) -> QuizSession {
    let mut ticker = tokio::time::interval(config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();

    let advance_timer = tokio::time::sleep(config.advance_delay);
    tokio::pin!(advance_timer);
    let mut pending: Option<PendingAdvance> = None;

    loop {
        if session.is_finished() {
            info!(
                reason = ?session.finish_reason(),
                answers = session.answers().len(),
                remaining = session.remaining_time(),
                "quiz session finished"
            );
            break;
        }

        let ticking = session.phase() == SessionPhase::InProgress;

        tokio::select! {
            _ = ticker.tick(), if ticking => {
                let now = Instant::now();
                let delta = now.duration_since(last_tick).as_secs_f64();
                last_tick = now;
                if session.tick(delta) == TickOutcome::Exhausted {
                    debug!("time budget exhausted");
                }
                snapshots.send_replace(session.snapshot());
            }
            () = &mut advance_timer, if pending.is_some() => {
                if let Some(token) = pending.take() {
                    session.advance(token);
                    snapshots.send_replace(session.snapshot());
                }
            }
            command = commands.recv() => match command {
                Some(Command::Submit(key)) => {
                    if let SubmitOutcome::Recorded { is_correct, adjustment, advance } =
                        session.submit_answer(key)
                    {
                        info!(
                            index = session.current_index(),
                            answer = %key,
                            is_correct,
                            adjustment,
                            "answer recorded"
                        );
                        snapshots.send_replace(session.snapshot());
                        if let Some(token) = advance {
                            advance_timer.as_mut().reset(Instant::now() + config.advance_delay);
                            pending = Some(token);
                        }
                    }
                }
                Some(Command::Shutdown) | None => {
                    info!(phase = ?session.phase(), "quiz session torn down");
                    break;
                }
            },
        }
    }

    snapshots.send_replace(session.snapshot());
    session
}
