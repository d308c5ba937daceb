use super::*;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Identifica cada intento; los ticks de intentos anteriores se descartan.
/// `SessionId::default()` nunca se asigna a un intento real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct SessionId(u64);

// Compartido por todos los motores: el canal de ticks también lo es
static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

impl SessionId {
    /// Id único en todo el proceso
    pub fn fresh() -> Self {
        SessionId(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub session: SessionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick obsoleto o cuenta ya parada
    Ignored,
    Running(u32),
    Expired,
}

/// Cuenta atrás en segundos enteros. Nunca baja de cero y solo
/// informa `Expired` en el paso 1 -> 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizTimer {
    limit: u32,
    remaining: u32,
}

impl QuizTimer {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.remaining == 0 {
            return TickOutcome::Ignored;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }
}

/// `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Programa un tick periódico para un intento. La tarea debe dejar de
/// emitir en cuanto se cancele el token devuelto.
pub trait TickScheduler {
    fn schedule(&self, session: SessionId) -> CancelToken;
}

/// Un hilo por intento que duerme `period` y envía `TimerTick` por el canal
pub struct ThreadTicker {
    sender: Sender<TimerTick>,
    period: Duration,
}

impl ThreadTicker {
    pub fn new(sender: Sender<TimerTick>) -> Self {
        Self::with_period(sender, Duration::from_secs(1))
    }

    pub fn with_period(sender: Sender<TimerTick>, period: Duration) -> Self {
        Self { sender, period }
    }

    pub fn channel() -> (Self, Receiver<TimerTick>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }
}

impl TickScheduler for ThreadTicker {
    fn schedule(&self, session: SessionId) -> CancelToken {
        let token = CancelToken::new();
        let flag = token.clone();
        let sender = self.sender.clone();
        let period = self.period;

        thread::spawn(move || {
            loop {
                thread::sleep(period);
                if flag.is_cancelled() {
                    break;
                }
                if sender.send(TimerTick { session }).is_err() {
                    break;
                }
            }
            log::debug!("ticker for {session:?} stopped");
        });

        token
    }
}

impl QuizEngine {
    pub(crate) fn arm_timer(&mut self) {
        self.cancel_timer();
        self.session_id = SessionId::fresh();
        self.cancel = Some(self.scheduler.schedule(self.session_id));
    }

    pub(crate) fn cancel_timer(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
            log::debug!("timer for {:?} cancelled", self.session_id);
        }
    }

    /// Aplica un tick. Al llegar a cero termina el intento en el acto.
    pub fn on_tick(&mut self, tick: TimerTick) -> TickOutcome {
        if tick.session != self.session_id {
            log::debug!("stale tick from {:?} ignored", tick.session);
            return TickOutcome::Ignored;
        }
        let QuizState::InProgress(session) = &mut self.state else {
            return TickOutcome::Ignored;
        };

        let outcome = session.timer.tick();
        if outcome == TickOutcome::Expired {
            log::info!("time is up for quiz '{}'", self.topic_id);
            self.complete();
        }
        outcome
    }
}
