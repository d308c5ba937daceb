use super::*;
use crate::error::QuizError;
use crate::quiz::{QuizPhase, Step, TickOutcome};

const FINISHED_MESSAGE: &str = "Kuis Selesai! Lihat hasil dan pembahasanmu di bawah.";

impl EduApp {
    /// Aplica los ticks pendientes al motor activo. Se llama una vez por frame.
    pub fn pump_timer(&mut self) {
        while let Ok(tick) = self.ticks.try_recv() {
            let Some(engine) = self.quiz.as_mut() else {
                // No hay cuestionario: el tick es de una sesión ya cerrada
                continue;
            };
            if engine.on_tick(tick) == TickOutcome::Expired {
                self.message = format!("⏰ Waktu habis! {FINISHED_MESSAGE}");
            }
        }
    }

    pub fn select_option(&mut self, option: usize) {
        self.with_quiz(|quiz| quiz.select_answer(option));
    }

    pub fn next_question(&mut self) {
        if let Some(Step::Finished) = self.with_quiz(|quiz| quiz.advance()) {
            self.message = FINISHED_MESSAGE.to_owned();
        }
    }

    pub fn prev_question(&mut self) {
        self.with_quiz(|quiz| quiz.retreat());
    }

    pub fn finish_quiz(&mut self) {
        if let Some(true) = self.with_quiz(|quiz| quiz.finish()) {
            self.message = FINISHED_MESSAGE.to_owned();
        }
    }

    pub fn retry_quiz(&mut self) {
        if self.with_quiz(|quiz| quiz.retry()).is_some() {
            self.message.clear();
        }
    }

    pub fn quiz_phase(&self) -> Option<QuizPhase> {
        self.quiz.as_ref().map(|q| q.phase())
    }

    // Los errores del motor son de contrato: se registran y la vista sigue igual
    fn with_quiz<T>(
        &mut self,
        action: impl FnOnce(&mut QuizEngine) -> Result<T, QuizError>,
    ) -> Option<T> {
        let engine = self.quiz.as_mut()?;
        match action(engine) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("quiz action rejected: {e}");
                None
            }
        }
    }
}
