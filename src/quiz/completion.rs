use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
}

impl ScoreResult {
    /// Una posición sin respuesta cuenta siempre como fallo.
    pub fn compute(questions: &[Question], answers: &AnswerRecord) -> Self {
        let correct = questions
            .iter()
            .enumerate()
            .filter(|(i, q)| answers.get(i).is_some_and(|&selected| q.is_correct(selected)))
            .count();
        let total = questions.len();
        Self {
            correct,
            total,
            percentage: round_percentage(correct, total),
        }
    }

    pub fn grade(&self) -> Grade {
        if self.percentage >= 80 {
            Grade::Excellent
        } else if self.percentage >= 60 {
            Grade::Good
        } else {
            Grade::KeepGoing
        }
    }
}

/// `round(correct * 100 / total)` redondeando medios hacia arriba
fn round_percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct * 200 + total) / (2 * total)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    KeepGoing,
}

impl Grade {
    pub fn emoji(&self) -> &'static str {
        match self {
            Grade::Excellent => "🏆",
            Grade::Good => "👏",
            Grade::KeepGoing => "💪",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Grade::Excellent => "Luar Biasa!",
            Grade::Good => "Bagus!",
            Grade::KeepGoing => "Tetap Semangat!",
        }
    }
}

impl QuizEngine {
    /// Cierra el intento aunque queden preguntas sin responder.
    /// Devuelve `Ok(false)` si ya estaba completado.
    pub fn finish(&mut self) -> Result<bool, QuizError> {
        match self.state {
            QuizState::Loading => Err(self.reject("finish")),
            QuizState::Completed { .. } => {
                log::debug!("quiz '{}' already completed", self.topic_id);
                Ok(false)
            }
            QuizState::InProgress(_) => Ok(self.complete()),
        }
    }

    /// Única transición a `Completed`: para el temporizador y cachea la nota.
    pub(crate) fn complete(&mut self) -> bool {
        match std::mem::replace(&mut self.state, QuizState::Loading) {
            QuizState::InProgress(session) => {
                self.cancel_timer();
                let score = ScoreResult::compute(&session.questions, &session.answers);
                log::info!(
                    "quiz '{}' finished: {}/{} ({}%), {}s left",
                    self.topic_id,
                    score.correct,
                    score.total,
                    score.percentage,
                    session.timer.remaining()
                );
                self.state = QuizState::Completed { session, score };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }
}
