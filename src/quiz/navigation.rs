use super::*;

/// Resultado de `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(usize),
    Finished,
}

impl QuizEngine {
    /// La vista deshabilita "siguiente" con esto; `advance` lo vuelve a comprobar.
    pub fn can_advance(&self) -> bool {
        self.selected_answer().is_some()
    }

    pub fn is_last_question(&self) -> bool {
        match &self.state {
            QuizState::InProgress(session) => session.is_last(),
            _ => false,
        }
    }

    /// Pasa a la siguiente pregunta; en la última, termina el intento.
    pub fn advance(&mut self) -> Result<Step, QuizError> {
        if !self.can_advance() {
            return Err(self.reject("advance"));
        }
        let session = self.in_progress_mut("advance")?;
        if session.is_last() {
            self.complete();
            return Ok(Step::Finished);
        }
        session.cursor += 1;
        let cursor = session.cursor;
        log::debug!("advanced to question {cursor}");
        Ok(Step::Moved(cursor))
    }

    /// Vuelve a la pregunta anterior sin borrar respuestas.
    /// En la primera pregunta no hace nada.
    pub fn retreat(&mut self) -> Result<usize, QuizError> {
        let session = self.in_progress_mut("retreat")?;
        if session.cursor > 0 {
            session.cursor -= 1;
            log::debug!("back to question {}", session.cursor);
        }
        Ok(session.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    #[test]
    fn n_answered_advances_complete_the_quiz() {
        for n in 1..=6 {
            let questions = (0..n).map(|i| question(&format!("q{i}"), 3, 2)).collect();
            let mut engine = QuizEngine::initialize(
                "t",
                &provider("t", questions),
                QuizConfig::default(),
                Arc::new(ManualScheduler::default()),
            );
            assert_eq!(engine.cursor(), Some(0));
            for i in 0..n {
                assert_eq!(engine.phase(), QuizPhase::InProgress);
                engine.select_answer(i % 3).unwrap();
                let step = engine.advance().unwrap();
                if i + 1 == n {
                    assert_eq!(step, Step::Finished);
                } else {
                    assert_eq!(step, Step::Moved(i + 1));
                }
            }
            assert_eq!(engine.phase(), QuizPhase::Completed);
        }
    }

    #[test]
    fn advance_requires_an_answer() {
        let (mut engine, _) = five_question_engine(600);
        assert!(!engine.can_advance());
        assert_eq!(
            engine.advance(),
            Err(QuizError::InvalidTransition {
                action: "advance",
                phase: QuizPhase::InProgress
            })
        );
        assert_eq!(engine.cursor(), Some(0));
    }

    #[test]
    fn retreat_at_start_is_a_no_op() {
        let (mut engine, _) = five_question_engine(600);
        engine.select_answer(1).unwrap();
        assert_eq!(engine.retreat(), Ok(0));
        assert_eq!(engine.cursor(), Some(0));
        assert_eq!(engine.selected_answer(), Some(1));
        assert_eq!(engine.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn retreat_keeps_previous_answer() {
        let (mut engine, _) = five_question_engine(600);
        engine.select_answer(3).unwrap();
        engine.advance().unwrap();
        assert_eq!(engine.retreat(), Ok(0));
        assert_eq!(engine.selected_answer(), Some(3));
        assert!(engine.can_advance());
    }

    #[test]
    fn advancing_on_last_question_finishes_directly() {
        let (mut engine, _) = five_question_engine(600);
        for _ in 0..4 {
            engine.select_answer(1).unwrap();
            engine.advance().unwrap();
        }
        assert!(engine.is_last_question());
        engine.select_answer(1).unwrap();
        assert_eq!(engine.advance(), Ok(Step::Finished));
        assert_eq!(engine.phase(), QuizPhase::Completed);
        assert_eq!(engine.score().map(|s| s.percentage), Some(100));
    }
}
