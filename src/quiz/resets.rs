use super::*;

impl QuizEngine {
    /// Solo desde `Completed`: mismo conjunto de preguntas, respuestas
    /// vacías, cursor a 0 y cuenta atrás nueva.
    pub fn retry(&mut self) -> Result<(), QuizError> {
        let questions = match &self.state {
            QuizState::Completed { session, .. } => session.questions.clone(),
            _ => return Err(self.reject("retry")),
        };
        log::info!("retrying quiz '{}'", self.topic_id);
        self.start_session(questions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    #[test]
    fn retry_matches_a_fresh_initialize() {
        let (mut engine, _) = five_question_engine(600);
        let (fresh, _) = five_question_engine(600);

        engine.select_answer(1).unwrap();
        engine.advance().unwrap();
        engine.select_answer(0).unwrap();
        engine.finish().unwrap();
        engine.retry().unwrap();

        assert_eq!(engine.phase(), fresh.phase());
        assert_eq!(engine.cursor(), fresh.cursor());
        assert_eq!(engine.answers(), fresh.answers());
        assert_eq!(engine.remaining_seconds(), fresh.remaining_seconds());
        assert_eq!(engine.questions(), fresh.questions());
        assert!(engine.score().is_none());
    }

    #[test]
    fn retry_only_from_completed() {
        let (mut engine, scheduler) = five_question_engine(600);
        assert_eq!(
            engine.retry(),
            Err(QuizError::InvalidTransition {
                action: "retry",
                phase: QuizPhase::InProgress
            })
        );
        assert_eq!(scheduler.tokens().len(), 1);
    }
}
