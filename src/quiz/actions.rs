use super::*;

impl QuizEngine {
    /// Registra (o sobrescribe) la opción elegida para la pregunta actual.
    /// No comprueba si es correcta ni toca cursor ni temporizador.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizError> {
        let session = self.in_progress_mut("select_answer")?;
        let options = session.current().options.len();
        if option >= options {
            let err = QuizError::InvalidSelection {
                index: option,
                options,
            };
            log::warn!("{err}");
            return Err(err);
        }

        let cursor = session.cursor;
        session.answers.insert(cursor, option);
        log::debug!("answer {option} recorded for question {cursor}");
        Ok(())
    }

    /// Opción registrada para la pregunta visible
    pub fn selected_answer(&self) -> Option<usize> {
        match &self.state {
            QuizState::InProgress(session) => session.answers.get(&session.cursor).copied(),
            _ => None,
        }
    }
}
