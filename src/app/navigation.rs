use super::*;

impl EduApp {
    pub fn open_landing(&mut self) {
        self.leave_quiz();
        self.current_topic = None;
        self.state = AppState::Landing;
        self.message.clear();
    }

    pub fn show_recommendations(&mut self) {
        self.state = AppState::Recommendations;
    }

    pub fn back_to_search(&mut self) {
        self.state = AppState::Landing;
        self.message.clear();
    }

    /// Abre la ficha de un tema; si no tiene ficha, muestra el 404
    pub fn open_topic(&mut self, topic_id: &str) {
        self.leave_quiz();
        self.current_topic = Some(topic_id.to_owned());
        self.message.clear();

        if self.catalog.detail(topic_id).is_some() {
            log::debug!("opening topic '{topic_id}'");
            self.state = AppState::Topic;
        } else {
            log::warn!("topic '{topic_id}' not found");
            self.state = AppState::NotFound;
        }
    }

    /// Botón "Mulai Kuis" de la ficha: exige haber desbloqueado el cuestionario
    pub fn start_quiz(&mut self) {
        let Some(topic_id) = self.current_topic.clone() else {
            return;
        };
        if !self.is_quiz_unlocked(&topic_id) {
            self.message = format!(
                "Selesaikan minimal {QUIZ_UNLOCK_PERCENT}% materi untuk membuka kuis"
            );
            return;
        }
        self.open_quiz(&topic_id);
    }

    /// Entrada directa al cuestionario de un tema (sin comprobar progreso)
    pub fn open_quiz(&mut self, topic_id: &str) {
        self.leave_quiz();
        self.current_topic = Some(topic_id.to_owned());
        self.quiz = Some(QuizEngine::initialize(
            topic_id,
            &self.catalog,
            self.config,
            self.scheduler.clone(),
        ));
        self.state = AppState::Quiz;
        self.message.clear();
    }

    /// Soltar el motor cancela su temporizador
    pub fn leave_quiz(&mut self) {
        if let Some(engine) = self.quiz.take() {
            log::debug!("leaving quiz '{}'", engine.topic_id());
        }
    }

    pub fn back_to_topic(&mut self) {
        match self.current_topic.clone() {
            Some(topic_id) => self.open_topic(&topic_id),
            None => self.open_landing(),
        }
    }

    pub fn open_not_found(&mut self) {
        log::warn!("page not found for topic {:?}", self.current_topic);
        self.leave_quiz();
        self.state = AppState::NotFound;
    }
}
