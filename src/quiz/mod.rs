//! Motor del cuestionario: una máquina de estados explícita
//! `Loading -> InProgress -> Completed` con cuenta atrás cancelable.
//!
//! Toda mutación pasa por `&mut QuizEngine`, así que las acciones del usuario
//! y los ticks del temporizador se aplican de una en una.

use crate::config::QuizConfig;
use crate::data::QuestionProvider;
use crate::error::QuizError;
use crate::model::{Question, QuestionSet};
use std::collections::BTreeMap;
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod resets;
pub mod timer;
pub mod view_models;

pub use completion::{Grade, ScoreResult};
pub use navigation::Step;
pub use timer::{
    CancelToken, QuizTimer, SessionId, ThreadTicker, TickOutcome, TickScheduler, TimerTick,
    format_time,
};
pub use view_models::{OptionMark, QuestionDot, ReviewItem};

/// Posición de la pregunta -> índice de la opción elegida
pub type AnswerRecord = BTreeMap<usize, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    InProgress,
    Completed,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: QuestionSet,
    answers: AnswerRecord,
    cursor: usize,
    timer: QuizTimer,
}

impl QuizSession {
    fn new(questions: QuestionSet, time_limit_seconds: u32) -> Self {
        // Un límite de 0 no expiraría nunca
        Self {
            questions,
            answers: AnswerRecord::new(),
            cursor: 0,
            timer: QuizTimer::new(time_limit_seconds.max(1)),
        }
    }

    fn current(&self) -> &Question {
        &self.questions[self.cursor]
    }

    fn is_last(&self) -> bool {
        self.cursor + 1 == self.questions.len()
    }
}

#[derive(Debug)]
enum QuizState {
    Loading,
    InProgress(QuizSession),
    Completed {
        session: QuizSession,
        score: ScoreResult,
    },
}

pub struct QuizEngine {
    topic_id: String,
    config: QuizConfig,
    scheduler: Arc<dyn TickScheduler>,
    session_id: SessionId,
    cancel: Option<CancelToken>,
    state: QuizState,
}

impl QuizEngine {
    /// Busca las preguntas del tema y arranca el intento.
    /// Sin preguntas el motor se queda en `Loading` para siempre.
    pub fn initialize(
        topic_id: &str,
        provider: &dyn QuestionProvider,
        config: QuizConfig,
        scheduler: Arc<dyn TickScheduler>,
    ) -> Self {
        let questions = provider.lookup(topic_id);
        let mut engine = Self {
            topic_id: topic_id.to_owned(),
            config,
            scheduler,
            session_id: SessionId::default(),
            cancel: None,
            state: QuizState::Loading,
        };

        if questions.is_empty() {
            log::warn!("quiz for topic '{topic_id}' is not available");
            return engine;
        }

        engine.start_session(questions);
        engine
    }

    pub(crate) fn start_session(&mut self, questions: QuestionSet) {
        let total = questions.len();
        self.state = QuizState::InProgress(QuizSession::new(
            questions,
            self.config.time_limit_seconds,
        ));
        self.arm_timer();
        log::info!(
            "quiz '{}' started: {total} questions, {}s, {:?}",
            self.topic_id,
            self.config.time_limit_seconds,
            self.session_id
        );
    }

    // Accesores de solo lectura para la vista
    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn phase(&self) -> QuizPhase {
        match self.state {
            QuizState::Loading => QuizPhase::Loading,
            QuizState::InProgress(_) => QuizPhase::InProgress,
            QuizState::Completed { .. } => QuizPhase::Completed,
        }
    }

    /// `UnknownTopic` mientras el motor esté en `Loading`
    pub fn load_error(&self) -> Option<QuizError> {
        match self.state {
            QuizState::Loading => Some(QuizError::UnknownTopic(self.topic_id.clone())),
            _ => None,
        }
    }

    fn session(&self) -> Option<&QuizSession> {
        match &self.state {
            QuizState::Loading => None,
            QuizState::InProgress(session) => Some(session),
            QuizState::Completed { session, .. } => Some(session),
        }
    }

    fn in_progress_mut(&mut self, action: &'static str) -> Result<&mut QuizSession, QuizError> {
        let phase = self.phase();
        match &mut self.state {
            QuizState::InProgress(session) => Ok(session),
            _ => Err(rejection(&self.topic_id, phase, action)),
        }
    }

    pub(crate) fn reject(&self, action: &'static str) -> QuizError {
        rejection(&self.topic_id, self.phase(), action)
    }

    pub fn questions(&self) -> &[Question] {
        self.session().map(|s| &s.questions[..]).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.questions().len()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.session().map(|s| s.cursor)
    }

    /// Pregunta visible; solo existe mientras el intento está en curso
    pub fn current_question(&self) -> Option<&Question> {
        match &self.state {
            QuizState::InProgress(session) => Some(session.current()),
            _ => None,
        }
    }

    pub fn answers(&self) -> Option<&AnswerRecord> {
        self.session().map(|s| &s.answers)
    }

    pub fn remaining_seconds(&self) -> Option<u32> {
        self.session().map(|s| s.timer.remaining())
    }

    /// Resultado cacheado al completar
    pub fn score(&self) -> Option<&ScoreResult> {
        match &self.state {
            QuizState::Completed { score, .. } => Some(score),
            _ => None,
        }
    }
}

fn rejection(topic_id: &str, phase: QuizPhase, action: &'static str) -> QuizError {
    let err = match phase {
        QuizPhase::Loading => QuizError::UnknownTopic(topic_id.to_owned()),
        _ => QuizError::InvalidTransition { action, phase },
    };
    log::warn!("rejected '{action}' on quiz '{topic_id}': {err}");
    err
}

impl Drop for QuizEngine {
    // Salir de la página también para la cuenta atrás
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Planificador manual: guarda los tokens en lugar de lanzar hilos.
    #[derive(Default)]
    pub struct ManualScheduler {
        pub scheduled: Mutex<Vec<(SessionId, CancelToken)>>,
    }

    impl ManualScheduler {
        pub fn tokens(&self) -> Vec<(SessionId, CancelToken)> {
            self.scheduled.lock().unwrap().clone()
        }
    }

    impl TickScheduler for ManualScheduler {
        fn schedule(&self, session: SessionId) -> CancelToken {
            let token = CancelToken::new();
            self.scheduled.lock().unwrap().push((session, token.clone()));
            token
        }
    }

    pub fn question(id: &str, options: usize, correct: usize) -> Question {
        Question {
            id: id.to_owned(),
            prompt: format!("prompt {id}"),
            options: (0..options).map(|i| format!("opt {i}")).collect(),
            correct_answer: correct,
            explanation: format!("because {correct}"),
        }
    }

    pub fn provider(topic: &str, questions: Vec<Question>) -> HashMap<String, QuestionSet> {
        let mut map = HashMap::new();
        map.insert(topic.to_owned(), QuestionSet::from(questions));
        map
    }

    /// Cinco preguntas de 4 opciones, la correcta siempre es la 1
    pub fn five_question_engine(limit: u32) -> (QuizEngine, Arc<ManualScheduler>) {
        let questions = (1..=5).map(|i| question(&format!("q{i}"), 4, 1)).collect();
        let scheduler = Arc::new(ManualScheduler::default());
        let engine = QuizEngine::initialize(
            "synthetic",
            &provider("synthetic", questions),
            QuizConfig {
                time_limit_seconds: limit,
            },
            scheduler.clone(),
        );
        (engine, scheduler)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn initialize_starts_in_progress_at_first_question() {
        let (engine, scheduler) = five_question_engine(600);
        assert_eq!(engine.phase(), QuizPhase::InProgress);
        assert_eq!(engine.cursor(), Some(0));
        assert_eq!(engine.answers().map(|a| a.len()), Some(0));
        assert_eq!(engine.remaining_seconds(), Some(600));
        assert_eq!(engine.current_question().map(|q| q.id.as_str()), Some("q1"));
        assert_eq!(scheduler.tokens().len(), 1);
        assert!(engine.score().is_none());
    }

    #[test]
    fn unknown_topic_stays_loading_without_timer() {
        let scheduler = Arc::new(ManualScheduler::default());
        let mut engine = QuizEngine::initialize(
            "nope",
            &provider("synthetic", vec![question("a", 2, 0)]),
            QuizConfig::default(),
            scheduler.clone(),
        );
        assert_eq!(engine.phase(), QuizPhase::Loading);
        assert_eq!(engine.load_error(), Some(QuizError::UnknownTopic("nope".into())));
        assert!(engine.current_question().is_none());
        assert!(engine.score().is_none());
        assert!(scheduler.tokens().is_empty());
        assert_eq!(
            engine.select_answer(0),
            Err(QuizError::UnknownTopic("nope".into()))
        );
        assert!(engine.finish().is_err());
        assert_eq!(engine.phase(), QuizPhase::Loading);
    }

    #[test]
    fn dropping_the_engine_cancels_the_timer() {
        let (engine, scheduler) = five_question_engine(600);
        let (_, token) = scheduler.tokens().remove(0);
        assert!(!token.is_cancelled());
        drop(engine);
        assert!(token.is_cancelled());
    }

    #[test]
    fn zero_time_limit_still_expires() {
        let (mut engine, _) = five_question_engine(0);
        assert_eq!(engine.remaining_seconds(), Some(1));
        let session = engine.session_id();
        assert_eq!(engine.on_tick(TimerTick { session }), TickOutcome::Expired);
        assert_eq!(engine.phase(), QuizPhase::Completed);
    }

    #[test]
    fn separate_engines_never_share_a_session() {
        let (first, _) = five_question_engine(600);
        let (second, _) = five_question_engine(600);
        assert_ne!(first.session_id(), second.session_id());
        assert_ne!(first.session_id(), SessionId::default());
    }

    #[test]
    fn catalog_math_quiz_scores_four_of_five() {
        let catalog = crate::data::read_catalog_embedded().expect("catalog ok");
        let mut engine = QuizEngine::initialize(
            "math-basic",
            &catalog,
            QuizConfig::default(),
            Arc::new(ManualScheduler::default()),
        );
        // Todas las correctas son la opción 1; la pregunta 3 se falla
        for position in 0..5 {
            let pick = if position == 3 { 0 } else { 1 };
            engine.select_answer(pick).unwrap();
            engine.advance().unwrap();
        }
        assert_eq!(engine.phase(), QuizPhase::Completed);
        let score = engine.score().copied().unwrap();
        assert_eq!((score.correct, score.total, score.percentage), (4, 5, 80));
    }
}
