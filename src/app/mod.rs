use crate::config::QuizConfig;
use crate::data::Catalog;
use crate::model::AppState;
use crate::quiz::{QuizEngine, ThreadTicker, TickScheduler, TimerTick};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod updates;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{SectionRow, TopicProgress};

/// Porcentaje de materiales completados que desbloquea el cuestionario
pub const QUIZ_UNLOCK_PERCENT: u32 = 75;

/// Capa de páginas: navegación entre vistas, progreso por tema y
/// el motor del cuestionario activo (si lo hay).
pub struct EduApp {
    pub catalog: Catalog,
    pub config: QuizConfig,
    pub state: AppState,
    pub current_topic: Option<String>,
    pub search_query: String,
    pub message: String,
    /// tema -> ids de secciones completadas (solo en memoria)
    pub completed_sections: HashMap<String, HashSet<String>>,
    pub quiz: Option<QuizEngine>,
    scheduler: Arc<dyn TickScheduler>,
    ticks: Receiver<TimerTick>,
}

impl EduApp {
    pub fn new(catalog: Catalog, config: QuizConfig) -> Self {
        let (ticker, ticks) = ThreadTicker::channel();
        Self::with_scheduler(catalog, config, Arc::new(ticker), ticks)
    }

    /// Permite inyectar otro planificador de ticks (tests)
    pub fn with_scheduler(
        catalog: Catalog,
        config: QuizConfig,
        scheduler: Arc<dyn TickScheduler>,
        ticks: Receiver<TimerTick>,
    ) -> Self {
        Self {
            catalog,
            config,
            state: AppState::Landing,
            current_topic: None,
            search_query: String::new(),
            message: String::new(),
            completed_sections: HashMap::new(),
            quiz: None,
            scheduler,
            ticks,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::data::read_catalog_embedded;
    use crate::quiz::{CancelToken, SessionId};
    use std::sync::mpsc::{self, Sender};

    pub struct NoThreads;

    impl TickScheduler for NoThreads {
        fn schedule(&self, _session: SessionId) -> CancelToken {
            CancelToken::new()
        }
    }

    /// App con el catálogo real y un canal de ticks controlado por el test
    pub fn test_app() -> (EduApp, Sender<TimerTick>) {
        let catalog = read_catalog_embedded().expect("catalog ok");
        let (tx, rx) = mpsc::channel();
        let app = EduApp::with_scheduler(catalog, QuizConfig::default(), Arc::new(NoThreads), rx);
        (app, tx)
    }
}
