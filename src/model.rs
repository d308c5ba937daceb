use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Pregunta de opción múltiple. Inmutable una vez cargada.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, selected: usize) -> bool {
        self.correct_answer == selected
    }
}

/// Conjunto ordenado y compartido de preguntas de un tema
pub type QuestionSet = Arc<[Question]>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Video,
    Pdf,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub duration: String,
    pub url: String,
    pub description: String,
}

/// Tarjeta de tema tal y como aparece en las recomendaciones
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub difficulty: String,
    pub duration: String,
}

/// Ficha completa de un tema: cabecera + materiales
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicDetail {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub difficulty: String,
    pub duration: String,
    pub rating: f32,
    pub students: u32,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Landing,
    Recommendations,
    Topic,
    Quiz,
    NotFound,
}
