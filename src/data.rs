// src/data.rs

use crate::error::CatalogError;
use crate::model::{Question, QuestionSet, Topic, TopicDetail};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Único punto de acceso del motor a las preguntas de un tema.
/// Un tema desconocido devuelve un conjunto vacío.
pub trait QuestionProvider {
    fn lookup(&self, topic_id: &str) -> QuestionSet;
}

impl QuestionProvider for HashMap<String, QuestionSet> {
    fn lookup(&self, topic_id: &str) -> QuestionSet {
        self.get(topic_id)
            .cloned()
            .unwrap_or_else(|| QuestionSet::from(Vec::new()))
    }
}

#[derive(Deserialize)]
struct RawCatalog {
    topics: Vec<Topic>,
    #[serde(default)]
    details: HashMap<String, TopicDetail>,
    #[serde(default)]
    quizzes: HashMap<String, Vec<Question>>,
}

/// Catálogo de solo lectura: temas, fichas y cuestionarios
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<Topic>,
    details: HashMap<String, TopicDetail>,
    quizzes: HashMap<String, QuestionSet>,
}

impl Catalog {
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_yaml::from_str(content)?;

        for (topic, questions) in &raw.quizzes {
            validate_questions(topic, questions)?;
        }

        let quizzes = raw
            .quizzes
            .into_iter()
            .map(|(topic, questions)| (topic, QuestionSet::from(questions)))
            .collect();

        Ok(Self {
            topics: raw.topics,
            details: raw.details,
            quizzes,
        })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn detail(&self, topic_id: &str) -> Option<&TopicDetail> {
        self.details.get(topic_id)
    }
}

impl QuestionProvider for Catalog {
    fn lookup(&self, topic_id: &str) -> QuestionSet {
        self.quizzes.lookup(topic_id)
    }
}

fn validate_questions(topic: &str, questions: &[Question]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for q in questions {
        if q.options.len() < 2 {
            return Err(CatalogError::TooFewOptions {
                topic: topic.to_owned(),
                question: q.id.clone(),
            });
        }
        if q.correct_answer >= q.options.len() {
            return Err(CatalogError::CorrectAnswerOutOfRange {
                topic: topic.to_owned(),
                question: q.id.clone(),
                index: q.correct_answer,
            });
        }
        if !seen.insert(q.id.as_str()) {
            return Err(CatalogError::DuplicateQuestion {
                topic: topic.to_owned(),
                question: q.id.clone(),
            });
        }
    }
    Ok(())
}

/// Carga el catálogo desde el YAML embebido
pub fn read_catalog_embedded() -> Result<Catalog, CatalogError> {
    let file_content = include_str!("data/catalog.yaml");
    Catalog::from_yaml_str(file_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_has_math_quiz() {
        let catalog = read_catalog_embedded().expect("catalog ok");
        assert_eq!(catalog.topics().len(), 6);
        let questions = catalog.lookup("math-basic");
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.options.len() == 4));
        assert_eq!(questions[2].options[1], "36 cm²");
        assert_eq!(catalog.detail("math-basic").map(|d| d.sections.len()), Some(4));
    }

    #[test]
    fn unknown_topic_yields_empty_set() {
        let catalog = read_catalog_embedded().expect("catalog ok");
        assert!(catalog.lookup("web-development").is_empty());
        assert!(catalog.lookup("does-not-exist").is_empty());
        assert!(catalog.detail("web-development").is_none());
    }

    #[test]
    fn rejects_correct_answer_out_of_range() {
        let yaml = r#"
topics: []
quizzes:
  t:
    - id: a
      question: "?"
      options: ["x", "y"]
      correctAnswer: 2
      explanation: ""
"#;
        let err = Catalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::CorrectAnswerOutOfRange { index: 2, .. }
        ));
    }

    #[test]
    fn rejects_single_option_and_duplicate_ids() {
        let single = r#"
topics: []
quizzes:
  t:
    - { id: a, question: "?", options: ["x"], correctAnswer: 0, explanation: "" }
"#;
        assert!(matches!(
            Catalog::from_yaml_str(single),
            Err(CatalogError::TooFewOptions { .. })
        ));

        let dup = r#"
topics: []
quizzes:
  t:
    - { id: a, question: "?", options: ["x", "y"], correctAnswer: 0, explanation: "" }
    - { id: a, question: "!", options: ["x", "y"], correctAnswer: 1, explanation: "" }
"#;
        assert!(matches!(
            Catalog::from_yaml_str(dup),
            Err(CatalogError::DuplicateQuestion { .. })
        ));
    }
}
