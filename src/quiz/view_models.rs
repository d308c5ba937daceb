use super::*;

/// Marca de cada opción en la revisión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    WrongPick,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionDot {
    Current,
    Answered,
    Pending,
}

#[derive(Debug, Clone)]
pub struct ReviewItem<'a> {
    pub position: usize,
    pub question: &'a Question,
    pub selected: Option<usize>,
    pub is_correct: bool,
}

impl ReviewItem<'_> {
    pub fn mark(&self, option: usize) -> OptionMark {
        if option == self.question.correct_answer {
            OptionMark::Correct
        } else if self.selected == Some(option) {
            OptionMark::WrongPick
        } else {
            OptionMark::Plain
        }
    }
}

impl QuizEngine {
    /// Revisión pregunta a pregunta; solo tras completar
    pub fn review(&self) -> Option<Vec<ReviewItem<'_>>> {
        let QuizState::Completed { session, .. } = &self.state else {
            return None;
        };
        Some(
            session
                .questions
                .iter()
                .enumerate()
                .map(|(position, question)| {
                    let selected = session.answers.get(&position).copied();
                    ReviewItem {
                        position,
                        question,
                        selected,
                        is_correct: selected.is_some_and(|s| question.is_correct(s)),
                    }
                })
                .collect(),
        )
    }

    pub fn question_dots(&self) -> Vec<QuestionDot> {
        let Some(session) = self.session() else {
            return vec![];
        };
        (0..session.questions.len())
            .map(|i| {
                if i == session.cursor {
                    QuestionDot::Current
                } else if session.answers.contains_key(&i) {
                    QuestionDot::Answered
                } else {
                    QuestionDot::Pending
                }
            })
            .collect()
    }

    /// (cursor + 1) / total, para la barra de progreso
    pub fn progress_fraction(&self) -> f32 {
        match self.session() {
            Some(s) if !s.questions.is_empty() => (s.cursor + 1) as f32 / s.questions.len() as f32,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    #[test]
    fn review_marks_correct_and_wrong_picks() {
        let (mut engine, _) = five_question_engine(600);
        assert!(engine.review().is_none());

        engine.select_answer(1).unwrap();
        engine.advance().unwrap();
        engine.select_answer(3).unwrap();
        engine.finish().unwrap();

        let review = engine.review().unwrap();
        assert_eq!(review.len(), 5);
        assert!(review[0].is_correct);
        assert!(!review[1].is_correct);
        assert_eq!(review[1].selected, Some(3));
        assert_eq!(review[1].mark(1), OptionMark::Correct);
        assert_eq!(review[1].mark(3), OptionMark::WrongPick);
        assert_eq!(review[1].mark(0), OptionMark::Plain);
        assert_eq!(review[4].selected, None);
        assert!(!review[4].is_correct);
    }

    #[test]
    fn dots_and_progress_follow_the_cursor() {
        let (mut engine, _) = five_question_engine(600);
        engine.select_answer(0).unwrap();
        engine.advance().unwrap();
        assert_eq!(
            engine.question_dots(),
            vec![
                QuestionDot::Answered,
                QuestionDot::Current,
                QuestionDot::Pending,
                QuestionDot::Pending,
                QuestionDot::Pending,
            ]
        );
        assert!((engine.progress_fraction() - 0.4).abs() < f32::EPSILON);
    }
}
