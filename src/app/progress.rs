use super::*;

impl EduApp {
    /// Marca una sección del tema actual; repetirlo no cambia nada.
    /// Devuelve `true` si es nueva.
    pub fn complete_section(&mut self, section_id: &str) -> bool {
        let Some(topic_id) = self.current_topic.clone() else {
            return false;
        };
        let exists = self
            .catalog
            .detail(&topic_id)
            .is_some_and(|d| d.sections.iter().any(|s| s.id == section_id));
        if !exists {
            log::warn!("section '{section_id}' does not belong to '{topic_id}'");
            return false;
        }

        let inserted = self
            .completed_sections
            .entry(topic_id.clone())
            .or_default()
            .insert(section_id.to_owned());
        if inserted {
            log::debug!(
                "section '{section_id}' completed, '{topic_id}' at {}%",
                self.topic_progress(&topic_id).percent
            );
        }
        inserted
    }

    pub fn is_section_completed(&self, topic_id: &str, section_id: &str) -> bool {
        self.completed_sections
            .get(topic_id)
            .is_some_and(|done| done.contains(section_id))
    }

    pub fn topic_progress(&self, topic_id: &str) -> TopicProgress {
        let total = self
            .catalog
            .detail(topic_id)
            .map(|d| d.sections.len())
            .unwrap_or(0);
        let done = self
            .completed_sections
            .get(topic_id)
            .map(|s| s.len())
            .unwrap_or(0);
        TopicProgress::new(done, total, QUIZ_UNLOCK_PERCENT)
    }

    pub fn is_quiz_unlocked(&self, topic_id: &str) -> bool {
        self.topic_progress(topic_id).unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    #[test]
    fn progress_is_ratio_of_completed_sections() {
        let (mut app, _) = test_app();
        app.open_topic("math-basic");
        assert_eq!(app.topic_progress("math-basic").percent, 0);

        assert!(app.complete_section("intro"));
        assert!(!app.complete_section("intro"));
        assert_eq!(app.topic_progress("math-basic").percent, 25);
        assert!(app.is_section_completed("math-basic", "intro"));
        assert!(!app.is_quiz_unlocked("math-basic"));

        app.complete_section("algebra");
        app.complete_section("geometry");
        let progress = app.topic_progress("math-basic");
        assert_eq!((progress.done, progress.total, progress.percent), (3, 4, 75));
        assert!(progress.unlocked);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let (mut app, _) = test_app();
        app.open_topic("math-basic");
        assert!(!app.complete_section("calculus"));
        assert_eq!(app.topic_progress("math-basic").done, 0);
    }
}
