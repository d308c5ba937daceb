use super::*;

impl EduApp {
    /// Filas de materiales de un tema con su estado
    pub fn section_rows(&self, topic_id: &str) -> Vec<SectionRow> {
        let Some(detail) = self.catalog.detail(topic_id) else {
            return vec![];
        };
        detail
            .sections
            .iter()
            .enumerate()
            .map(|(idx, s)| SectionRow {
                number: idx + 1,
                id: s.id.clone(),
                title: s.title.clone(),
                description: s.description.clone(),
                kind: s.kind,
                duration: s.duration.clone(),
                url: s.url.clone(),
                completed: self.is_section_completed(topic_id, &s.id),
            })
            .collect()
    }
}
