use super::*;
use crate::model::Topic;

/// Palabras que rotan en el buscador
pub const PLACEHOLDER_WORDS: [&str; 8] = [
    "matematika...",
    "bahasa inggris...",
    "programming...",
    "desain grafis...",
    "sejarah indonesia...",
    "ekonomi...",
    "fisika...",
    "biologi...",
];

/// Segundos que dura cada palabra
pub const PLACEHOLDER_PERIOD_SECS: f64 = 2.0;

pub fn placeholder_word(elapsed_secs: f64) -> &'static str {
    let idx = (elapsed_secs.max(0.0) / PLACEHOLDER_PERIOD_SECS) as usize % PLACEHOLDER_WORDS.len();
    PLACEHOLDER_WORDS[idx]
}

impl EduApp {
    pub fn submit_search(&mut self) {
        let query = self.search_query.trim().to_owned();
        if query.is_empty() {
            self.message.clear();
        } else {
            log::info!("searching topics for '{query}'");
            let found = self.filtered_topics().len();
            self.message = if found == 0 {
                format!("Tidak ada topik untuk \"{query}\", coba kata lain")
            } else {
                format!("Menampilkan rekomendasi untuk \"{query}\"")
            };
        }
        self.show_recommendations();
    }

    /// Temas que contienen la búsqueda en título, descripción o id.
    /// Sin búsqueda devuelve todos.
    pub fn filtered_topics(&self) -> Vec<&Topic> {
        let query = self.search_query.trim().to_lowercase();
        self.catalog
            .topics()
            .iter()
            .filter(|t| {
                query.is_empty()
                    || t.title.to_lowercase().contains(&query)
                    || t.description.to_lowercase().contains(&query)
                    || t.id.contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    #[test]
    fn placeholder_rotates_every_two_seconds() {
        assert_eq!(placeholder_word(0.0), "matematika...");
        assert_eq!(placeholder_word(2.5), "bahasa inggris...");
        assert_eq!(placeholder_word(16.0), "matematika...");
    }

    #[test]
    fn search_filters_case_insensitively() {
        let (mut app, _) = test_app();
        app.search_query = "  DESAIN ".into();
        app.submit_search();
        assert_eq!(app.state, AppState::Recommendations);
        let ids: Vec<_> = app.filtered_topics().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["graphic-design"]);
        assert!(app.message.contains("DESAIN"));
    }

    #[test]
    fn empty_search_shows_everything() {
        let (mut app, _) = test_app();
        app.submit_search();
        assert_eq!(app.filtered_topics().len(), 6);
        assert!(app.message.is_empty());

        app.search_query = "kuantum".into();
        app.submit_search();
        assert!(app.filtered_topics().is_empty());
        assert!(app.message.starts_with("Tidak ada topik"));
    }
}
