// src/view_models.rs

use crate::model::SectionKind;

#[derive(Clone, Debug)]
pub struct SectionRow {
    pub number: usize, // número "humano" (1,2,3…)
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: SectionKind,
    pub duration: String,
    pub url: String,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicProgress {
    pub done: usize,
    pub total: usize,
    pub percent: u32,
    pub unlocked: bool,
}

impl SectionRow {
    pub fn label(&self) -> String {
        if self.completed {
            format!("✅ {}", self.title)
        } else {
            format!("{}. {}", self.number, self.title)
        }
    }

    pub fn kind_label(&self) -> String {
        match self.kind {
            SectionKind::Video => format!("▶ {}", self.duration),
            SectionKind::Pdf => format!("📄 {}", self.duration),
        }
    }
}

impl TopicProgress {
    pub fn new(done: usize, total: usize, unlock_percent: u32) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((done * 200 + total) / (2 * total)) as u32
        };
        Self {
            done,
            total,
            percent,
            // sobre el cociente exacto, no sobre el porcentaje redondeado
            unlocked: total > 0 && done * 100 >= unlock_percent as usize * total,
        }
    }

    pub fn fraction(&self) -> f32 {
        self.percent as f32 / 100.0
    }

    pub fn label(&self) -> String {
        format!("{} dari {} materi selesai", self.done, self.total)
    }
}
