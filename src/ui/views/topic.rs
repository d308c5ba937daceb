use crate::app::{EduApp, QUIZ_UNLOCK_PERCENT};
use crate::model::SectionKind;
use crate::ui::helpers::{GREEN, notice};
use crate::ui::layout::scroll_panel;
use egui::{Button, Context, ProgressBar, RichText};

pub fn ui_topic(app: &mut EduApp, ctx: &Context) {
    let Some(topic_id) = app.current_topic.clone() else {
        app.open_not_found();
        return;
    };
    let Some(detail) = app.catalog.detail(&topic_id).cloned() else {
        app.open_not_found();
        return;
    };
    let rows = app.section_rows(&topic_id);
    let progress = app.topic_progress(&topic_id);

    let mut completed: Option<String> = None;
    let mut start = false;

    scroll_panel(ctx, 760.0, |ui| {
        let width = ui.available_width();

        // ----------- CABECERA -----------
        ui.horizontal(|ui| {
            ui.label(RichText::new(&detail.icon).size(48.0));
            ui.vertical(|ui| {
                ui.heading(RichText::new(&detail.title).size(28.0).strong());
                ui.label(&detail.description);
            });
        });
        ui.horizontal(|ui| {
            ui.label(format!("⭐ {}", detail.rating));
            ui.label(format!("👥 {} siswa", detail.students));
            ui.label(format!("⏱ {}", detail.duration));
            ui.label(RichText::new(&detail.difficulty).strong());
        });
        ui.add_space(12.0);

        // ----------- PROGRESO -----------
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(width - 16.0);
            ui.label(RichText::new("Progress Belajar").strong());
            ui.add(ProgressBar::new(progress.fraction()).text(format!("{}%", progress.percent)));
            ui.label(RichText::new(progress.label()).small());
            ui.add_space(6.0);
            if progress.unlocked {
                ui.label("🎯 Hebat! Kamu sudah hampir selesai. Saatnya uji pemahaman dengan kuis!");
                start = ui
                    .add_sized([width - 32.0, 36.0], Button::new("Mulai Kuis"))
                    .clicked();
            } else {
                ui.label(format!(
                    "Selesaikan minimal {QUIZ_UNLOCK_PERCENT}% materi untuk membuka kuis"
                ));
            }
        });
        notice(ui, &app.message);
        ui.add_space(12.0);

        // ----------- MATERIALES -----------
        ui.heading("Materi Pembelajaran");
        ui.add_space(6.0);
        for row in &rows {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width - 16.0);
                ui.horizontal(|ui| {
                    let title = RichText::new(row.label()).strong();
                    ui.label(if row.completed { title.color(GREEN) } else { title });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(row.kind_label());
                    });
                });
                ui.label(&row.description);
                match row.kind {
                    SectionKind::Video => ui.hyperlink_to("▶ Tonton video", &row.url),
                    SectionKind::Pdf => ui.hyperlink_to("📄 Buka PDF", &row.url),
                };
                ui.add_space(4.0);
                let label = if row.completed { "✅ Selesai" } else { "Tandai Selesai" };
                if ui
                    .add_enabled(!row.completed, Button::new(label).min_size([width - 32.0, 30.0].into()))
                    .clicked()
                {
                    completed = Some(row.id.clone());
                }
            });
            ui.add_space(8.0);
        }
    });

    if let Some(section_id) = completed {
        app.complete_section(&section_id);
    }
    if start {
        app.start_quiz();
    }
}
