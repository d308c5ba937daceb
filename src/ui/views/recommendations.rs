use crate::app::EduApp;
use crate::ui::helpers::{big_list_button, notice};
use crate::ui::layout::scroll_panel;
use egui::{Context, RichText};

pub fn ui_recommendations(app: &mut EduApp, ctx: &Context) {
    // Precomputar las tarjetas para no mantener el borrow del catálogo
    let cards: Vec<(String, String, String, String, String)> = app
        .filtered_topics()
        .into_iter()
        .map(|t| {
            (
                t.id.clone(),
                format!("{} {}", t.icon, t.title),
                t.description.clone(),
                t.difficulty.clone(),
                t.duration.clone(),
            )
        })
        .collect();

    let mut selected: Option<String> = None;
    let mut back = false;

    scroll_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            if ui.button("← Kembali ke pencarian").clicked() {
                back = true;
            }
            ui.add_space(8.0);
            ui.heading("Topik Pembelajaran Pilihan");
            ui.label("Pilih topik yang ingin kamu pelajari dan mulai belajar sekarang!");
            notice(ui, &app.message);
        });
        ui.add_space(12.0);

        for (id, title, description, difficulty, duration) in &cards {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width - 16.0);
                ui.label(RichText::new(title).heading());
                ui.label(description);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(difficulty).strong());
                    ui.label(format!("⏱ {duration}"));
                });
                if big_list_button(ui, "Mulai Belajar", width - 32.0, 32.0) {
                    selected = Some(id.clone());
                }
            });
            ui.add_space(8.0);
        }
    });

    if back {
        app.back_to_search();
    } else if let Some(topic_id) = selected {
        app.open_topic(&topic_id);
    }
}
