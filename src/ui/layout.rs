use crate::app::EduApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(app: &mut EduApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let back = match app.state {
                AppState::Quiz => Some("⬅ Kembali ke Materi"),
                AppState::Topic | AppState::Recommendations => Some("⬅ Kembali"),
                _ => None,
            };
            if let Some(label) = back {
                if ui.button(label).clicked() {
                    match app.state {
                        AppState::Quiz => app.back_to_topic(),
                        AppState::Topic => app.show_recommendations(),
                        _ => app.back_to_search(),
                    }
                    ctx.request_repaint();
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(Button::new(RichText::new("🧠 EduBlink").strong()).frame(false))
                    .clicked()
                {
                    app.open_landing();
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("EduBlink - Aplikasi pembelajaran interaktif untuk semua").small());

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Mode gelap").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Mode terang").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll para las páginas largas (ficha, revisión)
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            let w = ui.available_width().min(max_width);
                            ui.set_width(w);
                            inner(ui);
                        });
                });
            });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(left.0)))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(right.0)))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
