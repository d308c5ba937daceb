use crate::app::EduApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_not_found(app: &mut EduApp, ctx: &Context) {
    let mut home = false;
    centered_panel(ctx, 300.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🤔").size(64.0));
            ui.heading(RichText::new("404").size(48.0).strong());
            ui.heading("Halaman Tidak Ditemukan");
            ui.add_space(8.0);
            ui.label(
                "Oops! Sepertinya halaman yang kamu cari tidak ada. \
                 Mungkin topiknya belum tersedia.",
            );
            ui.add_space(16.0);
            home = ui
                .add_sized([220.0, 36.0], Button::new("🏠 Kembali ke Beranda"))
                .clicked();
        });
    });
    if home {
        app.open_landing();
    }
}
