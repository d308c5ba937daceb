use crate::app::EduApp;
use crate::app::queries::placeholder_word;
use crate::ui::helpers::notice;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, Key, RichText, TextEdit};

pub fn ui_landing(app: &mut EduApp, ctx: &Context) {
    let word = placeholder_word(ctx.input(|i| i.time));

    centered_panel(ctx, 360.0, 640.0, |ui| {
        let width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("✨").size(48.0));
            ui.heading(RichText::new("Belajar Jadi Lebih Seru!").size(36.0).strong());
            ui.add_space(10.0);
            ui.label(
                "Temukan cara belajar yang menyenangkan dengan kuis interaktif. \
                 Mulai perjalanan belajarmu sekarang!",
            );
            ui.add_space(24.0);

            // Buscador: Enter o lupa
            let mut submit = false;
            ui.horizontal(|ui| {
                let search = ui.add(
                    TextEdit::singleline(&mut app.search_query)
                        .hint_text(format!("Mau belajar {word}"))
                        .desired_width(width - 70.0),
                );
                if search.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submit = true;
                }
                if ui.add_sized([56.0, 28.0], Button::new("🔍")).clicked() {
                    submit = true;
                }
            });

            ui.add_space(24.0);
            ui.label(RichText::new("Atau mulai dengan topik populer").weak());
            ui.add_space(6.0);
            let recommend = ui
                .add_sized([220.0, 36.0], Button::new("Lihat Rekomendasi"))
                .clicked();

            notice(ui, &app.message);

            if submit {
                app.submit_search();
            } else if recommend {
                app.show_recommendations();
            }
        });
    });
}
