use crate::app::EduApp;
use crate::ui::helpers::{GREEN, RED, notice, review_option};
use crate::ui::layout::{scroll_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_results(app: &mut EduApp, ctx: &Context) {
    let Some(quiz) = app.quiz.as_ref() else {
        return;
    };
    let Some(score) = quiz.score().copied() else {
        return;
    };
    let grade = score.grade();

    let mut retry = false;
    let mut back = false;

    scroll_panel(ctx, 760.0, |ui| {
        let width = ui.available_width();

        // ----------- RESULTADO -----------
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(grade.emoji()).size(56.0));
            ui.heading(RichText::new(grade.title()).size(30.0).strong());
            ui.label(format!(
                "Kamu berhasil menjawab {} dari {} soal dengan benar",
                score.correct, score.total
            ));
            ui.label(RichText::new(format!("Score: {}%", score.percentage)).heading().strong());
        });
        notice(ui, &app.message);
        ui.add_space(12.0);

        // ----------- REVISIÓN -----------
        ui.heading("Pembahasan Soal");
        ui.add_space(6.0);
        for item in quiz.review().unwrap_or_default() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width - 16.0);
                ui.horizontal(|ui| {
                    if item.is_correct {
                        ui.label(RichText::new("✔").color(GREEN).strong());
                    } else {
                        ui.label(RichText::new("✖").color(RED).strong());
                    }
                    ui.label(RichText::new(format!("Soal {}", item.position + 1)).strong());
                });
                ui.label(&item.question.prompt);
                ui.add_space(4.0);
                for (idx, option) in item.question.options.iter().enumerate() {
                    review_option(ui, option, item.mark(idx));
                }
                ui.add_space(4.0);
                ui.label(RichText::new("🧠 Pembahasan:").strong());
                ui.label(&item.question.explanation);
            });
            ui.add_space(8.0);
        }

        ui.add_space(12.0);
        (retry, back) =
            two_button_row(ui, width, ("⟲ Coba Lagi", true), ("Kembali ke Materi", true));
    });

    if retry {
        app.retry_quiz();
    } else if back {
        app.back_to_topic();
    }
}
