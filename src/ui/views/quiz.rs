use crate::app::EduApp;
use crate::quiz::{QuizPhase, format_time};
use crate::ui::helpers::{ORANGE, RED, option_button, question_dots};
use crate::ui::layout::{centered_panel, two_button_row};
use crate::ui::views::results::ui_results;
use egui::{Button, Context, ProgressBar, RichText};

enum Intent {
    Select(usize),
    Prev,
    Next,
}

pub fn ui_quiz(app: &mut EduApp, ctx: &Context) {
    let Some(phase) = app.quiz_phase() else {
        app.open_not_found();
        return;
    };

    match phase {
        QuizPhase::Loading => ui_unavailable(app, ctx),
        QuizPhase::InProgress => ui_in_progress(app, ctx),
        QuizPhase::Completed => ui_results(app, ctx),
    }
}

fn ui_unavailable(app: &mut EduApp, ctx: &Context) {
    let mut home = false;
    centered_panel(ctx, 160.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Kuis Tidak Tersedia").size(32.0).strong());
            ui.add_space(16.0);
            home = ui
                .add_sized([220.0, 36.0], Button::new("Kembali ke Beranda"))
                .clicked();
        });
    });
    if home {
        app.open_landing();
    }
}

fn ui_in_progress(app: &mut EduApp, ctx: &Context) {
    let Some(quiz) = app.quiz.as_ref() else {
        return;
    };
    let Some(question) = quiz.current_question().cloned() else {
        return;
    };
    let cursor = quiz.cursor().unwrap_or(0);
    let total = quiz.total();
    let remaining = quiz.remaining_seconds().unwrap_or(0);
    let selected = quiz.selected_answer();
    let can_advance = quiz.can_advance();
    let is_last = quiz.is_last_question();
    let dots = quiz.question_dots();
    let fraction = quiz.progress_fraction();

    let mut intent: Option<Intent> = None;

    centered_panel(ctx, 480.0, 680.0, |ui| {
        let width = ui.available_width();

        // ----------- CABECERA: tiempo y progreso -----------
        ui.horizontal(|ui| {
            let time_color = if remaining < 60 { RED } else { ORANGE };
            ui.label("Waktu Tersisa");
            ui.label(RichText::new(format_time(remaining)).monospace().strong().color(time_color));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{}/{}", cursor + 1, total)).strong());
                ui.label("Progress");
            });
        });
        ui.add(ProgressBar::new(fraction).desired_height(6.0));
        ui.add_space(12.0);

        // ----------- PREGUNTA -----------
        ui.label(RichText::new(format!("Soal {}", cursor + 1)).color(ORANGE));
        ui.heading(&question.prompt);
        ui.add_space(10.0);
        for (idx, option) in question.options.iter().enumerate() {
            if option_button(ui, option, selected == Some(idx), width) {
                intent = Some(Intent::Select(idx));
            }
            ui.add_space(4.0);
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| question_dots(ui, &dots));
        ui.add_space(8.0);

        let next_label = if is_last { "Selesai" } else { "Selanjutnya" };
        let (prev, next) =
            two_button_row(ui, width, ("Sebelumnya", cursor > 0), (next_label, can_advance));
        if prev {
            intent = Some(Intent::Prev);
        }
        if next {
            intent = Some(Intent::Next);
        }
    });

    match intent {
        Some(Intent::Select(idx)) => app.select_option(idx),
        Some(Intent::Prev) => app.prev_question(),
        Some(Intent::Next) => app.next_question(),
        None => {}
    }
}
