// src/ui/helpers.rs
use crate::quiz::{OptionMark, QuestionDot};
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const ORANGE: Color32 = Color32::from_rgb(234, 120, 40);
pub const GREEN: Color32 = Color32::from_rgb(40, 160, 80);
pub const RED: Color32 = Color32::from_rgb(210, 60, 60);

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Botón de opción de respuesta; resaltado si está elegido
pub fn option_button(ui: &mut Ui, label: &str, selected: bool, width: f32) -> bool {
    let marker = if selected { "◉" } else { "○" };
    let mut button = Button::new(format!("{marker}  {label}"))
        .min_size(Vec2::new(width, 40.0))
        .selected(selected);
    if selected {
        button = button.stroke(egui::Stroke::new(2.0, ORANGE));
    }
    ui.add(button).clicked()
}

/// Fila de puntos de navegación del cuestionario
pub fn question_dots(ui: &mut Ui, dots: &[QuestionDot]) {
    ui.horizontal(|ui| {
        for dot in dots {
            let color = match dot {
                QuestionDot::Current => ORANGE,
                QuestionDot::Answered => ORANGE.gamma_multiply(0.4),
                QuestionDot::Pending => Color32::GRAY,
            };
            ui.label(RichText::new("●").color(color));
        }
    });
}

/// Opción en la revisión con su insignia
pub fn review_option(ui: &mut Ui, label: &str, mark: OptionMark) {
    ui.horizontal(|ui| {
        match mark {
            OptionMark::Correct => {
                ui.label(RichText::new(format!("✔ {label}")).color(GREEN).strong());
                ui.label(RichText::new("Jawaban Benar").small().color(GREEN));
            }
            OptionMark::WrongPick => {
                ui.label(RichText::new(format!("✖ {label}")).color(RED));
                ui.label(RichText::new("Jawabanmu").small().color(RED));
            }
            OptionMark::Plain => {
                ui.label(format!("   {label}"));
            }
        }
    });
}

/// Mensaje destacado (equivalente al toast)
pub fn notice(ui: &mut Ui, message: &str) {
    if !message.is_empty() {
        ui.add_space(8.0);
        ui.label(RichText::new(message).color(ORANGE).strong());
        ui.add_space(8.0);
    }
}
