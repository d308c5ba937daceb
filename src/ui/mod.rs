mod helpers;
pub mod layout;
pub mod views;

use crate::app::EduApp;
use crate::model::AppState;
use crate::quiz::QuizPhase;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for EduApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Ticks del temporizador antes de pintar
        self.pump_timer();

        // BARRA SUPERIOR (logo + volver), salvo en la portada
        if !matches!(self.state, AppState::Landing) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR: tema oscuro/claro y pie
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views
        match self.state {
            AppState::Landing => views::landing::ui_landing(self, ctx),
            AppState::Recommendations => views::recommendations::ui_recommendations(self, ctx),
            AppState::Topic => views::topic::ui_topic(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::NotFound => views::not_found::ui_not_found(self, ctx),
        }

        // Repintados periódicos: cuenta atrás y palabra del buscador
        if self.quiz_phase() == Some(QuizPhase::InProgress) {
            ctx.request_repaint_after(Duration::from_millis(250));
        } else if self.state == AppState::Landing {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}
