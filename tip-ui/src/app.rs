use egui::Context;
use tip_core::SplitSession;
use tracing::debug;

use crate::config::UiConfig;
use crate::screens::CalculatorScreen;

/// Main application state: one calculator session plus the loaded config.
pub struct TipApp {
    pub session: SplitSession,
    pub config: UiConfig,
}

impl TipApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: UiConfig) -> Self {
        debug!(presets = ?config.tip_presets, "building app state");
        Self {
            session: SplitSession::new(),
            config,
        }
    }
}

impl eframe::App for TipApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .add_enabled(self.session.can_reset(), egui::Button::new("Reset"))
                        .clicked()
                    {
                        self.session.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| CalculatorScreen::show(self, ui));
    }
}
