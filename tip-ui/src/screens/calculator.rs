use egui::Ui;

use crate::app::TipApp;
use crate::widgets::{amount_row, numeric_field};

pub struct CalculatorScreen;

impl CalculatorScreen {
    /// Consistent group width for the form and summary sections
    const GROUP_WIDTH: f32 = 440.0;

    pub fn show(app: &mut TipApp, ui: &mut Ui) {
        ui.heading("Split the Bill");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let group_width = ui.available_width().min(Self::GROUP_WIDTH);

            // Bill
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    let symbol = app.config.currency_symbol.clone();
                    if let Some(proposed) = numeric_field(
                        ui,
                        "Bill",
                        &symbol,
                        app.session.bill().raw(),
                        app.session.bill().error(),
                        "0",
                    ) {
                        app.session.edit_bill(&proposed);
                    }
                });
            });

            ui.add_space(10.0);

            // Tip selection
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.label(egui::RichText::new("Select Tip %").strong());
                    ui.add_space(5.0);

                    let presets = app.config.tip_presets.clone();
                    egui::Grid::new("tip_presets_grid")
                        .num_columns(3)
                        .spacing([10.0, 8.0])
                        .show(ui, |ui| {
                            for (i, preset) in presets.iter().enumerate() {
                                let selected =
                                    app.session.tip().selected_preset() == Some(*preset);
                                if ui
                                    .selectable_label(selected, format!("{preset}%"))
                                    .clicked()
                                {
                                    app.session.select_preset_tip(*preset);
                                }
                                if (i + 1) % 3 == 0 {
                                    ui.end_row();
                                }
                            }
                        });

                    ui.add_space(5.0);
                    if let Some(proposed) = numeric_field(
                        ui,
                        "",
                        "",
                        app.session.tip().custom_raw(),
                        app.session.tip().custom_error(),
                        "Custom",
                    ) {
                        app.session.edit_custom_tip(&proposed);
                    }
                });
            });

            ui.add_space(10.0);

            // People
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    if let Some(proposed) = numeric_field(
                        ui,
                        "Number of People",
                        "👥",
                        app.session.people().raw(),
                        app.session.people().error(),
                        "0",
                    ) {
                        app.session.edit_people(&proposed);
                    }
                });
            });

            ui.add_space(20.0);

            // Summary
            let amounts = app.session.amounts();
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);

                    amount_row(
                        ui,
                        "Tip Amount",
                        amounts.tip_per_person,
                        &app.config.currency_symbol,
                    );
                    ui.add_space(10.0);
                    amount_row(
                        ui,
                        "Total",
                        amounts.total_per_person,
                        &app.config.currency_symbol,
                    );

                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(5.0);

                    if ui
                        .add_enabled(app.session.can_reset(), egui::Button::new("RESET"))
                        .clicked()
                    {
                        app.session.reset();
                    }
                });
            });

            ui.add_space(20.0);
        });
    }
}
