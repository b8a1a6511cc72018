//! egui renderer for the prediction dashboard.

pub mod style;

use eframe::egui::{self, Frame, RichText, Ui, Vec2};

use crate::egui_app::controller::DashboardController;
use crate::egui_app::state::{SubmitOutcome, SubmitPhase};
use crate::features::FEATURE_NAMES;

/// Window title.
pub const APP_TITLE: &str = "Flower Drying Time Predictor";
/// Smallest window that still fits the three input columns.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(900.0, 560.0);

const INPUT_COLUMNS: usize = 3;

/// Renders the dashboard using the controller state.
pub struct DashboardApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl DashboardApp {
    pub fn new(controller: DashboardController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(style::palette().bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(status.badge_color));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(style::palette().text_muted));
                });
            });
    }

    fn render_features_sidebar(&self, ctx: &egui::Context) {
        egui::SidePanel::left("features")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(format!("Features used ({}):", FEATURE_NAMES.len())).strong());
                ui.add_space(6.0);
                for (idx, name) in FEATURE_NAMES.iter().enumerate() {
                    ui.label(format!("{}. {name}", idx + 1));
                }
            });
    }

    fn render_center(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Flower Drying Time Prediction Dashboard");
        ui.label(
            RichText::new(
                "Use this tool to estimate drying time based on floral traits and nectar properties.",
            )
            .color(palette.text_muted),
        );
        ui.add_space(12.0);
        ui.label(RichText::new("Input Flower Data").strong().size(18.0));
        ui.add_space(6.0);
        self.render_inputs(ui);
        ui.add_space(12.0);

        let idle = self.controller.ui.phase == SubmitPhase::Idle;
        if ui
            .add_enabled(idle, egui::Button::new("Predict Drying Time"))
            .clicked()
        {
            self.controller.submit();
        }
        ui.add_space(12.0);
        self.render_outcome(ui);
    }

    fn render_inputs(&mut self, ui: &mut Ui) {
        let inputs = &mut self.controller.ui.inputs;
        ui.columns(INPUT_COLUMNS, |columns| {
            for (idx, input) in inputs.iter_mut().enumerate() {
                let column = &mut columns[idx % INPUT_COLUMNS];
                column.label(&input.label);
                column.add(
                    egui::TextEdit::singleline(&mut input.text)
                        .hint_text("0.0")
                        .desired_width(f32::INFINITY),
                );
                column.add_space(6.0);
            }
        });
    }

    fn render_outcome(&self, ui: &mut Ui) {
        let palette = style::palette();
        match &self.controller.ui.outcome {
            SubmitOutcome::None => {}
            SubmitOutcome::Error(message) => {
                ui.label(
                    RichText::new(format!("Prediction failed: {message}"))
                        .color(style::status_badge_color(style::StatusTone::Error)),
                );
            }
            SubmitOutcome::Result(view) => {
                Frame::group(ui.style())
                    .stroke(style::panel_border())
                    .show(ui, |ui| {
                        ui.label(RichText::new(view.shape_text()).color(palette.text_muted));
                        ui.label(RichText::new(view.expects_text()).color(palette.text_muted));
                        ui.add_space(8.0);
                        ui.label(RichText::new("Prediction Results").strong().size(18.0));
                        ui.label(
                            RichText::new("Estimated Drying Time (proxy units)")
                                .color(palette.text_muted),
                        );
                        ui.label(RichText::new(&view.value_text).size(32.0).strong());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("Condition:").strong());
                            ui.label(RichText::new(view.label).color(view.color));
                        });
                    });
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        self.render_features_sidebar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.render_center(ui));
        });
    }
}

/// Minimal app shown when startup fails; it offers no further interaction.
pub struct LaunchError {
    message: String,
}

impl LaunchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Error loading model/scaler");
                ui.label(
                    RichText::new(&self.message)
                        .color(style::status_badge_color(style::StatusTone::Error)),
                );
            });
        });
    }
}
