use std::path::PathBuf;

use eframe::egui;
use crate::app::app_core::MotionLabelerApp;
use crate::app::handlers::LoadHandler;
use crate::app::state::StatusLevel;
use crate::types::REQUIRED_COLUMNS;

pub fn render_status_bar(app: &mut MotionLabelerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("status_bar")
        .min_height(40.0)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.heading("Motion Classification and Visualization");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("CSV file:");

                let hint = format!("CSV with columns: {}", REQUIRED_COLUMNS.join(", "));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut app.state.dataset.input_path)
                        .desired_width(420.0)
                        .hint_text(hint),
                );
                let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let can_load = !app.state.dataset.is_loading;
                if ui.add_enabled(can_load, egui::Button::new("📂 Load")).clicked() || (submitted && can_load) {
                    let path = PathBuf::from(app.state.dataset.input_path.trim());
                    LoadHandler::request_load_file(&mut app.state, path);
                }

                if app.state.dataset.is_loading {
                    ui.spinner();
                }

                // 最右边放下载按钮
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let has_data = app.state.dataset.dataset.is_some();
                    if ui
                        .add_enabled(has_data, egui::Button::new("📥 Download labeled CSV"))
                        .clicked()
                    {
                        app.state.export.show_export_dialog = true;
                    }
                });
            });
            ui.add_space(5.0);
        });
}

pub(super) fn status_color(level: StatusLevel) -> egui::Color32 {
    match level {
        StatusLevel::Info => egui::Color32::from_rgb(0, 100, 200),    // 蓝色
        StatusLevel::Success => egui::Color32::from_rgb(0, 150, 0),   // 绿色
        StatusLevel::Warning => egui::Color32::from_rgb(255, 165, 0), // 橙色
        StatusLevel::Error => egui::Color32::from_rgb(200, 0, 0),     // 红色
    }
}

pub fn render_bottom_status_bar(app: &mut MotionLabelerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_status_bar")
        .min_height(25.0)
        .show(ctx, |ui| {
            ui.add_space(3.0);
            ui.horizontal(|ui| {
                // 左侧：加载状态
                ui.colored_label(status_color(app.state.status.level), &app.state.status.text);

                if let Some(dataset) = &app.state.dataset.dataset {
                    ui.separator();
                    ui.label(format!("{} rows from {}", dataset.len(), app.state.dataset.source_name));
                    ui.separator();
                    ui.label(app.state.label_summary());
                }

                // 右侧：导出状态
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !app.state.export.export_status.is_empty() {
                        ui.colored_label(egui::Color32::from_rgb(0, 150, 100), &app.state.export.export_status);
                    }
                });
            });
            ui.add_space(3.0);
        });
}
