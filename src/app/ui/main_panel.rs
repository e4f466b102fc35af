use eframe::egui;
use crate::app::app_core::MotionLabelerApp;
use crate::app::state::StatusLevel;
use crate::dataset::LabeledDataset;
use super::chart_panel::render_chart_panel;

pub fn render_main_panel(app: &mut MotionLabelerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            let Some(dataset) = app.state.current_dataset() else {
                render_empty_state(app, ui);
                return;
            };

            ui.colored_label(egui::Color32::from_rgb(0, 150, 0), "Motion classification applied!");
            ui.add_space(5.0);

            let preview_rows = app.config.get_config().preview.rows;
            egui::CollapsingHeader::new(format!("Labeled data (first {} rows)", preview_rows.min(dataset.len())))
                .default_open(true)
                .show(ui, |ui| render_preview(ui, &dataset, preview_rows));

            ui.separator();
            render_chart_panel(app, ui, &dataset);
        });
    });
}

fn render_empty_state(app: &MotionLabelerApp, ui: &mut egui::Ui) {
    if app.state.dataset.is_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading and classifying...");
        });
        return;
    }

    // 加载失败时直接在主面板显示错误
    if app.state.status.level == StatusLevel::Error {
        ui.colored_label(egui::Color32::from_rgb(200, 0, 0), &app.state.status.text);
        ui.add_space(10.0);
    }

    ui.label("Please upload a CSV file to start.");
    ui.label("Enter a file path above or drop a CSV file onto this window.");
}

fn render_preview(ui: &mut egui::Ui, dataset: &LabeledDataset, rows: usize) {
    let headers = dataset.output_headers();

    egui::ScrollArea::horizontal()
        .id_salt("preview_scroll")
        .show(ui, |ui| {
            egui::Grid::new("preview_grid")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    for header in headers.iter() {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for record in dataset.output_records().take(rows) {
                        for cell in record.iter() {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
}
