use eframe::egui;
use crate::app::app_core::MotionLabelerApp;
use crate::app::handlers::ExportHandler;

pub fn render_export_dialog(app: &mut MotionLabelerApp, ctx: &egui::Context) {
    if app.state.export.show_export_dialog {
        egui::Window::new("Download labeled CSV")
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.label("Save the labeled table (original columns plus Label) as CSV");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label("File:");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.state.export.export_path)
                            .desired_width(300.0)
                            .hint_text("labeled_output.csv"),
                    );
                });

                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("✅ Save").clicked() {
                        ExportHandler::export_labeled_csv(&mut app.state);
                        app.state.export.show_export_dialog = false;
                    }

                    if ui.button("❌ Cancel").clicked() {
                        app.state.export.show_export_dialog = false;
                    }
                });
            });
    }
}
