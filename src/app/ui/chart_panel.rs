use eframe::egui;
use log::warn;

use crate::app::app_core::MotionLabelerApp;
use crate::config::ChartControls;
use crate::dataset::LabeledDataset;
use crate::types::{Axis, MotionLabel};
use super::status_bar::status_color;

/// 图表区域：标签/坐标轴选择 + 时间序列图。
/// 选择控件有两种呈现方式：图表上方的原生下拉框，或嵌在图表框内的菜单。
pub fn render_chart_panel(app: &mut MotionLabelerApp, ui: &mut egui::Ui, dataset: &LabeledDataset) {
    render_style_switch(app, ui);
    ui.add_space(5.0);

    let labels = dataset.distinct_labels();
    match app.config.get_config().plot.controls {
        ChartControls::Native => {
            render_native_selectors(app, ui, &labels);
            ui.add_space(5.0);
            render_chart(app, ui);
        }
        ChartControls::ChartMenu => {
            ui.group(|ui| {
                render_chart_menu(app, ui, &labels);
                render_chart(app, ui);
            });
        }
    }
}

fn render_style_switch(app: &mut MotionLabelerApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label("Controls:");
        let controls = &mut app.config.get_config_mut().plot.controls;
        ui.radio_value(controls, ChartControls::Native, "Selectors");
        ui.radio_value(controls, ChartControls::ChartMenu, "Chart menu");

        if app.config.config_path().is_some() && ui.button("💾 Save settings").clicked() {
            if let Err(e) = app.config.save() {
                warn!("Failed to save settings: {}", e);
            }
        }
    });
}

fn render_native_selectors(app: &mut MotionLabelerApp, ui: &mut egui::Ui, labels: &[MotionLabel]) {
    let mut selected_label = app.state.selection.selected_label;
    let mut selected_axis = app.state.selection.selected_axis;

    ui.horizontal(|ui| {
        egui::ComboBox::from_label("Select Motion Label")
            .selected_text(selected_label.map(|l| l.as_str()).unwrap_or("-"))
            .show_ui(ui, |ui| {
                for label in labels {
                    ui.selectable_value(&mut selected_label, Some(*label), label.as_str());
                }
            });

        ui.add_space(20.0);

        egui::ComboBox::from_label("Select Axis")
            .selected_text(selected_axis.column_name())
            .show_ui(ui, |ui| {
                for axis in Axis::ALL {
                    ui.selectable_value(&mut selected_axis, axis, axis.column_name());
                }
            });
    });

    apply_selection(app, selected_label, selected_axis);
}

fn render_chart_menu(app: &mut MotionLabelerApp, ui: &mut egui::Ui, labels: &[MotionLabel]) {
    let mut selected_label = app.state.selection.selected_label;
    let mut selected_axis = app.state.selection.selected_axis;

    ui.horizontal(|ui| {
        let motion_title = format!("Motion: {} ⏷", selected_label.map(|l| l.as_str()).unwrap_or("-"));
        ui.menu_button(motion_title, |ui| {
            for label in labels {
                ui.selectable_value(&mut selected_label, Some(*label), label.as_str());
            }
        });

        let axis_title = format!("Axis: {} ⏷", selected_axis);
        ui.menu_button(axis_title, |ui| {
            for axis in Axis::ALL {
                ui.selectable_value(&mut selected_axis, axis, axis.column_name());
            }
        });
    });

    apply_selection(app, selected_label, selected_axis);
}

fn apply_selection(app: &mut MotionLabelerApp, label: Option<MotionLabel>, axis: Axis) {
    if let Some(label) = label {
        app.state.select_label(label);
    }
    app.state.select_axis(axis);
}

fn render_chart(app: &MotionLabelerApp, ui: &mut egui::Ui) {
    if let Some(plot) = &app.state.selection.plot {
        plot.ui(ui, &app.config.get_config().plot);
    } else if let Some(notice) = app.state.empty_selection_notice() {
        ui.colored_label(status_color(notice.level), notice.text);
    }
}
