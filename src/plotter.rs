use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::config::PlotConfig;
use crate::dataset::timestamp::{format_plot_seconds, to_plot_seconds};
use crate::dataset::LabeledDataset;
use crate::types::{Axis, MotionLabel};

/// 格式化数字为固定宽度的 y 轴标签
fn format_fixed_width_y_label(value: f64) -> String {
    let abs_value = value.abs();
    if abs_value >= 1000.0 {
        format!("{:-6.1e}", value)
    } else if abs_value >= 100.0 {
        format!("{:-6.0}", value)
    } else if abs_value >= 10.0 {
        format!("{:-6.1}", value)
    } else {
        format!("{:-6.2}", value)
    }
}

pub fn axis_color(axis: Axis, config: &PlotConfig) -> Color32 {
    let [r, g, b] = match axis {
        Axis::AccX => config.colors.acc_x,
        Axis::AccY => config.colors.acc_y,
        Axis::AccZ => config.colors.acc_z,
    };
    Color32::from_rgb(r, g, b)
}

const DEFAULT_Y_BOUNDS: (f64, f64) = (-1.0, 1.0);

/// Chart of one accelerometer axis restricted to rows with one label.
/// x is seconds since the epoch, y is the raw sensor value.
#[derive(Debug, Clone)]
pub struct LabelSeriesPlot {
    label: MotionLabel,
    axis: Axis,
    points: Vec<[f64; 2]>,
}

impl LabelSeriesPlot {
    /// `None` when no row carries `label`
    pub fn from_dataset(dataset: &LabeledDataset, label: MotionLabel, axis: Axis) -> Option<Self> {
        let points: Vec<[f64; 2]> = dataset
            .series(label, axis)
            .iter()
            .map(|(ts, value)| [to_plot_seconds(ts), *value])
            .collect();

        if points.is_empty() {
            return None;
        }

        Some(Self { label, axis, points })
    }

    pub fn label(&self) -> MotionLabel {
        self.label
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn title(&self) -> String {
        format!("Time Series for {} ({})", self.label, self.axis)
    }

    pub fn series_name(&self) -> String {
        format!("{} - {}", self.label, self.axis)
    }

    /// 动态Y轴范围，上下各留 5% 边距；NaN/inf 不参与计算
    pub fn y_bounds(&self) -> (f64, f64) {
        let (y_min, y_max) = self
            .points
            .iter()
            .map(|p| p[1])
            .filter(|y| y.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), y| {
                (min.min(y), max.max(y))
            });

        // 没有有限值时使用默认范围
        if y_min > y_max {
            return DEFAULT_Y_BOUNDS;
        }

        let range = (y_max - y_min).max(0.1);
        (y_min - range * 0.05, y_max + range * 0.05)
    }

    pub fn ui(&self, ui: &mut egui::Ui, config: &PlotConfig) {
        ui.heading(self.title());

        let (y_min, y_max) = self.y_bounds();
        let color = axis_color(self.axis, config);
        let name = self.series_name();

        let mut plot = Plot::new(("label_series", self.label, self.axis))
            .height(config.plot_height)
            .x_axis_label("Timestamp")
            .y_axis_label("Sensor Value")
            .x_axis_formatter(|mark, range| {
                format_plot_seconds(mark.value, range.end() - range.start())
            })
            .y_axis_formatter(|mark, _| format_fixed_width_y_label(mark.value))
            .include_y(y_min)
            .include_y(y_max)
            .allow_drag(config.allow_drag)
            .allow_zoom(config.allow_zoom);

        if config.show_legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            // 单个点画不出线段，额外画一个点
            if self.points.len() == 1 {
                plot_ui.points(
                    Points::new(name.clone(), PlotPoints::from(self.points.clone()))
                        .color(color)
                        .radius(3.0),
                );
            }
            plot_ui.line(
                Line::new(name, PlotPoints::from(self.points.clone()))
                    .color(color)
                    .width(config.line_width),
            );
        });
    }
}
