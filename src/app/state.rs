use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use log::{info, warn};

use crate::config::AppConfig;
use crate::dataset::LabeledDataset;
use crate::plotter::LabelSeriesPlot;
use crate::types::{Axis, DatasetTask, ExportResult, LoadResult, MotionLabel};

/// 应用状态管理模块
/// 将界面相关的状态拆分为数据集、选择、导出三部分

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, text)
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::info("Please upload a CSV file to start.")
    }
}

/// 数据集状态
#[derive(Debug, Default)]
pub struct DatasetState {
    pub dataset: Option<Arc<LabeledDataset>>,
    pub source_name: String,
    pub input_path: String,
    pub is_loading: bool,
    pub load_result_receiver: Option<Receiver<LoadResult>>,
}

/// 标签/坐标轴选择状态，图表随选择重建
#[derive(Debug, Default)]
pub struct SelectionState {
    pub selected_label: Option<MotionLabel>,
    pub selected_axis: Axis,
    pub plot: Option<LabelSeriesPlot>,
}

/// 导出状态
#[derive(Debug, Default)]
pub struct ExportState {
    pub show_export_dialog: bool,
    pub export_path: String,
    pub export_status: String,
    pub export_result_receiver: Option<Receiver<ExportResult>>,
}

/// 统一的应用状态管理
#[derive(Debug)]
pub struct AppState {
    pub dataset: DatasetState,
    pub selection: SelectionState,
    pub export: ExportState,
    pub status: StatusMessage,
    pub task_sender: Sender<DatasetTask>,
}

impl AppState {
    pub fn new(task_sender: Sender<DatasetTask>, config: &AppConfig) -> Self {
        Self {
            dataset: DatasetState::default(),
            selection: SelectionState::default(),
            export: ExportState {
                export_path: config.export.default_path.clone(),
                ..ExportState::default()
            },
            status: StatusMessage::default(),
            task_sender,
        }
    }

    pub fn current_dataset(&self) -> Option<Arc<LabeledDataset>> {
        self.dataset.dataset.clone()
    }

    /// 处理加载结果：成功则替换数据集，失败则清空（不做部分标注）
    pub fn apply_load_result(&mut self, result: LoadResult) {
        self.dataset.is_loading = false;
        match result.outcome {
            Ok(dataset) => {
                info!("Loaded {} labeled rows from {}", dataset.len(), result.source);
                self.apply_dataset(result.source, dataset);
                self.status = StatusMessage::success("Motion classification applied!");
            }
            Err(e) => {
                warn!("Load of {} rejected: {}", result.source, e);
                self.clear_dataset();
                self.status = StatusMessage::error(e.to_string());
            }
        }
    }

    pub fn apply_export_result(&mut self, result: ExportResult) {
        if result.is_success() {
            info!("{}", result.message());
        }
        self.export.export_status = result.message();
    }

    pub fn apply_dataset(&mut self, source: String, dataset: LabeledDataset) {
        let labels = dataset.distinct_labels();
        self.dataset.source_name = source;
        self.dataset.dataset = Some(Arc::new(dataset));

        // 保留之前选中的标签（如果新数据中仍存在），否则选第一个
        self.selection.selected_label = match self.selection.selected_label {
            Some(label) if labels.contains(&label) => Some(label),
            _ => labels.first().copied(),
        };
        self.refresh_plot();
    }

    pub fn clear_dataset(&mut self) {
        self.dataset.dataset = None;
        self.dataset.source_name.clear();
        self.selection.selected_label = None;
        self.selection.plot = None;
    }

    pub fn select_label(&mut self, label: MotionLabel) {
        if self.selection.selected_label != Some(label) {
            self.selection.selected_label = Some(label);
            self.refresh_plot();
        }
    }

    pub fn select_axis(&mut self, axis: Axis) {
        if self.selection.selected_axis != axis {
            self.selection.selected_axis = axis;
            self.refresh_plot();
        }
    }

    fn refresh_plot(&mut self) {
        self.selection.plot = match (&self.dataset.dataset, self.selection.selected_label) {
            (Some(dataset), Some(label)) => {
                LabelSeriesPlot::from_dataset(dataset, label, self.selection.selected_axis)
            }
            _ => None,
        };
    }

    /// 选中的标签没有任何数据时的提示（警告级别，不是错误）
    pub fn empty_selection_notice(&self) -> Option<StatusMessage> {
        if self.dataset.dataset.is_none() || self.selection.plot.is_some() {
            return None;
        }
        let text = match self.selection.selected_label {
            Some(label) => format!("No data for motion '{}'", label),
            None => "No labeled rows to display".to_string(),
        };
        Some(StatusMessage::warning(text))
    }

    pub fn has_pending_tasks(&self) -> bool {
        self.dataset.load_result_receiver.is_some() || self.export.export_result_receiver.is_some()
    }

    /// 例如 "Still: 12 | Tilt: 3"
    pub fn label_summary(&self) -> String {
        match &self.dataset.dataset {
            Some(dataset) => dataset
                .label_counts()
                .iter()
                .map(|(label, count)| format!("{}: {}", label, count))
                .collect::<Vec<_>>()
                .join(" | "),
            None => String::new(),
        }
    }
}
