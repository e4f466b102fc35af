use crossbeam_channel::TryRecvError;
use eframe::egui;
use log::{info, warn};

use super::app_core::MotionLabelerApp;
use super::handlers::LoadHandler;
use super::state::StatusMessage;

impl MotionLabelerApp {
    pub fn handle_load_results(&mut self) {
        if let Some(receiver) = &self.state.dataset.load_result_receiver {
            match receiver.try_recv() {
                Ok(result) => {
                    self.state.dataset.load_result_receiver = None; // 清除接收器
                    self.state.apply_load_result(result);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    // 工作线程没有回复就退出了
                    warn!("Dataset worker dropped a pending load");
                    self.state.dataset.load_result_receiver = None;
                    self.state.dataset.is_loading = false;
                    self.state.status = StatusMessage::error("Loading was interrupted");
                }
            }
        }
    }

    pub fn handle_export_results(&mut self) {
        if let Some(receiver) = &self.state.export.export_result_receiver {
            match receiver.try_recv() {
                Ok(result) => {
                    self.state.export.export_result_receiver = None; // 清除接收器
                    self.state.apply_export_result(result);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    warn!("Dataset worker dropped a pending export");
                    self.state.export.export_result_receiver = None;
                    self.state.export.export_status = "Export was interrupted".to_string();
                }
            }
        }
    }

    /// 拖放到窗口上的第一个文件作为输入
    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if let Some(path) = file.path {
            info!("File dropped: {}", path.display());
            self.state.dataset.input_path = path.display().to_string();
            LoadHandler::request_load_file(&mut self.state, path);
        } else if let Some(bytes) = file.bytes {
            info!("File dropped without path: {}", file.name);
            LoadHandler::request_load_bytes(&mut self.state, file.name, bytes);
        } else {
            warn!("Dropped file {} has neither path nor contents", file.name);
        }
    }
}
