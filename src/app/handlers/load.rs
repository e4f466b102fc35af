use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use crate::app::state::{AppState, StatusMessage};
use crate::types::DatasetTask;

pub struct LoadHandler;

impl LoadHandler {
    pub fn request_load_file(state: &mut AppState, path: PathBuf) {
        if path.as_os_str().is_empty() {
            state.status = StatusMessage::error("Enter the path of a CSV file first");
            return;
        }

        let (response_sender, response_receiver) = crossbeam_channel::bounded(1);
        let description = path.display().to_string();
        let task = DatasetTask::LoadFile { path, response_sender };

        match state.task_sender.try_send(task) {
            Ok(()) => {
                info!("Requested load of {}", description);
                state.dataset.is_loading = true;
                state.dataset.load_result_receiver = Some(response_receiver);
                state.status = StatusMessage::info(format!("Loading {}...", description));
            }
            Err(e) => {
                state.status = StatusMessage::error(format!("Failed to request load: {}", e));
            }
        }
    }

    /// 拖放的文件在某些平台上只有内容没有路径
    pub fn request_load_bytes(state: &mut AppState, name: String, bytes: Arc<[u8]>) {
        let (response_sender, response_receiver) = crossbeam_channel::bounded(1);
        let description = name.clone();
        let task = DatasetTask::LoadBytes { name, bytes, response_sender };

        match state.task_sender.try_send(task) {
            Ok(()) => {
                info!("Requested load of dropped file {}", description);
                state.dataset.is_loading = true;
                state.dataset.load_result_receiver = Some(response_receiver);
                state.status = StatusMessage::info(format!("Loading {}...", description));
            }
            Err(e) => {
                state.status = StatusMessage::error(format!("Failed to request load: {}", e));
            }
        }
    }
}
