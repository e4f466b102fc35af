use std::path::PathBuf;

use crate::app::state::AppState;
use crate::types::DatasetTask;

pub struct ExportHandler;

impl ExportHandler {
    pub fn export_labeled_csv(state: &mut AppState) {
        let Some(dataset) = state.current_dataset() else {
            state.export.export_status = "Nothing to export: load a CSV file first".to_string();
            return;
        };

        let path = state.export.export_path.trim();
        if path.is_empty() {
            state.export.export_status = "Please enter an output file name".to_string();
            return;
        }

        let (response_sender, response_receiver) = crossbeam_channel::bounded(1);
        let task = DatasetTask::Export {
            dataset,
            path: PathBuf::from(path),
            response_sender,
        };

        match state.task_sender.try_send(task) {
            Ok(()) => {
                state.export.export_status = "Exporting labeled CSV...".to_string();
                state.export.export_result_receiver = Some(response_receiver);
            }
            Err(e) => {
                state.export.export_status = format!("Failed to start export: {}", e);
            }
        }
    }
}
