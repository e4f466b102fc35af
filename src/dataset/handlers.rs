use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{error, info, warn};

use super::{export_to_path, load_from_path, load_from_reader};
use crate::classifier::MotionClassifier;
use crate::types::{DatasetTask, ExportResult, LoadResult};

/// Background worker: file I/O and labeling run here so the UI thread never
/// blocks. Exits when the shutdown flag is raised or every sender is gone.
pub fn run_dataset_handler(
    task_receiver: Receiver<DatasetTask>,
    classifier: MotionClassifier,
    shutdown_signal: Arc<AtomicBool>,
) {
    info!("Dataset handler thread started");

    while !shutdown_signal.load(Ordering::Relaxed) {
        match task_receiver.recv_timeout(Duration::from_millis(100)) {
            Ok(task) => handle_task(task, &classifier),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                info!("Dataset task channel disconnected, exiting");
                break;
            }
        }
    }

    info!("Dataset handler thread stopped");
}

pub fn handle_task(task: DatasetTask, classifier: &MotionClassifier) {
    let kind = task.kind();
    match task {
        DatasetTask::LoadFile { path, response_sender } => {
            let outcome = load_from_path(&path, classifier);
            if let Err(e) = &outcome {
                error!("Failed to load {}: {}", path.display(), e);
            }
            let result = LoadResult::new(path.display().to_string(), outcome);
            if let Err(e) = response_sender.try_send(result) {
                warn!("Dataset handler: failed to send {} result: {}", kind, e);
            }
        }
        DatasetTask::LoadBytes { name, bytes, response_sender } => {
            let outcome = load_from_reader(&bytes[..], classifier);
            if let Err(e) = &outcome {
                error!("Failed to load dropped file {}: {}", name, e);
            }
            if let Err(e) = response_sender.try_send(LoadResult::new(name, outcome)) {
                warn!("Dataset handler: failed to send {} result: {}", kind, e);
            }
        }
        DatasetTask::Export { dataset, path, response_sender } => {
            let result = match export_to_path(&dataset, &path) {
                Ok(rows) => ExportResult::success(path, rows),
                Err(e) => {
                    error!("Export to {} failed: {}", path.display(), e);
                    ExportResult::error(path, e.to_string())
                }
            };
            if let Err(e) = response_sender.try_send(result) {
                warn!("Dataset handler: failed to send {} result: {}", kind, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MotionLabel;
    use crossbeam_channel::bounded;
    use std::thread;

    const CSV: &str = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
                       01/02/2024 10:00:00,0,0,3.0,0,0,0\n";

    #[test]
    fn load_bytes_task_replies_with_labeled_dataset() {
        let (response_sender, response_receiver) = bounded(1);
        let task = DatasetTask::LoadBytes {
            name: "dropped.csv".to_string(),
            bytes: Arc::from(CSV.as_bytes()),
            response_sender,
        };
        handle_task(task, &MotionClassifier::default());

        let result = response_receiver.try_recv().unwrap();
        assert_eq!(result.source, "dropped.csv");
        let dataset = result.outcome.unwrap();
        assert_eq!(dataset.rows()[0].label, MotionLabel::Throw);
    }

    #[test]
    fn missing_file_is_reported_not_panicked() {
        let (response_sender, response_receiver) = bounded(1);
        let task = DatasetTask::LoadFile {
            path: std::env::temp_dir().join("motion-labeler-does-not-exist.csv"),
            response_sender,
        };
        handle_task(task, &MotionClassifier::default());

        let result = response_receiver.try_recv().unwrap();
        assert!(!result.is_success());
    }

    #[test]
    fn worker_exits_when_senders_are_dropped() {
        let (task_sender, task_receiver) = bounded::<DatasetTask>(4);
        let shutdown = Arc::new(AtomicBool::new(false));
        let worker_shutdown = Arc::clone(&shutdown);
        let handle = thread::spawn(move || {
            run_dataset_handler(task_receiver, MotionClassifier::default(), worker_shutdown)
        });

        let (response_sender, response_receiver) = bounded(1);
        task_sender
            .send(DatasetTask::LoadBytes {
                name: "inline".to_string(),
                bytes: Arc::from(CSV.as_bytes()),
                response_sender,
            })
            .unwrap();
        let result = response_receiver
            .recv_timeout(Duration::from_secs(5))
            .unwrap();
        assert!(result.is_success());

        drop(task_sender);
        handle.join().unwrap();
    }
}
