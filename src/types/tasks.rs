use std::path::PathBuf;
use std::sync::Arc;

use super::{ExportResult, LoadResult};
use crate::dataset::LabeledDataset;

/// Work items for the background dataset worker
#[derive(Clone)]
pub enum DatasetTask {
    LoadFile {
        path: PathBuf,
        response_sender: crossbeam_channel::Sender<LoadResult>,
    },
    /// 拖放进窗口的文件（可能只有内容没有路径）
    LoadBytes {
        name: String,
        bytes: Arc<[u8]>,
        response_sender: crossbeam_channel::Sender<LoadResult>,
    },
    Export {
        dataset: Arc<LabeledDataset>,
        path: PathBuf,
        response_sender: crossbeam_channel::Sender<ExportResult>,
    },
}

impl DatasetTask {
    pub fn kind(&self) -> &'static str {
        match self {
            DatasetTask::LoadFile { .. } => "load_file",
            DatasetTask::LoadBytes { .. } => "load_bytes",
            DatasetTask::Export { .. } => "export",
        }
    }
}
