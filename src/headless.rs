//! 无界面模式：加载、标注、导出，不打开窗口

use std::path::Path;

use log::info;

use crate::classifier::MotionClassifier;
use crate::dataset::{self, ExportError, LoadError};

#[derive(Debug, thiserror::Error)]
pub enum HeadlessError {
    #[error("Failed to load {path}: {source}")]
    Load { path: String, source: LoadError },
    #[error("Failed to export {path}: {source}")]
    Export { path: String, source: ExportError },
}

/// Label `input` and write the result to `output`.
///
/// Returns the number of rows written. Nothing is written when the input
/// fails to load.
pub fn run_headless(
    input: &Path,
    output: &Path,
    classifier: &MotionClassifier,
) -> Result<usize, HeadlessError> {
    let labeled = dataset::load_from_path(input, classifier).map_err(|source| HeadlessError::Load {
        path: input.display().to_string(),
        source,
    })?;

    for (label, count) in labeled.label_counts() {
        info!("{:<12} {}", label, count);
    }

    let rows = dataset::export_to_path(&labeled, output).map_err(|source| HeadlessError::Export {
        path: output.display().to_string(),
        source,
    })?;
    info!("Wrote {} rows to {}", rows, output.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("motion-labeler-headless-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn labels_and_writes_output() {
        let dir = scratch_dir("ok");
        let input = dir.join("in.csv");
        let output = dir.join("out.csv");
        fs::write(
            &input,
            "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n01/02/2024 10:00:00,0,0,-3,0,0,0\n",
        )
        .unwrap();

        let rows = run_headless(&input, &output, &MotionClassifier::default()).unwrap();
        assert_eq!(rows, 1);
        let text = fs::read_to_string(&output).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(",Drop (-Z)"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_failure_writes_nothing() {
        let dir = scratch_dir("bad");
        let input = dir.join("in.csv");
        let output = dir.join("out.csv");
        fs::write(&input, "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\nnever,0,0,0,0,0,0\n").unwrap();

        let err = run_headless(&input, &output, &MotionClassifier::default()).unwrap_err();
        assert!(matches!(
            err,
            HeadlessError::Load { source: LoadError::InvalidTimestamps { .. }, .. }
        ));
        assert!(!output.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
