use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use super::{ExportError, LabeledDataset};

pub const DEFAULT_EXPORT_FILE: &str = "labeled_output.csv";

/// Write the labeled table as CSV and return the number of data rows written
pub fn write_csv<W: Write>(dataset: &LabeledDataset, writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&dataset.output_headers())?;

    let mut rows = 0;
    for record in dataset.output_records() {
        csv_writer.write_record(&record)?;
        rows += 1;
    }
    csv_writer.flush()?;
    Ok(rows)
}

/// 导出到文件，必要时创建父目录
pub fn export_to_path<P: AsRef<Path>>(dataset: &LabeledDataset, path: P) -> Result<usize, ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let rows = write_csv(dataset, file)?;
    info!("Exported {} labeled rows to {}", rows, path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::MotionClassifier;
    use crate::dataset::load_from_reader;

    const INPUT: &str = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ,note\n\
                         01/02/2024 10:00:00,0,0,0,0,0,0,\"rest, on desk\"\n\
                         01/02/2024 10:00:01,1.50,0,-2.75,0,0,0,\n";

    #[test]
    fn export_preserves_cells_and_appends_label() {
        let dataset = load_from_reader(INPUT.as_bytes(), &MotionClassifier::default()).unwrap();
        let mut bytes = Vec::new();
        assert_eq!(write_csv(&dataset, &mut bytes).unwrap(), 2);
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ,note,Label");
        assert_eq!(lines[1], "01/02/2024 10:00:00,0,0,0,0,0,0,\"rest, on desk\",Still");
        assert_eq!(lines[2], "01/02/2024 10:00:01,1.50,0,-2.75,0,0,0,,Drop (-Z)");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn exported_file_can_be_loaded_again() {
        let dataset = load_from_reader(INPUT.as_bytes(), &MotionClassifier::default()).unwrap();
        let path = std::env::temp_dir()
            .join(format!("motion-labeler-export-{}", std::process::id()))
            .join("nested")
            .join(DEFAULT_EXPORT_FILE);

        let rows = export_to_path(&dataset, &path).unwrap();
        assert_eq!(rows, 2);

        let reloaded = crate::dataset::load_from_path(&path, &MotionClassifier::default()).unwrap();
        let labels: Vec<_> = reloaded.labels().collect();
        let original: Vec<_> = dataset.labels().collect();
        assert_eq!(labels, original);
        // Label 列已存在时应原地覆盖，而不是再追加一列
        assert_eq!(reloaded.output_headers().len(), dataset.output_headers().len());

        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }
}
