use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{info, warn};

use super::timestamp::parse_timestamp;
use super::{LabeledDataset, LoadError};
use crate::classifier::MotionClassifier;
use crate::types::{SensorReading, LABEL_COLUMN, REQUIRED_COLUMNS, TIMESTAMP_COLUMN};

/// Positions of the columns we need inside the header row
struct ColumnIndex {
    timestamp: usize,
    values: [usize; 6],
    label: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name)
        };
        let require = |name: &str| {
            position(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        let timestamp = require(TIMESTAMP_COLUMN)?;
        let mut values = [0usize; 6];
        for (slot, name) in values.iter_mut().zip(REQUIRED_COLUMNS[1..].iter().copied()) {
            *slot = require(name)?;
        }

        Ok(Self {
            timestamp,
            values,
            label: position(LABEL_COLUMN),
        })
    }
}

pub fn load_from_path<P: AsRef<Path>>(
    path: P,
    classifier: &MotionClassifier,
) -> Result<LabeledDataset, LoadError> {
    let path = path.as_ref();
    info!("Loading sensor CSV from {}", path.display());
    let file = File::open(path)?;
    load_from_reader(file, classifier)
}

/// Read, validate and label a CSV stream.
///
/// Every timestamp is checked before any row is labeled; if one or more fail
/// to parse the whole load is rejected with the offending (1-based) data row
/// numbers. Numeric cells are validated next, then each row is classified.
pub fn load_from_reader<R: Read>(
    reader: R,
    classifier: &MotionClassifier,
) -> Result<LabeledDataset, LoadError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let records: Vec<StringRecord> = csv_reader.records().collect::<Result<_, _>>()?;

    let mut timestamps = Vec::with_capacity(records.len());
    let mut bad_rows = Vec::new();
    for (i, record) in records.iter().enumerate() {
        match record.get(columns.timestamp).and_then(parse_timestamp) {
            Some(ts) => timestamps.push(ts),
            None => bad_rows.push(i + 1),
        }
    }
    if !bad_rows.is_empty() {
        warn!("{} of {} timestamps failed to parse", bad_rows.len(), records.len());
        return Err(LoadError::InvalidTimestamps { rows: bad_rows });
    }

    let mut readings = Vec::with_capacity(records.len());
    for (i, (record, timestamp)) in records.iter().zip(timestamps).enumerate() {
        let mut values = [0.0f64; 6];
        for (slot, (&column, name)) in values
            .iter_mut()
            .zip(columns.values.iter().zip(&REQUIRED_COLUMNS[1..]))
        {
            let raw = record.get(column).unwrap_or("");
            *slot = raw.trim().parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                row: i + 1,
                column: name.to_string(),
                value: raw.to_string(),
            })?;
        }
        readings.push(SensorReading::new(
            timestamp,
            [values[0], values[1], values[2]],
            [values[3], values[4], values[5]],
        ));
    }

    let rows = classifier.label_all(readings);
    info!("Motion classification applied to {} rows", rows.len());

    Ok(LabeledDataset::from_parts(headers, records, rows, columns.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MotionLabel;

    fn load(csv: &str) -> Result<LabeledDataset, LoadError> {
        load_from_reader(csv.as_bytes(), &MotionClassifier::default())
    }

    #[test]
    fn loads_and_labels_rows_in_order() {
        let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
                   01/02/2024 10:00:00,0,0,0,0,0,0\n\
                   01/02/2024 10:00:01,0,0,3.0,0,0,0\n\
                   01/02/2024 10:00:02,3.0,0,0,0,0,0\n\
                   01/02/2024 10:00:03,0.5,0,0,25,0,0\n";
        let dataset = load(csv).unwrap();
        let labels: Vec<MotionLabel> = dataset.labels().collect();
        assert_eq!(
            labels,
            vec![
                MotionLabel::Still,
                MotionLabel::Throw,
                MotionLabel::Slide,
                MotionLabel::Tilt,
            ]
        );
    }

    #[test]
    fn column_order_and_extra_columns_are_kept() {
        let csv = "device,GyroZ,GyroY,GyroX,AccZ,AccY,AccX,timestamp\n\
                   imu-1,0,0,0,-3,0,0,2024-02-01 10:00:00\n";
        let dataset = load(csv).unwrap();
        assert_eq!(dataset.rows()[0].label, MotionLabel::Drop);
        let out = dataset.output_record(0).unwrap();
        assert_eq!(out.get(0), Some("imu-1"));
        assert_eq!(out.get(8), Some("Drop (-Z)"));
    }

    #[test]
    fn existing_label_column_is_overwritten_in_place() {
        let csv = "timestamp,Label,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
                   01/02/2024 10:00:00,stale,0,0,0,0,0,0\n";
        let dataset = load(csv).unwrap();
        assert_eq!(dataset.output_headers().len(), 8);
        assert_eq!(dataset.output_record(0).unwrap().get(1), Some("Still"));
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY\n01/02/2024 10:00:00,0,0,0,0,0\n";
        match load(csv) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "GyroZ"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let csv = "timestamp,accx,AccY,AccZ,GyroX,GyroY,GyroZ\n01/02/2024 10:00:00,0,0,0,0,0,0\n";
        assert!(matches!(load(csv), Err(LoadError::MissingColumn(name)) if name == "AccX"));
    }

    #[test]
    fn bad_timestamps_abort_the_whole_load() {
        let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
                   01/02/2024 10:00:00,0,0,0,0,0,0\n\
                   yesterday,0,0,0,0,0,0\n\
                   01/02/2024 10:00:02,0,0,0,0,0,0\n\
                   ,0,0,0,0,0,0\n";
        match load(csv) {
            Err(LoadError::InvalidTimestamps { rows }) => assert_eq!(rows, vec![2, 4]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn two_digit_year_cells_load_as_current_century() {
        use chrono::Datelike;

        let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
                   01/02/24 10:00:00,0,0,0,0,0,0\n";
        let dataset = load(csv).unwrap();
        let ts = dataset.rows()[0].reading.timestamp;
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 2, 1));
        // 原始单元格保持不变
        assert_eq!(dataset.output_record(0).unwrap().get(0), Some("01/02/24 10:00:00"));
    }

    #[test]
    fn timestamps_are_checked_before_numbers() {
        let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
                   01/02/2024 10:00:00,abc,0,0,0,0,0\n\
                   bogus,0,0,0,0,0,0\n";
        assert!(matches!(load(csv), Err(LoadError::InvalidTimestamps { .. })));
    }

    #[test]
    fn malformed_number_is_reported_with_position() {
        let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
                   01/02/2024 10:00:00,0,0,0,0,0,0\n\
                   01/02/2024 10:00:01,0,0,0,0,fast,0\n";
        match load(csv) {
            Err(LoadError::InvalidNumber { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "GyroY");
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn ragged_rows_are_a_csv_error() {
        let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n01/02/2024 10:00:00,0,0\n";
        assert!(matches!(load(csv), Err(LoadError::Csv(_))));
    }

    #[test]
    fn header_only_file_gives_empty_dataset() {
        let dataset = load("timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n").unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.distinct_labels().is_empty());
    }

    #[test]
    fn padded_cells_are_parsed_but_kept_verbatim() {
        let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
                   01/02/2024 10:00:00, 0.1 ,0,0,0,0,0\n";
        let dataset = load(csv).unwrap();
        assert_eq!(dataset.rows()[0].label, MotionLabel::Still);
        assert_eq!(dataset.output_record(0).unwrap().get(1), Some(" 0.1 "));
    }
}
