pub mod error;
pub mod export;
pub mod handlers;
pub mod loader;
pub mod timestamp;

pub use error::{ExportError, LoadError};
pub use export::{export_to_path, write_csv};
pub use handlers::run_dataset_handler;
pub use loader::{load_from_path, load_from_reader};

use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::classifier::MotionClassifier;
use crate::types::{Axis, LabeledReading, MotionLabel, SensorReading, LABEL_COLUMN, REQUIRED_COLUMNS};

/// A loaded table together with one label per row.
///
/// The original cells are kept verbatim so that export reproduces the input
/// exactly, with the `Label` column added (or overwritten in place when the
/// input already had one).
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    headers: StringRecord,
    records: Vec<StringRecord>,
    rows: Vec<LabeledReading>,
    label_column: Option<usize>,
}

impl LabeledDataset {
    pub(crate) fn from_parts(
        headers: StringRecord,
        records: Vec<StringRecord>,
        rows: Vec<LabeledReading>,
        label_column: Option<usize>,
    ) -> Self {
        debug_assert_eq!(records.len(), rows.len());
        Self {
            headers,
            records,
            rows,
            label_column,
        }
    }

    /// Build a dataset from readings that did not come from a CSV file
    pub fn from_readings(readings: Vec<SensorReading>, classifier: &MotionClassifier) -> Self {
        let headers: StringRecord = REQUIRED_COLUMNS.iter().copied().collect();
        let records = readings
            .iter()
            .map(|r| {
                let cells = [
                    timestamp::format_timestamp(&r.timestamp),
                    r.acc_x.to_string(),
                    r.acc_y.to_string(),
                    r.acc_z.to_string(),
                    r.gyro_x.to_string(),
                    r.gyro_y.to_string(),
                    r.gyro_z.to_string(),
                ];
                cells.iter().map(String::as_str).collect::<StringRecord>()
            })
            .collect();
        let rows = classifier.label_all(readings);
        Self::from_parts(headers, records, rows, None)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[LabeledReading] {
        &self.rows
    }

    pub fn labels(&self) -> impl Iterator<Item = MotionLabel> + '_ {
        self.rows.iter().map(|r| r.label)
    }

    /// Labels present in the data, in order of first appearance
    pub fn distinct_labels(&self) -> Vec<MotionLabel> {
        let mut seen = Vec::new();
        for label in self.labels() {
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
        seen
    }

    pub fn label_counts(&self) -> Vec<(MotionLabel, usize)> {
        let mut counts: Vec<(MotionLabel, usize)> = Vec::new();
        for label in self.labels() {
            match counts.iter_mut().find(|(l, _)| *l == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label, 1)),
            }
        }
        counts
    }

    pub fn filter_by_label(&self, label: MotionLabel) -> impl Iterator<Item = &LabeledReading> + '_ {
        self.rows.iter().filter(move |r| r.label == label)
    }

    /// Time-ordered values of `axis` for rows carrying `label`.
    /// Rows with equal timestamps keep their input order.
    pub fn series(&self, label: MotionLabel, axis: Axis) -> Vec<(NaiveDateTime, f64)> {
        let mut points: Vec<(NaiveDateTime, f64)> = self
            .filter_by_label(label)
            .map(|r| (r.reading.timestamp, r.reading.axis_value(axis)))
            .collect();
        points.sort_by_key(|(ts, _)| *ts);
        points
    }

    pub fn output_headers(&self) -> StringRecord {
        let mut headers = self.headers.clone();
        if self.label_column.is_none() {
            headers.push_field(LABEL_COLUMN);
        }
        headers
    }

    pub fn output_record(&self, index: usize) -> Option<StringRecord> {
        let record = self.records.get(index)?;
        let label = self.rows.get(index)?.label.as_str();
        let mut out: StringRecord = match self.label_column {
            Some(column) => record
                .iter()
                .enumerate()
                .map(|(i, cell)| if i == column { label } else { cell })
                .collect(),
            None => record.clone(),
        };
        if self.label_column.is_none() {
            out.push_field(label);
        }
        Some(out)
    }

    pub fn output_records(&self) -> impl Iterator<Item = StringRecord> + '_ {
        (0..self.records.len()).filter_map(move |i| self.output_record(i))
    }
}
