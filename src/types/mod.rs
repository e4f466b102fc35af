pub mod reading;
pub mod label;
pub mod results;
pub mod tasks;

pub use reading::{Axis, SensorReading, LABEL_COLUMN, REQUIRED_COLUMNS, TIMESTAMP_COLUMN};
pub use label::{LabeledReading, MotionLabel};
pub use results::{ExportResult, LoadResult};
pub use tasks::DatasetTask;
