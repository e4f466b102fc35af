use chrono::NaiveDateTime;
use std::fmt;

pub const TIMESTAMP_COLUMN: &str = "timestamp";
pub const LABEL_COLUMN: &str = "Label";

/// 输入CSV必须包含的列（区分大小写）
pub const REQUIRED_COLUMNS: [&str; 7] = [
    TIMESTAMP_COLUMN,
    "AccX",
    "AccY",
    "AccZ",
    "GyroX",
    "GyroY",
    "GyroZ",
];

/// One row of inertial sensor data: a timestamp plus three accelerometer
/// and three gyroscope axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub timestamp: NaiveDateTime,
    pub acc_x: f64,
    pub acc_y: f64,
    pub acc_z: f64,
    pub gyro_x: f64,
    pub gyro_y: f64,
    pub gyro_z: f64,
}

impl SensorReading {
    pub fn new(timestamp: NaiveDateTime, acc: [f64; 3], gyro: [f64; 3]) -> Self {
        Self {
            timestamp,
            acc_x: acc[0],
            acc_y: acc[1],
            acc_z: acc[2],
            gyro_x: gyro[0],
            gyro_y: gyro[1],
            gyro_z: gyro[2],
        }
    }

    pub fn axis_value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::AccX => self.acc_x,
            Axis::AccY => self.acc_y,
            Axis::AccZ => self.acc_z,
        }
    }
}

/// Accelerometer axis that can be charted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    AccX,
    AccY,
    AccZ,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::AccX, Axis::AccY, Axis::AccZ];

    pub fn column_name(&self) -> &'static str {
        match self {
            Axis::AccX => "AccX",
            Axis::AccY => "AccY",
            Axis::AccZ => "AccZ",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn axis_value_picks_matching_accelerometer_field() {
        let reading = SensorReading::new(ts(), [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
        assert_eq!(reading.axis_value(Axis::AccX), 1.0);
        assert_eq!(reading.axis_value(Axis::AccY), 2.0);
        assert_eq!(reading.axis_value(Axis::AccZ), 3.0);
    }

    #[test]
    fn axis_names_match_csv_columns() {
        for axis in Axis::ALL {
            assert!(REQUIRED_COLUMNS.contains(&axis.column_name()));
        }
        assert_eq!(Axis::AccZ.to_string(), "AccZ");
    }
}
