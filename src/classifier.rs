use crate::types::{LabeledReading, MotionLabel, SensorReading};

pub const ACC_THRESHOLD_STILL: f64 = 0.2;
pub const ACC_THRESHOLD_SPIKE: f64 = 2.0;
pub const GYRO_THRESHOLD_TILT: f64 = 20.0;

/// Threshold set used by [`MotionClassifier`]. All comparisons against these
/// values are strict, so a reading sitting exactly on a threshold falls
/// through to the next rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub acc_still: f64,
    pub acc_spike: f64,
    pub gyro_tilt: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            acc_still: ACC_THRESHOLD_STILL,
            acc_spike: ACC_THRESHOLD_SPIKE,
            gyro_tilt: GYRO_THRESHOLD_TILT,
        }
    }
}

/// Stateless rule-based classifier.
///
/// Rules are checked in priority order and the first match wins:
///
/// 1. all accelerometer axes below `acc_still` -> `Still`
/// 2. `AccZ` above `acc_spike` -> `Throw (+Z)`
/// 3. `AccZ` below `-acc_spike` -> `Drop (-Z)`
/// 4. `AccX` or `AccY` magnitude above `acc_spike` -> `Slide (±XY)`
/// 5. any gyroscope axis magnitude above `gyro_tilt` -> `Tilt`
/// 6. otherwise `Misc`
///
/// Only the six sensor values are consulted; the timestamp and neighbouring
/// rows never affect the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionClassifier {
    thresholds: Thresholds,
}

impl MotionClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn classify(&self, reading: &SensorReading) -> MotionLabel {
        let t = &self.thresholds;
        let (ax, ay, az) = (reading.acc_x, reading.acc_y, reading.acc_z);
        let (gx, gy, gz) = (reading.gyro_x, reading.gyro_y, reading.gyro_z);

        if ax.abs() < t.acc_still && ay.abs() < t.acc_still && az.abs() < t.acc_still {
            return MotionLabel::Still;
        }
        if az > t.acc_spike {
            return MotionLabel::Throw;
        }
        if az < -t.acc_spike {
            return MotionLabel::Drop;
        }
        if ax.abs() > t.acc_spike || ay.abs() > t.acc_spike {
            return MotionLabel::Slide;
        }
        if gx.abs() > t.gyro_tilt || gy.abs() > t.gyro_tilt || gz.abs() > t.gyro_tilt {
            return MotionLabel::Tilt;
        }
        MotionLabel::Misc
    }

    pub fn label(&self, reading: SensorReading) -> LabeledReading {
        LabeledReading::new(reading, self.classify(&reading))
    }

    pub fn label_all<I>(&self, readings: I) -> Vec<LabeledReading>
    where
        I: IntoIterator<Item = SensorReading>,
    {
        readings.into_iter().map(|r| self.label(r)).collect()
    }
}

/// Classify with the default thresholds
pub fn classify(reading: &SensorReading) -> MotionLabel {
    MotionClassifier::default().classify(reading)
}
