use std::fmt;

use super::SensorReading;

/// Motion category assigned to a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MotionLabel {
    Still,
    Throw,
    Drop,
    Slide,
    Tilt,
    Misc,
}

impl MotionLabel {
    /// Tag written to the `Label` column
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionLabel::Still => "Still",
            MotionLabel::Throw => "Throw (+Z)",
            MotionLabel::Drop => "Drop (-Z)",
            MotionLabel::Slide => "Slide (±XY)",
            MotionLabel::Tilt => "Tilt",
            MotionLabel::Misc => "Misc",
        }
    }
}

impl fmt::Display for MotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reading paired with the label it was classified as
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledReading {
    pub reading: SensorReading,
    pub label: MotionLabel,
}

impl LabeledReading {
    pub fn new(reading: SensorReading, label: MotionLabel) -> Self {
        Self { reading, label }
    }
}
