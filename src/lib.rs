//! Motion labeling for inertial sensor CSV logs.
//!
//! Each row of accelerometer/gyroscope readings is assigned one motion
//! category by a fixed, ordered set of threshold rules ([`classifier`]).
//! The [`dataset`] module loads and exports labeled tables, and [`app`]
//! provides an egui viewer for charting a label/axis selection; [`headless`]
//! runs the same pipeline without a window.

pub mod app;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod headless;
pub mod logger;
pub mod plotter;
pub mod types;

pub use classifier::{classify, MotionClassifier, Thresholds};
pub use dataset::LabeledDataset;
pub use headless::{run_headless, HeadlessError};
pub use types::{Axis, LabeledReading, MotionLabel, SensorReading};
