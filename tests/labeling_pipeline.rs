use std::fs;
use std::path::PathBuf;

use motion_labeler::dataset::{export_to_path, load_from_path, load_from_reader, LoadError};
use motion_labeler::{classify, Axis, MotionClassifier, MotionLabel, SensorReading};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("motion-labeler-it-{}", std::process::id()))
        .join(name)
}

fn labels_of(csv: &str) -> Vec<MotionLabel> {
    load_from_reader(csv.as_bytes(), &MotionClassifier::default())
        .unwrap()
        .labels()
        .collect()
}

#[test]
fn csv_rows_are_labeled_in_input_order() {
    let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
               01/02/2024 10:00:00,0,0,0,0,0,0\n\
               01/02/2024 10:00:01,0,0,3.0,0,0,0\n\
               01/02/2024 10:00:02,3.0,0,0,0,0,0\n\
               01/02/2024 10:00:03,0.3,0,0,25,0,0\n\
               01/02/2024 10:00:04,0,0,-3.0,0,0,0\n\
               01/02/2024 10:00:05,1.0,1.0,1.0,5,5,5\n";
    assert_eq!(
        labels_of(csv),
        vec![
            MotionLabel::Still,
            MotionLabel::Throw,
            MotionLabel::Slide,
            MotionLabel::Tilt,
            MotionLabel::Drop,
            MotionLabel::Misc,
        ]
    );
}

#[test]
fn gyro_only_motion_below_still_threshold_stays_still() {
    let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
               01/02/2024 10:00:03,0,0,0,25,0,0\n";
    assert_eq!(labels_of(csv), vec![MotionLabel::Still]);
}

#[test]
fn boundary_and_priority_rows() {
    let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
               01/02/2024 10:00:00,0.2,0,0,0,0,0\n\
               01/02/2024 10:00:01,3.0,0,3.0,0,0,0\n\
               01/02/2024 10:00:02,0,0,2.0,0,0,0\n";
    assert_eq!(
        labels_of(csv),
        vec![MotionLabel::Misc, MotionLabel::Throw, MotionLabel::Misc]
    );
}

#[test]
fn file_round_trip_adds_label_column() {
    let input = temp_path("input.csv");
    let output = temp_path("out/labeled_output.csv");
    fs::create_dir_all(input.parent().unwrap()).unwrap();
    fs::write(
        &input,
        "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
         15/03/2024 08:00:00.000,0.01,0.02,0.03,0.1,0.1,0.1\n\
         15/03/2024 08:00:00.100,0.5,0.5,2.5,1,1,1\n",
    )
    .unwrap();

    let dataset = load_from_path(&input, &MotionClassifier::default()).unwrap();
    assert_eq!(export_to_path(&dataset, &output).unwrap(), 2);

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ,Label");
    assert_eq!(lines[1], "15/03/2024 08:00:00.000,0.01,0.02,0.03,0.1,0.1,0.1,Still");
    assert_eq!(lines[2], "15/03/2024 08:00:00.100,0.5,0.5,2.5,1,1,1,Throw (+Z)");

    let series = dataset.series(MotionLabel::Throw, Axis::AccZ);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].1, 2.5);

    let _ = fs::remove_dir_all(input.parent().unwrap());
}

#[test]
fn unparseable_timestamps_produce_no_labels() {
    let csv = "timestamp,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
               13/13/2024 10:00:00,0,0,0,0,0,0\n";
    let err = load_from_reader(csv.as_bytes(), &MotionClassifier::default()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidTimestamps { ref rows } if rows == &vec![1]));
    assert!(err
        .to_string()
        .starts_with("Error parsing timestamps. Check your timestamp format."));
}

#[test]
fn free_function_matches_default_classifier() {
    let ts = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let reading = SensorReading::new(ts, [0.0, 2.5, 0.0], [0.0, 0.0, 0.0]);
    assert_eq!(classify(&reading), MotionLabel::Slide);
    assert_eq!(MotionClassifier::default().classify(&reading), classify(&reading));
}
