use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use clap::Parser;
use crossbeam_channel::bounded;
use dotenv::dotenv;
use eframe::egui;
use log::{error, info, warn};

use motion_labeler::app::MotionLabelerApp;
use motion_labeler::classifier::MotionClassifier;
use motion_labeler::config::ConfigManager;
use motion_labeler::dataset::run_dataset_handler;
use motion_labeler::{logger, run_headless};

/// Label inertial sensor readings by motion type and chart them
#[derive(Parser, Debug)]
#[command(name = "motion-labeler", version, about)]
struct Cli {
    /// CSV with columns timestamp, AccX, AccY, AccZ, GyroX, GyroY, GyroZ
    input: Option<PathBuf>,

    /// Configuration file (TOML). Falls back to $MOTION_LABELER_CONFIG
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the labeled CSV here and exit without opening a window
    #[arg(short, long, requires = "input")]
    output: Option<PathBuf>,
}

fn main() {
    dotenv().ok(); // 加载 .env 文件
    logger::init_logger();

    let cli = Cli::parse();
    let config = ConfigManager::resolve(cli.config);

    if let Some(output) = cli.output {
        let Some(input) = cli.input else {
            error!("--output requires an input file");
            std::process::exit(2);
        };
        if let Err(e) = run_headless(&input, &output, &MotionClassifier::default()) {
            error!("Labeling failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_viewer(config, cli.input) {
        error!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

fn run_viewer(config: ConfigManager, input: Option<PathBuf>) -> Result<(), eframe::Error> {
    info!("Application starting");

    let capacity = config.get_config().channels.task_channel_capacity;
    let (task_sender, task_receiver) = bounded(capacity);
    let shutdown_signal = Arc::new(AtomicBool::new(false));

    let worker_shutdown = Arc::clone(&shutdown_signal);
    let worker_handle = thread::spawn(move || {
        run_dataset_handler(task_receiver, MotionClassifier::default(), worker_shutdown)
    });

    let window = config.get_config().window.clone();
    let options = eframe::NativeOptions {
        vsync: window.vsync,
        hardware_acceleration: if window.hardware_acceleration {
            eframe::HardwareAcceleration::Preferred
        } else {
            eframe::HardwareAcceleration::Off
        },
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.width, window.height])
            .with_resizable(window.resizable)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let result = eframe::run_native(
        &window.title,
        options,
        Box::new(move |_cc| Ok(Box::new(MotionLabelerApp::new(task_sender, config, input)))),
    );

    // GUI 关闭后通知工作线程退出
    info!("GUI closed, signaling dataset worker to shut down");
    shutdown_signal.store(true, Ordering::Relaxed);
    match worker_handle.join() {
        Ok(()) => info!("Dataset worker shut down gracefully"),
        Err(e) => warn!("Dataset worker panicked: {:?}", e),
    }

    result
}
