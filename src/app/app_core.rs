use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::Sender;
use eframe::{egui, Frame};
use log::info;

use crate::config::ConfigManager;
use crate::types::DatasetTask;
use super::handlers::LoadHandler;
use super::state::AppState;

pub struct MotionLabelerApp {
    // 统一的状态管理
    pub state: AppState,

    // 配置管理
    pub config: ConfigManager,
}

impl MotionLabelerApp {
    pub fn new(
        task_sender: Sender<DatasetTask>,
        config: ConfigManager,
        initial_input: Option<PathBuf>,
    ) -> Self {
        let state = AppState::new(task_sender, config.get_config());
        let mut app = MotionLabelerApp { state, config };

        // 命令行指定了输入文件时直接加载
        if let Some(path) = initial_input {
            app.state.dataset.input_path = path.display().to_string();
            LoadHandler::request_load_file(&mut app.state, path);
        }

        info!("Viewer started");
        app
    }
}

impl eframe::App for MotionLabelerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.set_visuals(egui::Visuals::light());

        // 渲染UI组件
        crate::app::ui::render_status_bar(self, ctx);
        crate::app::ui::render_bottom_status_bar(self, ctx);
        crate::app::ui::render_main_panel(self, ctx);
        crate::app::ui::render_export_dialog(self, ctx);

        // 处理后台任务结果与拖放文件
        self.handle_load_results();
        self.handle_export_results();
        self.handle_dropped_files(ctx);

        if self.state.has_pending_tasks() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
