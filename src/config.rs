//! 应用配置管理模块
//! 集中管理窗口、绘图、预览与导出配置。分类阈值是固定常量，不在此处配置。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dataset::export::DEFAULT_EXPORT_FILE;

pub const CONFIG_ENV_VAR: &str = "MOTION_LABELER_CONFIG";

/// 主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub plot: PlotConfig,
    pub preview: PreviewConfig,
    pub export: ExportConfig,
    pub channels: ChannelConfig,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
    pub vsync: bool,
    pub hardware_acceleration: bool,
}

/// How the label/axis selection is presented next to the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartControls {
    /// Two selectors above the chart
    #[default]
    Native,
    /// Drop-down menus embedded in the chart frame
    ChartMenu,
}

/// 绘图配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub plot_height: f32,
    pub line_width: f32,
    pub show_legend: bool,
    pub allow_drag: bool,
    pub allow_zoom: bool,
    pub controls: ChartControls,
    pub colors: PlotColors,
}

/// 绘图颜色配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotColors {
    pub acc_x: [u8; 3],
    pub acc_y: [u8; 3],
    pub acc_z: [u8; 3],
}

/// 数据预览配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub rows: usize,
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub default_path: String,
}

/// 通道配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub task_channel_capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 800.0,
            title: "Motion Classification and Visualization".to_string(),
            resizable: true,
            vsync: true,
            hardware_acceleration: true,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            plot_height: 400.0,
            line_width: 1.5,
            show_legend: true,
            allow_drag: true,
            allow_zoom: true,
            controls: ChartControls::Native,
            colors: PlotColors::default(),
        }
    }
}

impl Default for PlotColors {
    fn default() -> Self {
        Self {
            acc_x: [255, 0, 0],    // 红色
            acc_y: [0, 160, 0],    // 绿色
            acc_z: [0, 0, 255],    // 蓝色
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { rows: 20 }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_path: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            task_channel_capacity: 16,
        }
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, content).map_err(ConfigError::IoError)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::ValidationError("Window dimensions must be positive".to_string()));
        }

        if self.plot.plot_height <= 0.0 {
            return Err(ConfigError::ValidationError("Plot height must be positive".to_string()));
        }

        if self.plot.line_width <= 0.0 {
            return Err(ConfigError::ValidationError("Line width must be positive".to_string()));
        }

        if self.export.default_path.trim().is_empty() {
            return Err(ConfigError::ValidationError("Default export path must not be empty".to_string()));
        }

        if self.channels.task_channel_capacity == 0 {
            return Err(ConfigError::ValidationError("Task channel capacity must be positive".to_string()));
        }

        Ok(())
    }

    pub fn default_export_path(&self) -> PathBuf {
        PathBuf::from(&self.export.default_path)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(toml::ser::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 配置管理器
#[derive(Debug)]
pub struct ConfigManager {
    config: AppConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 创建配置管理器
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            config_path: None,
        }
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = AppConfig::load_from_file(&path)?;
        Ok(Self {
            config,
            config_path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// 依次尝试显式路径、环境变量，否则使用默认配置。
    /// 配置文件无效时记录警告并回退到默认值。
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let path = explicit.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
        match path {
            Some(path) => match Self::load_from_file(&path) {
                Ok(manager) => {
                    log::info!("Loaded configuration from {}", path.display());
                    manager
                }
                Err(e) => {
                    log::warn!("Ignoring configuration {}: {}", path.display(), e);
                    Self::new()
                }
            },
            None => Self::new(),
        }
    }

    /// 获取当前配置
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取可变配置
    pub fn get_config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// 保存配置
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.config_path {
            self.config.save_to_file(path)?;
        }
        Ok(())
    }

    /// 保存配置到指定文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        self.config.save_to_file(path)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
