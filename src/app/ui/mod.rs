pub mod status_bar;
pub mod export_dialog;
pub mod main_panel;
pub mod chart_panel;

pub use status_bar::{render_bottom_status_bar, render_status_bar};
pub use export_dialog::render_export_dialog;
pub use main_panel::render_main_panel;
