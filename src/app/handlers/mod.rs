pub mod load;
pub mod export;

pub use load::LoadHandler;
pub use export::ExportHandler;
