mod app;
pub mod theme;

pub use app::TimeToolsApp;
