//! UI screens.

mod app;
mod panels;
mod tabs;

pub use app::App;
pub use tabs::Tab;
