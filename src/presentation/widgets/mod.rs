mod file_explorer;
mod footer_bar;
mod header_bar;
mod output_view;
mod selector;
mod slider;
mod status_bar;

pub use file_explorer::{FileExplorerAction, FileExplorerComponent};
pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use output_view::OutputView;
pub use selector::Selector;
pub use slider::HeatSlider;
pub use status_bar::{StatusBar, StatusLevel};
