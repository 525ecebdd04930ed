// Gateway module for tui - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod app;
mod form;
mod html;
mod render;
mod tab;
mod theme;
mod ui;
mod widgets;

// Public re-exports - the ONLY way to access tui functionality
pub use app::{App, Command, Region, Toast, ToastKind};
pub use form::Form;
pub use tab::Tab;
pub use theme::Theme;
pub use ui::run_ui;
