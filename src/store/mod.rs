// Gateway module for store - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod export;
mod settings;
mod workspace;

// Public re-exports - the ONLY way to access store functionality
pub use export::export_essay;
pub use settings::{Settings, SettingsStore};
pub use workspace::{Workspace, WorkspaceStore};
