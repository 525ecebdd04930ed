// Gateway module for utils - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod clipboard;
mod errors;
mod html;
mod logger;

// Public re-exports - the ONLY way to access utils functionality
pub use clipboard::copy_to_clipboard;
pub use errors::QuillError;
pub use html::html_to_text;
pub use logger::init_logger;
