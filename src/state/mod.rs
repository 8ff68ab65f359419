//! Application state module

mod app_state;
mod content;
mod content_loader;
mod forms;
mod notifications;

pub use app_state::*;
pub use content::*;
pub use content_loader::*;
pub use forms::*;
pub use notifications::*;
