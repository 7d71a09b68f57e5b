//! Built-in update-type plugins.

mod callback;
mod command;
mod text;

pub use callback::CallbackPlugin;
pub use command::CommandPlugin;
pub use text::TextPlugin;
