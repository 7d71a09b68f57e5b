//! Update categories.

use std::fmt;

/// Classification bucket shared by updates and the actions that handle them.
///
/// A category is the join key between a plugin's classifier, comparator and
/// matcher, and the per-category handler groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// A message starting with a bot command (`/start`).
    Command,
    /// An inline keyboard button press.
    Callback,
    /// Any other text message.
    Text,
}

impl Category {
    /// Classification order used when none is configured.
    ///
    /// A command message is also a text message, so commands come first.
    pub const DEFAULT_PRECEDENCE: [Category; 3] =
        [Category::Command, Category::Callback, Category::Text];

    /// Lowercase name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Command => "command",
            Category::Callback => "callback",
            Category::Text => "text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
