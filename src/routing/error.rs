//! Routing error types.

use thiserror::Error;

use super::category::Category;

/// Configuration defects detected while building the routing table.
///
/// All of these are fatal: the bot must not start with a partial table.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// An action was registered without a rule.
    #[error("action '{action}' has no rule declaration")]
    MissingRuleDeclaration { action: String },

    /// An action was given more than one rule.
    #[error("action '{action}' declares more than one rule")]
    ConflictingRuleDeclarations { action: String },

    /// Actions exist for a category that has no plugin.
    #[error("no matcher registered for category '{0}'")]
    NoMatcherForCategory(Category),

    /// A text rule carries a regex that does not compile.
    #[error("action '{action}' has an invalid pattern: {source}")]
    InvalidPattern {
        action: String,
        #[source]
        source: regex::Error,
    },

    /// A plugin was registered twice for the same category.
    #[error("a plugin is already registered for category '{0}'")]
    DuplicatePlugin(Category),

    /// A plugin was registered for a category missing from the precedence list.
    #[error("category '{0}' is not part of the classification precedence")]
    UnrankedCategory(Category),
}

/// Per-update outcomes where nothing will handle the update.
///
/// These are expected at runtime and never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No classifier recognised the update.
    #[error("unknown update type")]
    UnknownUpdateType,

    /// The update was classified but no action's rule matched it.
    #[error("no action found for {category} update")]
    NoActionFound { category: Category },
}
