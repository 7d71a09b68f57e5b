//! Update routing engine.
//!
//! Actions are registered with a [`RuleDeclaration`]; the [`Router`]
//! classifies each update through the [`PluginRegistry`] and hands back the
//! most specific matching action.
//!
//! ```rust,ignore
//! let plugins = PluginRegistry::with_defaults("MyBot")?;
//! let router = Router::build(plugins, vec![
//!     ActionRegistration::new("start", start).rule(RuleDeclaration::command("/start")),
//!     ActionRegistration::new("echo", echo).rule(TextRule::new()),
//! ])?;
//!
//! let action = router.resolve(&update)?;
//! ```

pub mod category;
pub mod error;
pub mod plugin;
pub mod plugins;
pub mod registry;
pub mod router;
pub mod rule;
pub mod update;

pub use category::Category;
pub use error::{DispatchError, RoutingError};
pub use plugin::{PluginBundle, PluginRegistry, RuleComparator, RuleMatcher, UpdateClassifier};
pub use plugins::{CallbackPlugin, CommandPlugin, TextPlugin};
pub use registry::{ActionRegistration, HandlerGroups, RegisteredAction};
pub use router::Router;
pub use rule::{CallbackRule, CommandRule, RuleDeclaration, TextRule};
pub use update::UpdateView;
