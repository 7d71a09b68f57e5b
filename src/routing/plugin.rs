//! Update-type plugins.
//!
//! A plugin teaches the router one [`Category`]: how to recognise updates of
//! that category, how to rank competing rules, and how to test a rule against
//! an update. Adding a category means registering one more [`PluginBundle`];
//! the router itself never changes.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::category::Category;
use super::error::{DispatchError, RoutingError};
use super::plugins::{CallbackPlugin, CommandPlugin, TextPlugin};
use super::rule::RuleDeclaration;
use super::update::UpdateView;

/// Decides whether an update belongs to a category.
pub trait UpdateClassifier: Send + Sync {
    fn is_category(&self, update: &dyn UpdateView) -> bool;
}

/// Ranks two rules of the same category.
///
/// [`Ordering::Less`] means `a` is more specific and is tried before `b`.
pub trait RuleComparator: Send + Sync {
    fn compare(&self, a: &RuleDeclaration, b: &RuleDeclaration) -> Ordering;
}

/// Tests one rule against an update's content.
pub trait RuleMatcher: Send + Sync {
    fn matches(&self, rule: &RuleDeclaration, update: &dyn UpdateView) -> bool;
}

/// Classifier, comparator and matcher for one category.
#[derive(Clone)]
pub struct PluginBundle {
    category: Category,
    classifier: Arc<dyn UpdateClassifier>,
    comparator: Arc<dyn RuleComparator>,
    matcher: Arc<dyn RuleMatcher>,
}

impl PluginBundle {
    pub fn new(
        category: Category,
        classifier: Arc<dyn UpdateClassifier>,
        comparator: Arc<dyn RuleComparator>,
        matcher: Arc<dyn RuleMatcher>,
    ) -> Self {
        Self {
            category,
            classifier,
            comparator,
            matcher,
        }
    }

    /// Bundle a single type that plays all three roles.
    pub fn from_plugin<P>(category: Category, plugin: P) -> Self
    where
        P: UpdateClassifier + RuleComparator + RuleMatcher + 'static,
    {
        let plugin = Arc::new(plugin);
        Self::new(category, plugin.clone(), plugin.clone(), plugin)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn classifier(&self) -> &dyn UpdateClassifier {
        self.classifier.as_ref()
    }

    pub fn comparator(&self) -> &dyn RuleComparator {
        self.comparator.as_ref()
    }

    pub fn matcher(&self) -> &dyn RuleMatcher {
        self.matcher.as_ref()
    }
}

impl std::fmt::Debug for PluginBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginBundle")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Plugins keyed by category, plus the order categories are tried in.
#[derive(Debug, Clone)]
pub struct PluginRegistry {
    precedence: Vec<Category>,
    bundles: HashMap<Category, PluginBundle>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self {
            precedence: Category::DEFAULT_PRECEDENCE.to_vec(),
            bundles: HashMap::new(),
        }
    }
}

impl PluginRegistry {
    /// Empty registry using [`Category::DEFAULT_PRECEDENCE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in command, callback and text plugins.
    ///
    /// `bot_username` is used to accept `/cmd@username` addressed commands.
    pub fn with_defaults(bot_username: impl Into<String>) -> Result<Self, RoutingError> {
        Self::new()
            .register(PluginBundle::from_plugin(
                Category::Command,
                CommandPlugin::new(bot_username),
            ))?
            .register(PluginBundle::from_plugin(Category::Callback, CallbackPlugin))?
            .register(PluginBundle::from_plugin(Category::Text, TextPlugin))
    }

    /// Replace the classification order.
    ///
    /// Categories are tried first to last; the first whose classifier
    /// accepts an update wins. Every category that already has a plugin
    /// must stay in the list.
    pub fn with_precedence(mut self, precedence: Vec<Category>) -> Result<Self, RoutingError> {
        let mut registered: Vec<Category> = self.bundles.keys().copied().collect();
        registered.sort();
        if let Some(dropped) = registered.into_iter().find(|c| !precedence.contains(c)) {
            return Err(RoutingError::UnrankedCategory(dropped));
        }

        self.precedence = precedence;
        Ok(self)
    }

    /// Add the plugin for one category.
    pub fn register(mut self, bundle: PluginBundle) -> Result<Self, RoutingError> {
        let category = bundle.category();
        if !self.precedence.contains(&category) {
            return Err(RoutingError::UnrankedCategory(category));
        }
        if self.bundles.contains_key(&category) {
            return Err(RoutingError::DuplicatePlugin(category));
        }

        debug!("Registering plugin for {} updates", category);
        self.bundles.insert(category, bundle);
        Ok(self)
    }

    pub fn get(&self, category: Category) -> Option<&PluginBundle> {
        self.bundles.get(&category)
    }

    pub fn precedence(&self) -> &[Category] {
        &self.precedence
    }

    /// Resolve the category of an update.
    pub fn classify(&self, update: &dyn UpdateView) -> Result<Category, DispatchError> {
        self.precedence
            .iter()
            .filter_map(|category| self.bundles.get(category))
            .find(|bundle| bundle.classifier().is_category(update))
            .map(PluginBundle::category)
            .ok_or(DispatchError::UnknownUpdateType)
    }
}
