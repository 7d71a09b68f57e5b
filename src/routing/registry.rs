//! Handler registry.
//!
//! Collects every registered action once at startup, groups them by the
//! category of their rule and orders each group most specific first. The
//! result is read-only for the rest of the process.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use super::category::Category;
use super::error::RoutingError;
use super::plugin::PluginRegistry;
use super::rule::RuleDeclaration;

/// An action waiting to be collected, together with its rule.
///
/// ```rust,ignore
/// ActionRegistration::new("start", Arc::new(start))
///     .rule(RuleDeclaration::command("/start"))
/// ```
pub struct ActionRegistration<A: ?Sized> {
    name: String,
    action: Arc<A>,
    rules: Vec<RuleDeclaration>,
}

impl<A: ?Sized> ActionRegistration<A> {
    pub fn new(name: impl Into<String>, action: Arc<A>) -> Self {
        Self {
            name: name.into(),
            action,
            rules: Vec::new(),
        }
    }

    /// Attach the rule. An action must end up with exactly one.
    pub fn rule(mut self, rule: impl Into<RuleDeclaration>) -> Self {
        self.rules.push(rule.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn into_registered(mut self) -> Result<RegisteredAction<A>, RoutingError> {
        if self.rules.len() > 1 {
            return Err(RoutingError::ConflictingRuleDeclarations { action: self.name });
        }
        let Some(mut rule) = self.rules.pop() else {
            return Err(RoutingError::MissingRuleDeclaration { action: self.name });
        };

        if let Err(source) = rule.prepare() {
            return Err(RoutingError::InvalidPattern {
                action: self.name,
                source,
            });
        }

        Ok(RegisteredAction {
            name: self.name,
            rule,
            action: self.action,
        })
    }
}

/// A collected action with its prepared rule.
pub struct RegisteredAction<A: ?Sized> {
    name: String,
    rule: RuleDeclaration,
    action: Arc<A>,
}

impl<A: ?Sized> RegisteredAction<A> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &RuleDeclaration {
        &self.rule
    }

    pub fn action(&self) -> &Arc<A> {
        &self.action
    }

    pub fn category(&self) -> Category {
        self.rule.category()
    }
}

impl<A: ?Sized> fmt::Debug for RegisteredAction<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredAction")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

/// Actions per category, most specific first.
pub struct HandlerGroups<A: ?Sized> {
    groups: HashMap<Category, Vec<RegisteredAction<A>>>,
}

impl<A: ?Sized> HandlerGroups<A> {
    /// Collect and order all registrations.
    ///
    /// Fails on the first configuration defect; no partial table is built.
    pub fn build(
        plugins: &PluginRegistry,
        registrations: Vec<ActionRegistration<A>>,
    ) -> Result<Self, RoutingError> {
        let mut groups: HashMap<Category, Vec<RegisteredAction<A>>> = HashMap::new();

        for registration in registrations {
            let registered = registration.into_registered()?;
            debug!(
                "Collected action '{}' for {} updates",
                registered.name,
                registered.category()
            );
            groups
                .entry(registered.category())
                .or_default()
                .push(registered);
        }

        // Sorted so the reported category does not depend on map order
        let mut categories: Vec<Category> = groups.keys().copied().collect();
        categories.sort();
        if let Some(missing) = categories.iter().find(|c| plugins.get(**c).is_none()) {
            return Err(RoutingError::NoMatcherForCategory(*missing));
        }

        for (category, actions) in groups.iter_mut() {
            let Some(bundle) = plugins.get(*category) else {
                return Err(RoutingError::NoMatcherForCategory(*category));
            };

            // Stable sort keeps registration order between equal rules
            let comparator = bundle.comparator();
            actions.sort_by(|a, b| comparator.compare(&a.rule, &b.rule));
        }

        let handlers = Self { groups };
        handlers.log_table();
        Ok(handlers)
    }

    /// Ordered actions of one category.
    pub fn get(&self, category: Category) -> &[RegisteredAction<A>] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of collected actions.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn log_table(&self) {
        let mut categories: Vec<_> = self.groups.keys().copied().collect();
        categories.sort();

        for category in categories {
            let names: Vec<&str> = self.get(category).iter().map(|a| a.name()).collect();
            info!("Actions collected for {}: {:?}", category, names);
        }
    }
}

impl<A: ?Sized> fmt::Debug for HandlerGroups<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.groups.iter()).finish()
    }
}
