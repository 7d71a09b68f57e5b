//! Dispatch coordinator.
//!
//! Resolving an update is a pure decision over the tables built at startup:
//!
//! 1. Classify the update into a [`Category`] (or fail with
//!    [`DispatchError::UnknownUpdateType`]).
//! 2. Fetch that category's handler group.
//! 3. Return the first action whose rule matches. An empty group and a group
//!    without a match both end in [`DispatchError::NoActionFound`].

use tracing::{debug, error, trace};

use super::category::Category;
use super::error::{DispatchError, RoutingError};
use super::plugin::PluginRegistry;
use super::registry::{ActionRegistration, HandlerGroups, RegisteredAction};
use super::update::UpdateView;

/// Immutable routing table. Share it behind an `Arc`; no locking is needed.
#[derive(Debug)]
pub struct Router<A: ?Sized> {
    plugins: PluginRegistry,
    handlers: HandlerGroups<A>,
}

impl<A: ?Sized> Router<A> {
    /// Build the routing table from plugins and action registrations.
    pub fn build(
        plugins: PluginRegistry,
        registrations: Vec<ActionRegistration<A>>,
    ) -> Result<Self, RoutingError> {
        let handlers = HandlerGroups::build(&plugins, registrations)?;
        Ok(Self { plugins, handlers })
    }

    /// Pick the action that should handle `update`.
    pub fn resolve(&self, update: &dyn UpdateView) -> Result<&RegisteredAction<A>, DispatchError> {
        let category = self.plugins.classify(update)?;
        trace!("Update classified as {}", category);

        let group = self.handlers.get(category);
        if group.is_empty() {
            debug!("No actions registered for {} updates", category);
            return Err(DispatchError::NoActionFound { category });
        }

        // Presence is checked when the table is built
        let Some(bundle) = self.plugins.get(category) else {
            error!("Actions registered for {} updates but no plugin handles them", category);
            return Err(DispatchError::NoActionFound { category });
        };
        let matcher = bundle.matcher();

        let found = group
            .iter()
            .find(|action| matcher.matches(action.rule(), update))
            .ok_or(DispatchError::NoActionFound { category })?;

        debug!("Resolved {} update to action '{}'", category, found.name());
        Ok(found)
    }

    /// Ordered actions of one category.
    pub fn group(&self, category: Category) -> &[RegisteredAction<A>] {
        self.handlers.get(category)
    }

    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }
}
