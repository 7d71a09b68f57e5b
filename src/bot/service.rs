//! Update service.
//!
//! Runs the action the router picks for each update. Updates nobody handles
//! go to the default action when one is configured; otherwise they are
//! logged and dropped. Failing actions are logged and never propagate.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{debug, error, info, warn};

use super::action::{Action, BotRouter};
use super::dispatcher::ThrottledBot;

/// Glue between the transport and the router.
#[derive(Clone)]
pub struct UpdateService {
    router: Arc<BotRouter>,
    default_action: Option<Arc<dyn Action>>,
}

impl UpdateService {
    pub fn new(router: Arc<BotRouter>) -> Self {
        Self {
            router,
            default_action: None,
        }
    }

    /// Action run for updates the router cannot place.
    pub fn with_default_action(mut self, action: Arc<dyn Action>) -> Self {
        self.default_action = Some(action);
        self
    }

    pub fn router(&self) -> &BotRouter {
        &self.router
    }

    /// Resolve and run the handler for one update.
    pub async fn handle_update(&self, bot: ThrottledBot, update: Update) {
        let update_id = update.id.0;

        let (name, action) = match self.router.resolve(&update) {
            Ok(found) => (found.name().to_string(), Arc::clone(found.action())),
            Err(e) => match &self.default_action {
                Some(action) => {
                    info!("Executing default action for update {} ({})", update_id, e);
                    ("default".to_string(), Arc::clone(action))
                }
                None => {
                    warn!("Dropping update {}: {}", update_id, e);
                    return;
                }
            },
        };

        debug!("Executing action '{}' for update {}", name, update_id);
        if let Err(e) = action.run(bot, update).await {
            error!("Action '{}' failed on update {}: {:#}", name, update_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::routing::update::fixtures;
    use crate::routing::{ActionRegistration, PluginRegistry, Router, RuleDeclaration, TextRule};

    /// Action counting its invocations.
    fn counter(hits: Arc<AtomicUsize>) -> Arc<dyn Action> {
        Arc::new(move |_bot: ThrottledBot, _update: Update| {
            let hits = Arc::clone(&hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Ok::<_, anyhow::Error>(())
            }
        })
    }

    fn failing() -> Arc<dyn Action> {
        Arc::new(|_bot: ThrottledBot, _update: Update| async {
            Err::<(), _>(anyhow::anyhow!("boom"))
        })
    }

    fn bot() -> ThrottledBot {
        use teloxide::adaptors::throttle::Limits;
        use teloxide::requests::RequesterExt;

        Bot::new("0:test").throttle(Limits::default())
    }

    fn service(registrations: Vec<ActionRegistration<dyn Action>>) -> UpdateService {
        let plugins = PluginRegistry::with_defaults("MyBot").unwrap();
        UpdateService::new(Arc::new(Router::build(plugins, registrations).unwrap()))
    }

    #[tokio::test]
    async fn test_runs_resolved_action() {
        let start = Arc::new(AtomicUsize::new(0));
        let echo = Arc::new(AtomicUsize::new(0));
        let service = service(vec![
            ActionRegistration::new("start", counter(start.clone()))
                .rule(RuleDeclaration::command("/start")),
            ActionRegistration::new("echo", counter(echo.clone())).rule(TextRule::new()),
        ]);

        service.handle_update(bot(), fixtures::command("/start")).await;
        service.handle_update(bot(), fixtures::text("hello")).await;

        assert_eq!(start.load(Ordering::SeqCst), 1);
        assert_eq!(echo.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_default_action_on_unrouted_update() {
        let fallback = Arc::new(AtomicUsize::new(0));
        let service = service(vec![
            ActionRegistration::new("start", failing()).rule(RuleDeclaration::command("/start")),
        ])
        .with_default_action(counter(fallback.clone()));

        service.handle_update(bot(), fixtures::location()).await;
        service.handle_update(bot(), fixtures::text("unhandled")).await;

        assert_eq!(fallback.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unrouted_update_without_default_is_dropped() {
        let service = service(Vec::new());

        // Must not panic
        service.handle_update(bot(), fixtures::callback(Some("menu"))).await;
    }

    #[tokio::test]
    async fn test_action_errors_are_contained() {
        let service = service(vec![
            ActionRegistration::new("start", failing()).rule(RuleDeclaration::command("/start")),
        ]);

        service.handle_update(bot(), fixtures::command("/start")).await;
    }
}
