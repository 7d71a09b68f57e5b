//! Demo actions.
//!
//! Add new actions by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_action;` below
//! 3. Adding its registration to `registrations()`

pub mod echo;
pub mod menu;
pub mod ping;
pub mod start;

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, UpdateKind};

use crate::bot::Action;
use crate::routing::{ActionRegistration, CallbackRule, RuleDeclaration, TextRule};

/// Every action of the bot together with its rule.
pub fn registrations() -> Vec<ActionRegistration<dyn Action>> {
    vec![
        ActionRegistration::new("start", action(start::start_action))
            .rule(RuleDeclaration::command("/start")),
        ActionRegistration::new("help", action(start::help_action))
            .rule(RuleDeclaration::command("/help")),
        ActionRegistration::new("ping", action(ping::ping_action))
            .rule(RuleDeclaration::command("/ping")),
        ActionRegistration::new("menu", action(menu::menu_callback))
            .rule(RuleDeclaration::callback(menu::MENU_KEY)),
        ActionRegistration::new("stale_button", action(menu::stale_callback))
            .rule(CallbackRule::any()),
        ActionRegistration::new("shout", action(echo::shout_action))
            .rule(TextRule::new().ends_with("!")),
        ActionRegistration::new("echo", action(echo::echo_action)).rule(TextRule::new()),
    ]
}

/// Fallback for updates no registered action handles.
pub fn default_action() -> Arc<dyn Action> {
    action(echo::unsupported_action)
}

fn action<A: Action + 'static>(action: A) -> Arc<dyn Action> {
    Arc::new(action)
}

/// Chat the update came from, if any.
pub(crate) fn chat_id(update: &Update) -> Option<ChatId> {
    update.chat().map(|chat| chat.id)
}

/// Callback query carried by the update, if any.
pub(crate) fn callback_query(update: &Update) -> Option<&CallbackQuery> {
    match &update.kind {
        UpdateKind::CallbackQuery(q) => Some(q),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::update::fixtures;
    use crate::routing::{Category, PluginRegistry, Router};

    fn router() -> Router<dyn Action> {
        let plugins = PluginRegistry::with_defaults("RelayBot").unwrap();
        Router::build(plugins, registrations()).unwrap()
    }

    fn resolved(update: &Update) -> String {
        router().resolve(update).unwrap().name().to_string()
    }

    #[test]
    fn test_registrations_build() {
        let router = router();

        assert_eq!(router.group(Category::Command).len(), 3);
        assert_eq!(router.group(Category::Callback).len(), 2);
        assert_eq!(router.group(Category::Text).len(), 2);
    }

    #[test]
    fn test_demo_routes() {
        assert_eq!(resolved(&fixtures::command("/start")), "start");
        assert_eq!(resolved(&fixtures::command("/ping@RelayBot")), "ping");
        assert_eq!(resolved(&fixtures::callback(Some("menu:ping"))), "menu");
        assert_eq!(resolved(&fixtures::callback(Some("gone:1"))), "stale_button");
        assert_eq!(resolved(&fixtures::text("hello!")), "shout");
        assert_eq!(resolved(&fixtures::text("hello")), "echo");
    }

    #[test]
    fn test_helpers() {
        assert_eq!(chat_id(&fixtures::text("hi")), Some(ChatId(42)));
        assert!(callback_query(&fixtures::callback(Some("menu"))).is_some());
        assert!(callback_query(&fixtures::text("menu")).is_none());
    }
}
