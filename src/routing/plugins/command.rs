//! Bot command plugin.
//!
//! Commands are exact literals. A command addressed to a bot
//! (`/start@RelayBot`) only matches when the suffix names this bot.

use std::cmp::Ordering;

use crate::routing::plugin::{RuleComparator, RuleMatcher, UpdateClassifier};
use crate::routing::rule::RuleDeclaration;
use crate::routing::update::UpdateView;

/// Plugin for [`RuleDeclaration::Command`] rules.
#[derive(Debug, Clone)]
pub struct CommandPlugin {
    bot_username: String,
}

impl CommandPlugin {
    /// `bot_username` may be given with or without the leading `@`.
    pub fn new(bot_username: impl Into<String>) -> Self {
        let username = bot_username.into();
        Self {
            bot_username: username.trim().trim_start_matches('@').to_string(),
        }
    }

    /// First token of the message with a mention of this bot removed.
    fn extract_command<'a>(&self, text: &'a str) -> Option<&'a str> {
        let token = text.split_whitespace().next()?;

        match token.split_once('@') {
            Some((command, mention)) if self.is_own_username(mention) => Some(command),
            _ => Some(token),
        }
    }

    // Telegram usernames are ASCII only
    fn is_own_username(&self, mention: &str) -> bool {
        !self.bot_username.is_empty() && mention.eq_ignore_ascii_case(&self.bot_username)
    }
}

impl UpdateClassifier for CommandPlugin {
    fn is_category(&self, update: &dyn UpdateView) -> bool {
        update.is_command()
    }
}

impl RuleComparator for CommandPlugin {
    fn compare(&self, a: &RuleDeclaration, b: &RuleDeclaration) -> Ordering {
        let (RuleDeclaration::Command(a), RuleDeclaration::Command(b)) = (a, b) else {
            return Ordering::Equal;
        };

        // Longer literal first
        b.command.len().cmp(&a.command.len())
    }
}

impl RuleMatcher for CommandPlugin {
    fn matches(&self, rule: &RuleDeclaration, update: &dyn UpdateView) -> bool {
        let RuleDeclaration::Command(rule) = rule else {
            return false;
        };
        if !update.is_command() {
            return false;
        }

        update
            .message_text()
            .and_then(|text| self.extract_command(text))
            .is_some_and(|command| command == rule.command)
    }
}
