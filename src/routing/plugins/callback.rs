//! Callback query plugin.
//!
//! Payloads have the shape `key` or `key:data`; rules match on the key.

use std::cmp::Ordering;

use crate::routing::plugin::{RuleComparator, RuleMatcher, UpdateClassifier};
use crate::routing::rule::RuleDeclaration;
use crate::routing::update::UpdateView;

const DATA_DELIMITER: char = ':';

/// Plugin for [`RuleDeclaration::Callback`] rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackPlugin;

/// Key part of a callback payload.
fn callback_key(data: &str) -> &str {
    data.split_once(DATA_DELIMITER)
        .map(|(key, _)| key)
        .unwrap_or(data)
}

impl UpdateClassifier for CallbackPlugin {
    fn is_category(&self, update: &dyn UpdateView) -> bool {
        update.has_callback_query()
    }
}

impl RuleComparator for CallbackPlugin {
    fn compare(&self, a: &RuleDeclaration, b: &RuleDeclaration) -> Ordering {
        let (RuleDeclaration::Callback(a), RuleDeclaration::Callback(b)) = (a, b) else {
            return Ordering::Equal;
        };

        // Longer key first; the empty wildcard ends up last
        b.key.len().cmp(&a.key.len())
    }
}

impl RuleMatcher for CallbackPlugin {
    fn matches(&self, rule: &RuleDeclaration, update: &dyn UpdateView) -> bool {
        let RuleDeclaration::Callback(rule) = rule else {
            return false;
        };
        if !update.has_callback_query() {
            return false;
        }
        if rule.is_wildcard() {
            return true;
        }

        update
            .callback_data()
            .is_some_and(|data| callback_key(data) == rule.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::rule::CallbackRule;
    use crate::routing::update::fixtures;

    #[test]
    fn test_key_extraction() {
        assert_eq!(callback_key("menu:page:2"), "menu");
        assert_eq!(callback_key("menu"), "menu");
        assert_eq!(callback_key(":x"), "");
    }

    #[test]
    fn test_matches_on_key() {
        let rule = RuleDeclaration::callback("menu");

        assert!(CallbackPlugin.matches(&rule, &fixtures::callback(Some("menu"))));
        assert!(CallbackPlugin.matches(&rule, &fixtures::callback(Some("menu:2"))));
        assert!(!CallbackPlugin.matches(&rule, &fixtures::callback(Some("menus:2"))));
        assert!(!CallbackPlugin.matches(&rule, &fixtures::callback(None)));
    }

    #[test]
    fn test_wildcard_matches_everything() {
        let rule = RuleDeclaration::from(CallbackRule::any());

        assert!(CallbackPlugin.matches(&rule, &fixtures::callback(Some("anything"))));
        assert!(CallbackPlugin.matches(&rule, &fixtures::callback(Some("a:b"))));
        assert!(CallbackPlugin.matches(&rule, &fixtures::callback(None)));
        assert!(!CallbackPlugin.matches(&rule, &fixtures::text("menu")));
    }

    #[test]
    fn test_wildcard_sorts_last() {
        let wildcard = RuleDeclaration::from(CallbackRule::any());
        let key = RuleDeclaration::callback("a");

        assert_eq!(CallbackPlugin.compare(&key, &wildcard), Ordering::Less);
        assert_eq!(CallbackPlugin.compare(&wildcard, &key), Ordering::Greater);
    }
}
