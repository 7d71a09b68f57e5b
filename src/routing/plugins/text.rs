//! Free text plugin.
//!
//! Matching runs in a fixed order: `equals` alone decides when declared, then
//! `regex`, otherwise every declared `starts_with`/`ends_with`/`contains`
//! must hold. A rule with nothing declared accepts any non-empty text.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::routing::plugin::{RuleComparator, RuleMatcher, UpdateClassifier};
use crate::routing::rule::{RuleDeclaration, TextRule};
use crate::routing::update::UpdateView;

/// Plugin for [`RuleDeclaration::Text`] rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPlugin;

impl TextPlugin {
    fn match_text(rule: &TextRule, text: &str) -> bool {
        if let Some(expected) = &rule.equals {
            return folded(rule, text) == folded(rule, expected);
        }

        if rule.regex.is_some() {
            return rule
                .compiled_regex()
                .is_some_and(|regex| regex.is_match(text));
        }

        if rule.is_catch_all() {
            return !text.is_empty();
        }

        let text = folded(rule, text);
        let holds = |declared: &Option<String>, check: fn(&str, &str) -> bool| {
            declared
                .as_deref()
                .is_none_or(|value| check(&text, &folded(rule, value)))
        };

        holds(&rule.starts_with, |t, v| t.starts_with(v))
            && holds(&rule.ends_with, |t, v| t.ends_with(v))
            && holds(&rule.contains, |t, v| t.contains(v))
    }
}

fn folded<'a>(rule: &TextRule, s: &'a str) -> Cow<'a, str> {
    if rule.case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

/// Declared beats undeclared; two declared values compare lexicographically.
fn compare_property(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl UpdateClassifier for TextPlugin {
    fn is_category(&self, update: &dyn UpdateView) -> bool {
        update.has_text_message()
    }
}

impl RuleComparator for TextPlugin {
    fn compare(&self, a: &RuleDeclaration, b: &RuleDeclaration) -> Ordering {
        let (RuleDeclaration::Text(a), RuleDeclaration::Text(b)) = (a, b) else {
            return Ordering::Equal;
        };

        // Case-sensitive rules first
        b.case_sensitive
            .cmp(&a.case_sensitive)
            .then_with(|| compare_property(&a.equals, &b.equals))
            .then_with(|| compare_property(&a.regex, &b.regex))
            .then_with(|| compare_property(&a.starts_with, &b.starts_with))
            .then_with(|| compare_property(&a.ends_with, &b.ends_with))
            .then_with(|| compare_property(&a.contains, &b.contains))
    }
}

impl RuleMatcher for TextPlugin {
    fn matches(&self, rule: &RuleDeclaration, update: &dyn UpdateView) -> bool {
        let RuleDeclaration::Text(rule) = rule else {
            return false;
        };

        update
            .message_text()
            .is_some_and(|text| Self::match_text(rule, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::update::fixtures;

    fn prepared(rule: TextRule) -> RuleDeclaration {
        let mut rule = RuleDeclaration::from(rule);
        rule.prepare().unwrap();
        rule
    }

    fn matches(rule: &RuleDeclaration, text: &str) -> bool {
        TextPlugin.matches(rule, &fixtures::text(text))
    }

    #[test]
    fn test_equals_wins_over_other_properties() {
        let rule = prepared(TextRule::new().equals("hi").starts_with("h"));

        assert!(matches(&rule, "hi"));
        assert!(!matches(&rule, "hi there"));
    }

    #[test]
    fn test_regex_requires_full_match() {
        let rule = prepared(TextRule::new().regex(r"\d{3}"));

        assert!(matches(&rule, "123"));
        assert!(!matches(&rule, "1234"));
        assert!(!matches(&rule, "abc123"));
    }

    #[test]
    fn test_regex_wins_over_conjunction() {
        let rule = prepared(TextRule::new().regex("a+").starts_with("b"));

        assert!(matches(&rule, "aaa"));
        assert!(!matches(&rule, "bcd"));
    }

    #[test]
    fn test_conjunction_of_declared_properties() {
        let rule = prepared(TextRule::new().starts_with("foo").ends_with("bar"));

        assert!(matches(&rule, "foobar"));
        assert!(matches(&rule, "foo...bar"));
        assert!(!matches(&rule, "foobaz"));
        assert!(!matches(&rule, "xbar"));
    }

    #[test]
    fn test_contains() {
        let rule = prepared(TextRule::new().contains("!"));

        assert!(matches(&rule, "wow!"));
        assert!(matches(&rule, "!?"));
        assert!(!matches(&rule, "wow"));
    }

    #[test]
    fn test_catch_all_requires_text() {
        let rule = prepared(TextRule::new());

        assert!(matches(&rule, "anything"));
        assert!(!TextPlugin.matches(&rule, &fixtures::callback(Some("data"))));
        assert!(!TextPlugin.matches(&rule, &fixtures::location()));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let equals = prepared(TextRule::new().equals("Hello").case_insensitive());
        assert!(matches(&equals, "hELLo"));

        let prefix = prepared(TextRule::new().starts_with("HEY").case_insensitive());
        assert!(matches(&prefix, "hey you"));

        let regex = prepared(TextRule::new().regex("yes|no").case_insensitive());
        assert!(matches(&regex, "YES"));

        let strict = prepared(TextRule::new().equals("Hello"));
        assert!(!matches(&strict, "hello"));
    }

    #[test]
    fn test_case_sensitive_sorts_first() {
        let sensitive = prepared(TextRule::new().contains("a"));
        let insensitive = prepared(TextRule::new().equals("a").case_insensitive());

        assert_eq!(TextPlugin.compare(&sensitive, &insensitive), Ordering::Less);
        assert_eq!(TextPlugin.compare(&insensitive, &sensitive), Ordering::Greater);
    }

    #[test]
    fn test_property_priority() {
        let equals = prepared(TextRule::new().equals("x"));
        let regex = prepared(TextRule::new().regex("x"));
        let prefix = prepared(TextRule::new().starts_with("x"));
        let suffix = prepared(TextRule::new().ends_with("x"));
        let contains = prepared(TextRule::new().contains("x"));
        let catch_all = prepared(TextRule::new());

        assert_eq!(TextPlugin.compare(&equals, &regex), Ordering::Less);
        assert_eq!(TextPlugin.compare(&regex, &equals), Ordering::Greater);
        assert_eq!(TextPlugin.compare(&regex, &prefix), Ordering::Less);
        assert_eq!(TextPlugin.compare(&equals, &prefix), Ordering::Less);
        assert_eq!(TextPlugin.compare(&prefix, &suffix), Ordering::Less);
        assert_eq!(TextPlugin.compare(&suffix, &contains), Ordering::Less);
        assert_eq!(TextPlugin.compare(&contains, &catch_all), Ordering::Less);
        assert_eq!(TextPlugin.compare(&catch_all, &catch_all), Ordering::Equal);
    }

    #[test]
    fn test_declared_values_compare_lexicographically() {
        let short = prepared(TextRule::new().starts_with("b"));
        let long = prepared(TextRule::new().starts_with("abc"));

        // "abc" < "b" even though it is longer
        assert_eq!(TextPlugin.compare(&long, &short), Ordering::Less);
    }
}
