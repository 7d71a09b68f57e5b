//! Rule declarations attached to actions.
//!
//! Every registered action carries exactly one [`RuleDeclaration`]. The
//! variant decides the action's [`Category`]; the fields are what the
//! category's matcher checks against an update.

use regex::{Regex, RegexBuilder};

use super::category::Category;

/// Matchable criteria attached to one action.
#[derive(Debug, Clone)]
pub enum RuleDeclaration {
    Command(CommandRule),
    Callback(CallbackRule),
    Text(TextRule),
}

impl RuleDeclaration {
    /// Category the rule (and therefore its action) belongs to.
    pub fn category(&self) -> Category {
        match self {
            RuleDeclaration::Command(_) => Category::Command,
            RuleDeclaration::Callback(_) => Category::Callback,
            RuleDeclaration::Text(_) => Category::Text,
        }
    }

    /// Shortcut for a command rule.
    pub fn command(command: impl Into<String>) -> Self {
        RuleDeclaration::Command(CommandRule::new(command))
    }

    /// Shortcut for a callback rule.
    pub fn callback(key: impl Into<String>) -> Self {
        RuleDeclaration::Callback(CallbackRule::new(key))
    }

    /// Compile anything that must be validated before dispatch starts.
    pub(crate) fn prepare(&mut self) -> Result<(), regex::Error> {
        match self {
            RuleDeclaration::Text(rule) => rule.prepare(),
            RuleDeclaration::Command(_) | RuleDeclaration::Callback(_) => Ok(()),
        }
    }
}

impl From<CommandRule> for RuleDeclaration {
    fn from(rule: CommandRule) -> Self {
        RuleDeclaration::Command(rule)
    }
}

impl From<CallbackRule> for RuleDeclaration {
    fn from(rule: CallbackRule) -> Self {
        RuleDeclaration::Callback(rule)
    }
}

impl From<TextRule> for RuleDeclaration {
    fn from(rule: TextRule) -> Self {
        RuleDeclaration::Text(rule)
    }
}

/// Exact bot command, including the leading slash (`/start`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRule {
    pub(crate) command: String,
}

impl CommandRule {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into().trim().to_string(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

/// Callback key, the part of the payload before the first `:`.
///
/// An empty key is a wildcard that accepts every callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackRule {
    pub(crate) key: String,
}

impl CallbackRule {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Wildcard rule matching any callback query.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_wildcard(&self) -> bool {
        self.key.is_empty()
    }
}

/// Criteria for free text messages.
///
/// Empty strings are treated as "not declared". With nothing declared the
/// rule accepts any non-empty text.
///
/// ```rust,ignore
/// let shout = TextRule::new().ends_with("!");
/// let greeting = TextRule::new().equals("hi").case_insensitive();
/// ```
#[derive(Debug, Clone)]
pub struct TextRule {
    pub(crate) equals: Option<String>,
    pub(crate) regex: Option<String>,
    pub(crate) starts_with: Option<String>,
    pub(crate) ends_with: Option<String>,
    pub(crate) contains: Option<String>,
    pub(crate) case_sensitive: bool,
    pub(crate) compiled: Option<Regex>,
}

impl Default for TextRule {
    fn default() -> Self {
        Self {
            equals: None,
            regex: None,
            starts_with: None,
            ends_with: None,
            contains: None,
            case_sensitive: true,
            compiled: None,
        }
    }
}

impl TextRule {
    /// Catch-all rule; narrow it with the builder methods.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, value: impl Into<String>) -> Self {
        self.equals = declared(value.into());
        self
    }

    /// Pattern the whole message must match.
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.regex = declared(pattern.into());
        self.compiled = None;
        self
    }

    pub fn starts_with(mut self, value: impl Into<String>) -> Self {
        self.starts_with = declared(value.into());
        self
    }

    pub fn ends_with(mut self, value: impl Into<String>) -> Self {
        self.ends_with = declared(value.into());
        self
    }

    pub fn contains(mut self, value: impl Into<String>) -> Self {
        self.contains = declared(value.into());
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self.compiled = None;
        self
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Nothing but the implicit non-empty check is declared.
    pub fn is_catch_all(&self) -> bool {
        self.equals.is_none()
            && self.regex.is_none()
            && self.starts_with.is_none()
            && self.ends_with.is_none()
            && self.contains.is_none()
    }

    /// Compiled pattern, available once the rule went through the registry.
    pub(crate) fn compiled_regex(&self) -> Option<&Regex> {
        self.compiled.as_ref()
    }

    fn prepare(&mut self) -> Result<(), regex::Error> {
        if let Some(pattern) = &self.regex {
            let anchored = format!("^(?:{pattern})$");
            let regex = RegexBuilder::new(&anchored)
                .case_insensitive(!self.case_sensitive)
                .build()?;
            self.compiled = Some(regex);
        }
        Ok(())
    }
}

fn declared(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
