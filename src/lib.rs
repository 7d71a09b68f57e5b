//! Relaygram - declarative update routing for Telegram bots.
//!
//! Handlers ("actions") are registered with a rule describing what they
//! handle: a command, a callback key, or a text pattern. Each update is
//! classified into a category and routed to the most specific action whose
//! rule matches.
//!
//! ## Architecture
//!
//! - `routing` - Classification, specificity ranking and dispatch
//! - `bot` - Action execution, teloxide dispatcher, polling and webhook runners
//! - `config` - Environment configuration
//! - `actions` - Demo actions and their registrations

pub mod actions;
pub mod bot;
pub mod config;
pub mod routing;
