//! Bot module - transport and action execution around the router.

pub mod action;
pub mod dispatcher;
mod runtime;
pub mod service;
pub mod webhook;

pub use action::{Action, BotRouter};
pub use dispatcher::{build_dispatcher, BotDispatcher, ThrottledBot};
pub use runtime::run;
pub use service::UpdateService;
