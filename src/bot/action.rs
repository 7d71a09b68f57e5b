//! Executable actions.

use std::future::Future;

use futures::future::BoxFuture;
use teloxide::prelude::*;

use super::dispatcher::ThrottledBot;
use crate::routing::Router;

/// Handler for one kind of update.
///
/// Any `async fn(ThrottledBot, Update) -> anyhow::Result<()>` is an action.
pub trait Action: Send + Sync {
    fn run(&self, bot: ThrottledBot, update: Update) -> BoxFuture<'static, anyhow::Result<()>>;
}

impl<F, Fut> Action for F
where
    F: Fn(ThrottledBot, Update) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    fn run(&self, bot: ThrottledBot, update: Update) -> BoxFuture<'static, anyhow::Result<()>> {
        Box::pin(self(bot, update))
    }
}

/// Routing table over bot actions.
pub type BotRouter = Router<dyn Action>;
