//! Message dispatcher setup.
//!
//! teloxide delivers every update to a single endpoint; choosing the handler
//! is left to the [`UpdateService`].

use teloxide::adaptors::Throttle;
use teloxide::dispatching::{DefaultKey, UpdateHandler};
use teloxide::prelude::*;

use super::service::UpdateService;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Dispatcher type shared by the polling and webhook runners.
pub type BotDispatcher = Dispatcher<ThrottledBot, anyhow::Error, DefaultKey>;

/// Build the dispatcher around the update service.
pub fn build_dispatcher(bot: ThrottledBot, service: UpdateService) -> BotDispatcher {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![service])
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::endpoint(route_update)
}

/// Hand the update over to the router.
async fn route_update(
    bot: ThrottledBot,
    update: Update,
    service: UpdateService,
) -> anyhow::Result<()> {
    service.handle_update(bot, update).await;
    Ok(())
}
