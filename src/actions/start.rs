//! /start and /help actions.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};

use crate::bot::ThrottledBot;

use super::chat_id;
use super::menu::MENU_KEY;

const HELP_TEXT: &str = "<b>Commands</b>
/start - show the menu
/help - this message
/ping - measure API latency

Anything ending in <code>!</code> gets shouted back, any other text is echoed.";

/// Handle the /start command.
pub async fn start_action(bot: ThrottledBot, update: Update) -> anyhow::Result<()> {
    let Some(chat_id) = chat_id(&update) else {
        return Ok(());
    };

    let keyboard = InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("Help", format!("{MENU_KEY}:help")),
        InlineKeyboardButton::callback("Ping", format!("{MENU_KEY}:ping")),
    ]]);

    bot.send_message(chat_id, "<b>Hi!</b> I route every update to exactly one action.")
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await?;

    Ok(())
}

/// Handle the /help command.
pub async fn help_action(bot: ThrottledBot, update: Update) -> anyhow::Result<()> {
    let Some(chat_id) = chat_id(&update) else {
        return Ok(());
    };

    send_help(&bot, chat_id).await
}

pub(crate) async fn send_help(bot: &ThrottledBot, chat_id: ChatId) -> anyhow::Result<()> {
    bot.send_message(chat_id, HELP_TEXT)
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}
