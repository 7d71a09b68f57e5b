//! Read-only view over an inbound update.
//!
//! The routing core only ever asks a handful of questions about an update.
//! Keeping them behind [`UpdateView`] lets the core stay independent of the
//! wire format, while teloxide's [`Update`] is the implementation used at
//! runtime.

use teloxide::types::{MessageEntityKind, Update, UpdateKind};

/// The narrow interface the router needs from an update.
pub trait UpdateView {
    /// The update carries a message with text.
    fn has_text_message(&self) -> bool {
        self.message_text().is_some()
    }

    /// The update carries a callback query (inline button press).
    fn has_callback_query(&self) -> bool;

    /// Text of the carried message, if any.
    fn message_text(&self) -> Option<&str>;

    /// Payload of the carried callback query, if any.
    fn callback_data(&self) -> Option<&str>;

    /// The carried message starts with a bot command entity.
    fn is_command(&self) -> bool;
}

impl UpdateView for Update {
    fn has_callback_query(&self) -> bool {
        matches!(self.kind, UpdateKind::CallbackQuery(_))
    }

    fn message_text(&self) -> Option<&str> {
        match &self.kind {
            UpdateKind::Message(msg) => msg.text(),
            _ => None,
        }
    }

    fn callback_data(&self) -> Option<&str> {
        match &self.kind {
            UpdateKind::CallbackQuery(q) => q.data.as_deref(),
            _ => None,
        }
    }

    fn is_command(&self) -> bool {
        let UpdateKind::Message(msg) = &self.kind else {
            return false;
        };

        msg.entities()
            .map(|entities| {
                entities
                    .iter()
                    .any(|e| e.offset == 0 && matches!(e.kind, MessageEntityKind::BotCommand))
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Bot API payloads shared by the routing tests.

    use serde_json::json;
    use teloxide::types::Update;

    fn parse(value: serde_json::Value) -> Update {
        // teloxide's `Update` only deserializes correctly from a string source
        serde_json::from_str(&value.to_string()).expect("valid update json")
    }

    fn user() -> serde_json::Value {
        json!({ "id": 42, "is_bot": false, "first_name": "Ada" })
    }

    fn chat() -> serde_json::Value {
        json!({ "id": 42, "type": "private", "first_name": "Ada" })
    }

    /// A plain text message with no entities.
    pub fn text(text: &str) -> Update {
        parse(json!({
            "update_id": 1,
            "message": {
                "message_id": 10,
                "date": 1_700_000_000,
                "chat": chat(),
                "from": user(),
                "text": text,
            }
        }))
    }

    /// A text message whose first token is marked as a bot command.
    pub fn command(text: &str) -> Update {
        let length = text
            .split_whitespace()
            .next()
            .map(|t| t.encode_utf16().count())
            .unwrap_or(0);

        parse(json!({
            "update_id": 2,
            "message": {
                "message_id": 11,
                "date": 1_700_000_000,
                "chat": chat(),
                "from": user(),
                "text": text,
                "entities": [{ "type": "bot_command", "offset": 0, "length": length }],
            }
        }))
    }

    /// A callback query, optionally carrying data.
    pub fn callback(data: Option<&str>) -> Update {
        let mut query = json!({
            "id": "cb-1",
            "from": user(),
            "chat_instance": "instance-1",
        });
        if let Some(data) = data {
            query["data"] = json!(data);
        }

        parse(json!({ "update_id": 3, "callback_query": query }))
    }

    /// A message without text (a location share).
    pub fn location() -> Update {
        parse(json!({
            "update_id": 4,
            "message": {
                "message_id": 12,
                "date": 1_700_000_000,
                "chat": chat(),
                "from": user(),
                "location": { "latitude": 50.45, "longitude": 30.52 },
            }
        }))
    }
}
