// Normalized view of a single update: who did what, where.

mod dispatch;

use std::{borrow::Cow, collections::HashMap};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::types::{Chat, Message, Sender, Update, User};
use dispatch::Facts;

/// Update-local storage shared between handlers, e.g. to cache an admin check.
pub type Data = HashMap<String, Value>;

/// The effective facts of an update, independent of which kind of update it is.
///
/// Every fact is optional: an unset fact means the update kind doesn't carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct Context<'a> {
    pub update: &'a Update,

    /// The bot account that received the update.
    pub bot: User,

    pub data: Data,

    /// The message behind the update. For callback queries on an inaccessible message this
    /// is an expanded stub whose text, caption and author are empty.
    pub effective_message: Option<Cow<'a, Message>>,

    pub effective_chat: Option<&'a Chat>,

    /// The user who caused the update. When a user is added to a chat, this is whoever added
    /// them. Prefer [`Context::effective_sender`] where anonymous admins or channels matter.
    pub effective_user: Option<&'a User>,

    /// The acting party: a user, an anonymous admin speaking as the chat, a linked channel,
    /// or an anonymous channel.
    pub effective_sender: Option<Sender>,
}

impl<'a> Context<'a> {
    /// Resolve the effective facts of `update`, received by `bot`.
    ///
    /// `data` pre-seeds the update-local storage. An update without exactly one populated slot
    /// yields a context with every fact unset.
    pub fn new(update: &'a Update, bot: User, data: Option<Data>) -> Self {
        let facts = match update.kind() {
            Some(kind) => {
                debug!("Normalizing update {} ({})", update.update_id, kind);
                kind.extractor()(update)
            }
            None => {
                let populated = update.populated().count();
                if populated > 1 {
                    warn!(
                        "Update {} has {} populated slots, leaving it unresolved",
                        update.update_id, populated
                    );
                } else {
                    debug!("Update {} has no known slot", update.update_id);
                }
                Facts::default()
            }
        };

        let sender = facts.sender.or_else(|| {
            fallback_sender(facts.message.as_deref(), facts.chat, facts.user)
        });

        Self {
            update,
            bot,
            data: data.unwrap_or_default(),
            effective_message: facts.message,
            effective_chat: facts.chat,
            effective_user: facts.user,
            effective_sender: sender,
        }
    }

    /// Whitespace-separated words of the effective message's text.
    pub fn args(&self) -> Vec<&str> {
        self.effective_message
            .as_deref()
            .and_then(Message::text_or_caption)
            .map(|text| text.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Store a serializable value under `key`, returning the previous value.
    pub fn insert_data<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: T,
    ) -> Result<Option<Value>, serde_json::Error> {
        let value = serde_json::to_value(value)?;
        Ok(self.data.insert(key.into(), value))
    }

    /// Read the value under `key` back as `T`.
    pub fn get_data<T: DeserializeOwned>(&self, key: &str) -> Option<Result<T, serde_json::Error>> {
        self.data.get(key).cloned().map(serde_json::from_value)
    }
}

// Used only when the update kind didn't name a sender itself.
fn fallback_sender(message: Option<&Message>, chat: Option<&Chat>, user: Option<&User>) -> Option<Sender> {
    if let Some(message) = message {
        return message.sender();
    }
    user.map(|user| Sender::from_user(user.clone(), chat.map(|chat| chat.id)))
}
