// The acting party behind an update.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Chat, User};

/// Who performed an action: a concrete user, or a chat speaking on someone's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderIdentity {
    User(User),

    // Anonymous admins, anonymous channel posts and linked channel relays.
    Chat(Chat),
}

impl SenderIdentity {
    /// Recovers an actor whose fields were spread over the enclosing object, the way teloxide
    /// writes reaction actors and poll voters. Users always carry `is_bot`; chats never do.
    pub(crate) fn from_flattened(fields: Map<String, Value>) -> Result<Option<Self>, serde_json::Error> {
        if !fields.contains_key("id") {
            return Ok(None);
        }

        let is_user = fields.contains_key("is_bot");
        let value = Value::Object(fields);
        if is_user {
            serde_json::from_value(value).map(|user| Some(Self::User(user)))
        } else {
            serde_json::from_value(value).map(|chat| Some(Self::Chat(chat)))
        }
    }

    /// Splits into the `(user, chat)` pair the Bot API uses on the wire.
    pub(crate) fn into_pair(identity: Option<Self>) -> (Option<User>, Option<Chat>) {
        match identity {
            Some(Self::User(user)) => (Some(user), None),
            Some(Self::Chat(chat)) => (None, Some(chat)),
            None => (None, None),
        }
    }
}

/// The resolved sender of an update.
///
/// `chat_id` is the chat in which the sender acted, when one is known. Comparing it with the
/// identity chat tells anonymous admins (same chat) apart from channels (different chat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub identity: SenderIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_automatic_forward: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
}

impl Sender {
    pub fn from_user(user: User, chat_id: Option<i64>) -> Self {
        Self {
            identity: SenderIdentity::User(user),
            chat_id,
            is_automatic_forward: false,
            author_signature: None,
        }
    }

    pub fn from_chat(chat: Chat, chat_id: Option<i64>) -> Self {
        Self {
            identity: SenderIdentity::Chat(chat),
            chat_id,
            is_automatic_forward: false,
            author_signature: None,
        }
    }

    /// Identifier of the acting user or chat.
    pub fn id(&self) -> i64 {
        match &self.identity {
            SenderIdentity::User(user) => user.id,
            SenderIdentity::Chat(chat) => chat.id,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match &self.identity {
            SenderIdentity::User(user) => user.username.as_deref(),
            SenderIdentity::Chat(chat) => chat.username.as_deref(),
        }
    }

    /// Display name: the user's full name, or the chat title.
    pub fn name(&self) -> String {
        match &self.identity {
            SenderIdentity::User(user) => user.full_name(),
            SenderIdentity::Chat(chat) => chat.title.clone().unwrap_or_default(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match &self.identity {
            SenderIdentity::User(user) => Some(user),
            SenderIdentity::Chat(_) => None,
        }
    }

    pub fn chat(&self) -> Option<&Chat> {
        match &self.identity {
            SenderIdentity::Chat(chat) => Some(chat),
            SenderIdentity::User(_) => None,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self.identity, SenderIdentity::User(_))
    }

    /// An admin posting anonymously as the chat itself.
    pub fn is_anonymous_admin(&self) -> bool {
        self.chat().is_some_and(|chat| Some(chat.id) == self.chat_id)
    }

    /// A channel posting into some other chat, outside of automatic forwarding.
    pub fn is_anonymous_channel(&self) -> bool {
        self.chat()
            .is_some_and(|chat| Some(chat.id) != self.chat_id && !self.is_automatic_forward)
    }

    /// The channel linked to a discussion group, relaying its posts automatically.
    pub fn is_linked_channel(&self) -> bool {
        self.chat()
            .is_some_and(|chat| Some(chat.id) != self.chat_id && self.is_automatic_forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> Chat {
        Chat {
            id: -100_200,
            title: Some("News".into()),
            username: Some("news".into()),
            ..Chat::default()
        }
    }

    #[test]
    fn plain_user_is_not_anonymous() {
        let user = User {
            id: 7,
            first_name: "Bob".into(),
            username: Some("bob".into()),
            ..User::default()
        };
        let sender = Sender::from_user(user, Some(-1));

        assert!(sender.is_user());
        assert_eq!(sender.id(), 7);
        assert_eq!(sender.username(), Some("bob"));
        assert_eq!(sender.name(), "Bob");
        assert!(!sender.is_anonymous_admin());
        assert!(!sender.is_anonymous_channel());
        assert!(!sender.is_linked_channel());
    }

    #[test]
    fn chat_speaking_in_itself_is_anonymous_admin() {
        let group = Chat {
            id: -42,
            title: Some("Group".into()),
            ..Chat::default()
        };
        let sender = Sender::from_chat(group, Some(-42));

        assert!(sender.is_anonymous_admin());
        assert!(!sender.is_anonymous_channel());
        assert!(!sender.is_linked_channel());
        assert_eq!(sender.name(), "Group");
        assert!(sender.user().is_none());
    }

    #[test]
    fn channel_classification_depends_on_automatic_forward() {
        let mut sender = Sender::from_chat(channel(), Some(-42));
        assert!(sender.is_anonymous_channel());
        assert!(!sender.is_linked_channel());

        sender.is_automatic_forward = true;
        assert!(sender.is_linked_channel());
        assert!(!sender.is_anonymous_channel());
        assert_eq!(sender.id(), -100_200);
        assert_eq!(sender.username(), Some("news"));
    }
}
