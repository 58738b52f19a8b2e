// Messages, and the degraded form Telegram sends once a message is out of reach.

use serde::{Deserialize, Deserializer, Serialize};

use super::{Chat, Sender, SenderIdentity, User};

/// A message. Only the fields the normalization layer reads are modelled; everything else in
/// the payload is ignored on deserialization.
///
/// See <https://core.telegram.org/bots/api#message>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i32,

    // Unix time; `0` marks an inaccessible message.
    #[serde(default)]
    pub date: i64,

    pub chat: Chat,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_automatic_forward: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Message {
    /// The message text, or the media caption when there is no text.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text
            .as_deref()
            .filter(|text| !text.is_empty())
            .or(self.caption.as_deref())
    }

    /// Who sent this message.
    ///
    /// A `sender_chat` wins over `from`: anonymous admins and channels still carry a
    /// placeholder `from` user, which is never the real author.
    pub fn sender(&self) -> Option<Sender> {
        let identity = match (&self.sender_chat, &self.from) {
            (Some(chat), _) => SenderIdentity::Chat(chat.clone()),
            (None, Some(user)) => SenderIdentity::User(user.clone()),
            (None, None) => return None,
        };

        Some(Sender {
            identity,
            chat_id: Some(self.chat.id),
            is_automatic_forward: self.is_automatic_forward,
            author_signature: self.author_signature.clone(),
        })
    }
}

/// A message that was deleted or is otherwise unavailable to the bot.
///
/// See <https://core.telegram.org/bots/api#inaccessiblemessage>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InaccessibleMessage {
    pub chat: Chat,
    pub message_id: i32,

    // Always `0`.
    #[serde(default)]
    pub date: i64,
}

impl InaccessibleMessage {
    /// Best-effort expansion into a full [`Message`].
    ///
    /// Only `message_id`, `chat` and `date` carry over. Text, caption and author are always
    /// empty in the result; callers must not read them as the original content.
    pub fn to_message(&self) -> Message {
        Message {
            message_id: self.message_id,
            date: self.date,
            chat: self.chat.clone(),
            ..Message::default()
        }
    }
}

/// Either a full message or its inaccessible stub, as attached to callback queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MaybeInaccessibleMessage {
    Message(Box<Message>),
    Inaccessible(InaccessibleMessage),
}

impl MaybeInaccessibleMessage {
    pub fn chat(&self) -> &Chat {
        match self {
            Self::Message(message) => &message.chat,
            Self::Inaccessible(message) => &message.chat,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Message(message) => message.message_id,
            Self::Inaccessible(message) => message.message_id,
        }
    }

    pub fn is_accessible(&self) -> bool {
        matches!(self, Self::Message(_))
    }
}

impl<'de> Deserialize<'de> for MaybeInaccessibleMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Both shapes share `chat` and `message_id`; Telegram tells them apart by `date == 0`.
        let message = Message::deserialize(deserializer)?;
        if message.date == 0 {
            return Ok(Self::Inaccessible(InaccessibleMessage {
                chat: message.chat,
                message_id: message.message_id,
                date: 0,
            }));
        }
        Ok(Self::Message(Box::new(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_date_deserializes_as_inaccessible() {
        let attached: MaybeInaccessibleMessage = serde_json::from_value(json!({
            "message_id": 9,
            "date": 0,
            "chat": {"id": -3, "type": "group", "title": "G"}
        }))
        .unwrap();

        assert!(!attached.is_accessible());
        assert_eq!(attached.id(), 9);
        assert_eq!(attached.chat().id, -3);
    }

    #[test]
    fn dated_message_stays_accessible() {
        let attached: MaybeInaccessibleMessage = serde_json::from_value(json!({
            "message_id": 9,
            "date": 1_700_000_000,
            "chat": {"id": 5, "type": "private"},
            "text": "pick one"
        }))
        .unwrap();

        let MaybeInaccessibleMessage::Message(message) = attached else {
            panic!("expected an accessible message");
        };
        assert_eq!(message.text.as_deref(), Some("pick one"));
    }

    #[test]
    fn expansion_only_keeps_identity_fields() {
        let stub = InaccessibleMessage {
            chat: Chat {
                id: 11,
                ..Chat::default()
            },
            message_id: 4,
            date: 0,
        };
        let message = stub.to_message();

        assert_eq!(message.message_id, 4);
        assert_eq!(message.chat.id, 11);
        assert_eq!(message.text_or_caption(), None);
        assert!(message.from.is_none());
        assert!(message.sender().is_none());
    }

    #[test]
    fn caption_is_used_when_text_is_missing() {
        let message = Message {
            caption: Some("a photo".into()),
            ..Message::default()
        };
        assert_eq!(message.text_or_caption(), Some("a photo"));
    }

    #[test]
    fn sender_chat_wins_over_placeholder_user() {
        let message = Message {
            chat: Chat {
                id: -10,
                ..Chat::default()
            },
            from: Some(User {
                id: 1_087_968_824,
                is_bot: true,
                first_name: "Group".into(),
                ..User::default()
            }),
            sender_chat: Some(Chat {
                id: -10,
                title: Some("Group".into()),
                ..Chat::default()
            }),
            ..Message::default()
        };

        let sender = message.sender().unwrap();
        assert!(sender.is_anonymous_admin());
        assert_eq!(sender.chat_id, Some(-10));
    }
}
