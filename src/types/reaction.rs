// Reaction updates.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

use super::{Chat, Sender, SenderIdentity, User};

/// See <https://core.telegram.org/bots/api#reactiontype>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionType {
    Emoji {
        emoji: String,
    },
    CustomEmoji {
        custom_emoji_id: String,
    },
    Paid,

    #[serde(other)]
    Unknown,
}

/// A reaction to a message was changed by a user.
///
/// Also accepts teloxide's serialized form, where the actor's fields sit directly on this object.
///
/// See <https://core.telegram.org/bots/api#messagereactionupdated>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageReactionUpdated {
    pub chat: Chat,
    pub message_id: i32,

    // Absent when the reaction was made anonymously.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_chat: Option<Chat>,

    #[serde(default)]
    pub date: i64,

    #[serde(default)]
    pub old_reaction: Vec<ReactionType>,

    #[serde(default)]
    pub new_reaction: Vec<ReactionType>,
}

impl MessageReactionUpdated {
    /// The reacting party; an anonymous reaction resolves to its `actor_chat`.
    pub fn sender(&self) -> Option<Sender> {
        let chat_id = Some(self.chat.id);
        match (&self.actor_chat, &self.user) {
            (Some(actor), _) => Some(Sender::from_chat(actor.clone(), chat_id)),
            (None, Some(user)) => Some(Sender::from_user(user.clone(), chat_id)),
            (None, None) => None,
        }
    }
}

impl<'de> Deserialize<'de> for MessageReactionUpdated {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            chat: Chat,
            message_id: i32,
            #[serde(default)]
            user: Option<User>,
            #[serde(default)]
            actor_chat: Option<Chat>,
            #[serde(default)]
            date: i64,
            #[serde(default)]
            old_reaction: Vec<ReactionType>,
            #[serde(default)]
            new_reaction: Vec<ReactionType>,
            #[serde(flatten)]
            rest: Map<String, Value>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let (user, actor_chat) = match (wire.user, wire.actor_chat) {
            (None, None) => SenderIdentity::into_pair(
                SenderIdentity::from_flattened(wire.rest).map_err(de::Error::custom)?,
            ),
            pair => pair,
        };

        Ok(Self {
            chat: wire.chat,
            message_id: wire.message_id,
            user,
            actor_chat,
            date: wire.date,
            old_reaction: wire.old_reaction,
            new_reaction: wire.new_reaction,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCount {
    #[serde(rename = "type")]
    pub kind: ReactionType,
    pub total_count: i64,
}

/// Anonymous reaction totals for a message changed.
///
/// See <https://core.telegram.org/bots/api#messagereactioncountupdated>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReactionCountUpdated {
    pub chat: Chat,
    pub message_id: i32,

    #[serde(default)]
    pub date: i64,

    #[serde(default)]
    pub reactions: Vec<ReactionCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn anonymous_reaction_resolves_to_actor_chat() {
        let update: MessageReactionUpdated = serde_json::from_value(json!({
            "chat": {"id": -77, "type": "supergroup", "title": "S"},
            "message_id": 3,
            "actor_chat": {"id": -77, "type": "supergroup", "title": "S"},
            "date": 1,
            "old_reaction": [],
            "new_reaction": [{"type": "emoji", "emoji": "👍"}, {"type": "brand_new"}]
        }))
        .unwrap();

        assert_eq!(update.new_reaction[1], ReactionType::Unknown);
        let sender = update.sender().unwrap();
        assert!(sender.is_anonymous_admin());
    }

    #[test]
    fn user_reaction_keeps_chat_id() {
        let update: MessageReactionUpdated = serde_json::from_value(json!({
            "chat": {"id": -77, "type": "group", "title": "G"},
            "message_id": 3,
            "user": {"id": 12, "is_bot": false, "first_name": "Eve"}
        }))
        .unwrap();

        let sender = update.sender().unwrap();
        assert_eq!(sender.id(), 12);
        assert_eq!(sender.chat_id, Some(-77));
    }

    #[test]
    fn flattened_actor_chat_is_recovered() {
        let update: MessageReactionUpdated = serde_json::from_value(json!({
            "chat": {"id": -77, "type": "supergroup", "title": "S"},
            "message_id": 3,
            "id": -77,
            "type": "supergroup",
            "title": "S",
            "date": 1,
            "old_reaction": [],
            "new_reaction": []
        }))
        .unwrap();

        assert!(update.user.is_none());
        assert_eq!(update.actor_chat.as_ref().map(|c| c.id), Some(-77));
        assert!(update.sender().unwrap().is_anonymous_admin());
    }

    #[test]
    fn flattened_actor_user_is_recovered() {
        let update: MessageReactionUpdated = serde_json::from_value(json!({
            "chat": {"id": -77, "type": "group", "title": "G"},
            "message_id": 3,
            "id": 12,
            "is_bot": false,
            "first_name": "Eve",
            "date": 1,
            "old_reaction": [],
            "new_reaction": []
        }))
        .unwrap();

        assert!(update.actor_chat.is_none());
        assert_eq!(update.user.map(|u| u.first_name).as_deref(), Some("Eve"));
    }
}
