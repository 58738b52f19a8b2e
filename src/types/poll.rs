// Polls and answers to them.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

use super::{Chat, Sender, SenderIdentity, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,

    #[serde(default)]
    pub voter_count: i64,
}

/// See <https://core.telegram.org/bots/api#poll>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,

    #[serde(default)]
    pub question: String,

    #[serde(default)]
    pub options: Vec<PollOption>,

    #[serde(default)]
    pub total_voter_count: i64,

    #[serde(default)]
    pub is_closed: bool,

    #[serde(default)]
    pub is_anonymous: bool,

    // "regular" or "quiz".
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub allows_multiple_answers: bool,
}

/// A user changed their answer in a non-anonymous poll.
///
/// See <https://core.telegram.org/bots/api#pollanswer>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollAnswer {
    pub poll_id: String,

    // Set when the voter is a chat rather than a user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voter_chat: Option<Chat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(default)]
    pub option_ids: Vec<i64>,
}

impl PollAnswer {
    /// The voter. Poll answers are not tied to a chat, so no `chat_id` is attached.
    pub fn sender(&self) -> Option<Sender> {
        match (&self.voter_chat, &self.user) {
            (Some(chat), _) => Some(Sender::from_chat(chat.clone(), None)),
            (None, Some(user)) => Some(Sender::from_user(user.clone(), None)),
            (None, None) => None,
        }
    }
}

// teloxide writes the voter's fields directly onto the answer instead of under `voter_chat`/`user`.
impl<'de> Deserialize<'de> for PollAnswer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            poll_id: String,
            #[serde(default)]
            voter_chat: Option<Chat>,
            #[serde(default)]
            user: Option<User>,
            #[serde(default)]
            option_ids: Vec<i64>,
            #[serde(flatten)]
            rest: Map<String, Value>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let (user, voter_chat) = match (wire.user, wire.voter_chat) {
            (None, None) => SenderIdentity::into_pair(
                SenderIdentity::from_flattened(wire.rest).map_err(de::Error::custom)?,
            ),
            pair => pair,
        };

        Ok(Self {
            poll_id: wire.poll_id,
            voter_chat,
            user,
            option_ids: wire.option_ids,
        })
    }
}
