// Chat boosts and where they come from.

use serde::{Deserialize, Serialize};

use super::{Chat, User};

/// How a boost was obtained.
///
/// See <https://core.telegram.org/bots/api#chatboostsource>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ChatBoostSource {
    /// A Telegram Premium subscriber boosted the chat.
    Premium { user: User },

    /// A gift code was used by this user.
    GiftCode { user: User },

    /// A giveaway; the winner is unknown until the prize is claimed.
    Giveaway {
        giveaway_message_id: i32,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        user: Option<User>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        prize_star_count: Option<i64>,

        #[serde(default)]
        is_unclaimed: bool,
    },

    #[serde(other)]
    Unknown,
}

impl ChatBoostSource {
    /// The user the boost can be attributed to, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Premium { user } | Self::GiftCode { user } => Some(user),
            Self::Giveaway { user, .. } => user.as_ref(),
            Self::Unknown => None,
        }
    }
}

/// See <https://core.telegram.org/bots/api#chatboost>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoost {
    pub boost_id: String,

    #[serde(default)]
    pub add_date: i64,

    #[serde(default)]
    pub expiration_date: i64,

    pub source: ChatBoostSource,
}

/// See <https://core.telegram.org/bots/api#chatboostupdated>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoostUpdated {
    pub chat: Chat,
    pub boost: ChatBoost,
}

/// See <https://core.telegram.org/bots/api#chatboostremoved>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBoostRemoved {
    pub chat: Chat,
    pub boost_id: String,

    #[serde(default)]
    pub remove_date: i64,

    pub source: ChatBoostSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source(value: serde_json::Value) -> ChatBoostSource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn premium_and_gift_code_have_a_user() {
        let premium = source(json!({"source": "premium", "user": {"id": 1, "first_name": "A"}}));
        assert_eq!(premium.user().map(|u| u.id), Some(1));

        let gift = source(json!({"source": "gift_code", "user": {"id": 2, "first_name": "B"}}));
        assert_eq!(gift.user().map(|u| u.id), Some(2));
    }

    #[test]
    fn unclaimed_giveaway_has_no_user() {
        let giveaway = source(json!({
            "source": "giveaway",
            "giveaway_message_id": 100,
            "is_unclaimed": true
        }));
        assert!(giveaway.user().is_none());

        let claimed = source(json!({
            "source": "giveaway",
            "giveaway_message_id": 100,
            "user": {"id": 3, "first_name": "C"}
        }));
        assert_eq!(claimed.user().map(|u| u.id), Some(3));
    }

    #[test]
    fn unknown_source_is_tolerated() {
        let unknown = source(json!({"source": "lottery", "ticket": 5}));
        assert_eq!(unknown, ChatBoostSource::Unknown);
        assert!(unknown.user().is_none());
    }
}
