// Accounts and conversations referenced by updates.

use serde::{Deserialize, Serialize};

/// A Telegram user or bot.
///
/// See <https://core.telegram.org/bots/api#user>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    #[serde(default)]
    pub is_bot: bool,

    #[serde(default)]
    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl User {
    /// First name followed by the last name, if the user has one.
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,

    // Also used when the payload omits the type entirely.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A chat: private conversation, group, supergroup or channel.
///
/// See <https://core.telegram.org/bots/api#chat>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,

    #[serde(rename = "type", default)]
    pub kind: ChatType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_forum: bool,
}

impl Chat {
    // Groups, supergroups and channels carry a title; private chats don't.
    pub fn is_group_like(&self) -> bool {
        self.title.is_some()
    }
}
