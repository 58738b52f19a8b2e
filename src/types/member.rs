// Chat membership changes and join requests.

use serde::{Deserialize, Serialize};

use super::{Chat, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Kicked,

    #[default]
    #[serde(other)]
    Unknown,
}

/// A member of a chat. Status-specific rights and restrictions are not modelled.
///
/// See <https://core.telegram.org/bots/api#chatmember>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMember {
    #[serde(default)]
    pub status: ChatMemberStatus,
    pub user: User,
}

/// See <https://core.telegram.org/bots/api#chatmemberupdated>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,

    // The user who caused the change; equals the member when they joined on their own.
    pub from: User,

    #[serde(default)]
    pub date: i64,

    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub via_join_request: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub via_chat_folder_invite_link: bool,
}

/// See <https://core.telegram.org/bots/api#chatjoinrequest>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatJoinRequest {
    pub chat: Chat,
    pub from: User,

    #[serde(default)]
    pub user_chat_id: i64,

    #[serde(default)]
    pub date: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
