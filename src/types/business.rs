// Business account updates.

use serde::{Deserialize, Serialize};

use super::{Chat, User};

/// The bot was connected to or disconnected from a business account.
///
/// See <https://core.telegram.org/bots/api#businessconnection>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessConnection {
    pub id: String,

    // The business account owner.
    pub user: User,

    #[serde(default)]
    pub user_chat_id: i64,

    #[serde(default)]
    pub date: i64,

    #[serde(default)]
    pub is_enabled: bool,
}

/// See <https://core.telegram.org/bots/api#businessmessagesdeleted>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessMessagesDeleted {
    pub business_connection_id: String,
    pub chat: Chat,

    #[serde(default)]
    pub message_ids: Vec<i32>,
}
