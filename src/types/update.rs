// The incoming update envelope and its variant tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    BusinessConnection, BusinessMessagesDeleted, CallbackQuery, ChatBoostRemoved,
    ChatBoostUpdated, ChatJoinRequest, ChatMemberUpdated, ChosenInlineResult, InlineQuery,
    Message, MessageReactionCountUpdated, MessageReactionUpdated, Poll, PollAnswer,
    PreCheckoutQuery, ShippingQuery,
};

/// An incoming update.
///
/// Telegram populates exactly one of the optional slots. Slots this crate does not know about
/// are dropped on deserialization, which leaves an envelope with no populated slot at all.
///
/// See <https://core.telegram.org/bots/api#update>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_post: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_channel_post: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_connection: Option<BusinessConnection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_message: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_business_message: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_business_messages: Option<BusinessMessagesDeleted>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reaction: Option<MessageReactionUpdated>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reaction_count: Option<MessageReactionCountUpdated>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_query: Option<ShippingQuery>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_checkout_query: Option<PreCheckoutQuery>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_answer: Option<PollAnswer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_chat_member: Option<ChatMemberUpdated>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_member: Option<ChatMemberUpdated>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_join_request: Option<ChatJoinRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_boost: Option<ChatBoostUpdated>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_chat_boost: Option<ChatBoostRemoved>,
}

/// Tag of a populated [`Update`] slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    BusinessConnection,
    BusinessMessage,
    EditedBusinessMessage,
    DeletedBusinessMessages,
    MessageReaction,
    MessageReactionCount,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    Poll,
    PollAnswer,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
    ChatBoost,
    RemovedChatBoost,
}

impl UpdateKind {
    pub const ALL: [UpdateKind; 22] = [
        Self::Message,
        Self::EditedMessage,
        Self::ChannelPost,
        Self::EditedChannelPost,
        Self::BusinessConnection,
        Self::BusinessMessage,
        Self::EditedBusinessMessage,
        Self::DeletedBusinessMessages,
        Self::MessageReaction,
        Self::MessageReactionCount,
        Self::InlineQuery,
        Self::ChosenInlineResult,
        Self::CallbackQuery,
        Self::ShippingQuery,
        Self::PreCheckoutQuery,
        Self::Poll,
        Self::PollAnswer,
        Self::MyChatMember,
        Self::ChatMember,
        Self::ChatJoinRequest,
        Self::ChatBoost,
        Self::RemovedChatBoost,
    ];

    /// The field name used by the Bot API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::EditedMessage => "edited_message",
            Self::ChannelPost => "channel_post",
            Self::EditedChannelPost => "edited_channel_post",
            Self::BusinessConnection => "business_connection",
            Self::BusinessMessage => "business_message",
            Self::EditedBusinessMessage => "edited_business_message",
            Self::DeletedBusinessMessages => "deleted_business_messages",
            Self::MessageReaction => "message_reaction",
            Self::MessageReactionCount => "message_reaction_count",
            Self::InlineQuery => "inline_query",
            Self::ChosenInlineResult => "chosen_inline_result",
            Self::CallbackQuery => "callback_query",
            Self::ShippingQuery => "shipping_query",
            Self::PreCheckoutQuery => "pre_checkout_query",
            Self::Poll => "poll",
            Self::PollAnswer => "poll_answer",
            Self::MyChatMember => "my_chat_member",
            Self::ChatMember => "chat_member",
            Self::ChatJoinRequest => "chat_join_request",
            Self::ChatBoost => "chat_boost",
            Self::RemovedChatBoost => "removed_chat_boost",
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Update {
    pub fn has(&self, kind: UpdateKind) -> bool {
        match kind {
            UpdateKind::Message => self.message.is_some(),
            UpdateKind::EditedMessage => self.edited_message.is_some(),
            UpdateKind::ChannelPost => self.channel_post.is_some(),
            UpdateKind::EditedChannelPost => self.edited_channel_post.is_some(),
            UpdateKind::BusinessConnection => self.business_connection.is_some(),
            UpdateKind::BusinessMessage => self.business_message.is_some(),
            UpdateKind::EditedBusinessMessage => self.edited_business_message.is_some(),
            UpdateKind::DeletedBusinessMessages => self.deleted_business_messages.is_some(),
            UpdateKind::MessageReaction => self.message_reaction.is_some(),
            UpdateKind::MessageReactionCount => self.message_reaction_count.is_some(),
            UpdateKind::InlineQuery => self.inline_query.is_some(),
            UpdateKind::ChosenInlineResult => self.chosen_inline_result.is_some(),
            UpdateKind::CallbackQuery => self.callback_query.is_some(),
            UpdateKind::ShippingQuery => self.shipping_query.is_some(),
            UpdateKind::PreCheckoutQuery => self.pre_checkout_query.is_some(),
            UpdateKind::Poll => self.poll.is_some(),
            UpdateKind::PollAnswer => self.poll_answer.is_some(),
            UpdateKind::MyChatMember => self.my_chat_member.is_some(),
            UpdateKind::ChatMember => self.chat_member.is_some(),
            UpdateKind::ChatJoinRequest => self.chat_join_request.is_some(),
            UpdateKind::ChatBoost => self.chat_boost.is_some(),
            UpdateKind::RemovedChatBoost => self.removed_chat_boost.is_some(),
        }
    }

    /// Every populated slot, in declaration order.
    pub fn populated(&self) -> impl Iterator<Item = UpdateKind> + '_ {
        UpdateKind::ALL
            .into_iter()
            .filter(move |kind| self.has(*kind))
    }

    /// The populated slot, or `None` unless exactly one slot is populated.
    pub fn kind(&self) -> Option<UpdateKind> {
        let mut populated = self.populated();
        match (populated.next(), populated.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_names_are_unique() {
        let names: std::collections::HashSet<_> =
            UpdateKind::ALL.iter().map(|kind| kind.as_str()).collect();
        assert_eq!(names.len(), UpdateKind::ALL.len());
        assert_eq!(UpdateKind::CallbackQuery.to_string(), "callback_query");
    }

    #[test]
    fn message_kind_is_detected() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 1,
            "message": {"message_id": 1, "date": 1, "chat": {"id": 1, "type": "private"}}
        }))
        .unwrap();
        assert_eq!(update.kind(), Some(UpdateKind::Message));
        assert!(update.has(UpdateKind::Message));
    }

    #[test]
    fn poll_kind_is_detected() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 8,
            "poll": {"id": "p", "question": "?", "options": [{"text": "a", "voter_count": 0}]}
        }))
        .unwrap();
        assert_eq!(update.kind(), Some(UpdateKind::Poll));
    }

    #[test]
    fn unknown_slot_leaves_update_empty() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 2,
            "purchased_paid_media": {"from": {"id": 1, "first_name": "x"}, "paid_media_payload": "p"}
        }))
        .unwrap();
        assert_eq!(update.kind(), None);
        assert_eq!(update.populated().count(), 0);
    }

    #[test]
    fn two_slots_have_no_single_kind() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 3,
            "message": {"message_id": 1, "date": 1, "chat": {"id": 1, "type": "private"}},
            "edited_message": {"message_id": 1, "date": 1, "chat": {"id": 1, "type": "private"}}
        }))
        .unwrap();
        assert_eq!(update.kind(), None);
        assert_eq!(update.populated().count(), 2);
    }
}
