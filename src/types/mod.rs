// Telegram Bot API objects, limited to what update normalization reads.

pub mod boost;
pub use boost::{ChatBoost, ChatBoostRemoved, ChatBoostSource, ChatBoostUpdated};

pub mod business;
pub use business::{BusinessConnection, BusinessMessagesDeleted};

pub mod member;
pub use member::{ChatJoinRequest, ChatMember, ChatMemberStatus, ChatMemberUpdated};

pub mod message;
pub use message::{InaccessibleMessage, MaybeInaccessibleMessage, Message};

pub mod poll;
pub use poll::{Poll, PollAnswer, PollOption};

pub mod query;
pub use query::{
    CallbackQuery, ChosenInlineResult, InlineQuery, PreCheckoutQuery, ShippingAddress,
    ShippingQuery,
};

pub mod reaction;
pub use reaction::{MessageReactionCountUpdated, MessageReactionUpdated, ReactionCount, ReactionType};

pub mod sender;
pub use sender::{Sender, SenderIdentity};

pub mod update;
pub use update::{Update, UpdateKind};

pub mod user;
pub use user::{Chat, ChatType, User};
