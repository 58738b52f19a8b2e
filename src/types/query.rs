// Queries initiated by a single user: inline mode, buttons and payments.

use serde::{Deserialize, Serialize};

use super::{MaybeInaccessibleMessage, User};

/// See <https://core.telegram.org/bots/api#inlinequery>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,

    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub offset: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<String>,
}

/// See <https://core.telegram.org/bots/api#choseninlineresult>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,

    #[serde(default)]
    pub query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
}

/// A press on an inline keyboard button.
///
/// See <https://core.telegram.org/bots/api#callbackquery>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,

    // Whoever pressed the button.
    pub from: User,

    // The message carrying the button; missing for inline-mode messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<MaybeInaccessibleMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,

    #[serde(default)]
    pub chat_instance: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}

/// See <https://core.telegram.org/bots/api#shippingquery>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuery {
    pub id: String,
    pub from: User,

    #[serde(default)]
    pub invoice_payload: String,

    #[serde(default)]
    pub shipping_address: ShippingAddress,
}

/// See <https://core.telegram.org/bots/api#precheckoutquery>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreCheckoutQuery {
    pub id: String,
    pub from: User,

    #[serde(default)]
    pub currency: String,

    // In the smallest units of the currency.
    #[serde(default)]
    pub total_amount: i64,

    #[serde(default)]
    pub invoice_payload: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_option_id: Option<String>,
}
