// One extractor per update kind. Each pulls whatever facts its slot carries directly.

use std::borrow::Cow;

use crate::types::{Chat, MaybeInaccessibleMessage, Message, Sender, Update, UpdateKind, User};

/// Facts carried directly by a single update slot.
#[derive(Debug, Default)]
pub(crate) struct Facts<'a> {
    pub message: Option<Cow<'a, Message>>,
    pub chat: Option<&'a Chat>,
    pub user: Option<&'a User>,
    pub sender: Option<Sender>,
}

pub(crate) type Extractor = for<'a> fn(&'a Update) -> Facts<'a>;

impl UpdateKind {
    pub(crate) fn extractor(self) -> Extractor {
        match self {
            Self::Message => message,
            Self::EditedMessage => edited_message,
            Self::ChannelPost => channel_post,
            Self::EditedChannelPost => edited_channel_post,
            Self::BusinessConnection => business_connection,
            Self::BusinessMessage => business_message,
            Self::EditedBusinessMessage => edited_business_message,
            Self::DeletedBusinessMessages => deleted_business_messages,
            Self::MessageReaction => message_reaction,
            Self::MessageReactionCount => message_reaction_count,
            Self::InlineQuery => inline_query,
            Self::ChosenInlineResult => chosen_inline_result,
            Self::CallbackQuery => callback_query,
            Self::ShippingQuery => shipping_query,
            Self::PreCheckoutQuery => pre_checkout_query,
            Self::Poll => poll,
            Self::PollAnswer => poll_answer,
            Self::MyChatMember => my_chat_member,
            Self::ChatMember => chat_member,
            Self::ChatJoinRequest => chat_join_request,
            Self::ChatBoost => chat_boost,
            Self::RemovedChatBoost => removed_chat_boost,
        }
    }
}

fn authored(message: Option<&Message>) -> Facts<'_> {
    let Some(message) = message else {
        return Facts::default();
    };
    Facts {
        chat: Some(&message.chat),
        user: message.from.as_ref(),
        message: Some(Cow::Borrowed(message)),
        sender: None,
    }
}

// Channel posts have no single author.
fn posted(post: Option<&Message>) -> Facts<'_> {
    let Some(post) = post else {
        return Facts::default();
    };
    Facts {
        chat: Some(&post.chat),
        message: Some(Cow::Borrowed(post)),
        ..Facts::default()
    }
}

fn chat_only(chat: Option<&Chat>) -> Facts<'_> {
    Facts {
        chat,
        ..Facts::default()
    }
}

fn user_only(user: Option<&User>) -> Facts<'_> {
    Facts {
        user,
        ..Facts::default()
    }
}

fn user_in_chat<'a>(user: Option<&'a User>, chat: Option<&'a Chat>) -> Facts<'a> {
    Facts {
        user,
        chat,
        ..Facts::default()
    }
}

fn message(update: &Update) -> Facts<'_> {
    authored(update.message.as_ref())
}

fn edited_message(update: &Update) -> Facts<'_> {
    authored(update.edited_message.as_ref())
}

fn channel_post(update: &Update) -> Facts<'_> {
    posted(update.channel_post.as_ref())
}

fn edited_channel_post(update: &Update) -> Facts<'_> {
    posted(update.edited_channel_post.as_ref())
}

fn business_connection(update: &Update) -> Facts<'_> {
    user_only(update.business_connection.as_ref().map(|c| &c.user))
}

fn business_message(update: &Update) -> Facts<'_> {
    authored(update.business_message.as_ref())
}

fn edited_business_message(update: &Update) -> Facts<'_> {
    authored(update.edited_business_message.as_ref())
}

fn deleted_business_messages(update: &Update) -> Facts<'_> {
    chat_only(update.deleted_business_messages.as_ref().map(|d| &d.chat))
}

fn message_reaction(update: &Update) -> Facts<'_> {
    let Some(reaction) = update.message_reaction.as_ref() else {
        return Facts::default();
    };
    Facts {
        chat: Some(&reaction.chat),
        user: reaction.user.as_ref(),
        sender: reaction.sender(),
        message: None,
    }
}

fn message_reaction_count(update: &Update) -> Facts<'_> {
    chat_only(update.message_reaction_count.as_ref().map(|r| &r.chat))
}

fn inline_query(update: &Update) -> Facts<'_> {
    user_only(update.inline_query.as_ref().map(|q| &q.from))
}

fn chosen_inline_result(update: &Update) -> Facts<'_> {
    user_only(update.chosen_inline_result.as_ref().map(|r| &r.from))
}

fn callback_query(update: &Update) -> Facts<'_> {
    let Some(query) = update.callback_query.as_ref() else {
        return Facts::default();
    };
    let mut facts = user_only(Some(&query.from));

    if let Some(attached) = &query.message {
        let chat = attached.chat();
        facts.message = Some(match attached {
            MaybeInaccessibleMessage::Message(message) => Cow::Borrowed(message.as_ref()),
            MaybeInaccessibleMessage::Inaccessible(stub) => Cow::Owned(stub.to_message()),
        });
        facts.chat = Some(chat);
        // The button presser acts here, not the author of the message carrying the button.
        facts.sender = Some(Sender::from_user(query.from.clone(), Some(chat.id)));
    }
    facts
}

fn shipping_query(update: &Update) -> Facts<'_> {
    user_only(update.shipping_query.as_ref().map(|q| &q.from))
}

fn pre_checkout_query(update: &Update) -> Facts<'_> {
    user_only(update.pre_checkout_query.as_ref().map(|q| &q.from))
}

// Polls are anonymous and not tied to a chat.
fn poll(_: &Update) -> Facts<'_> {
    Facts::default()
}

fn poll_answer(update: &Update) -> Facts<'_> {
    let Some(answer) = update.poll_answer.as_ref() else {
        return Facts::default();
    };
    Facts {
        user: answer.user.as_ref(),
        sender: answer.sender(),
        ..Facts::default()
    }
}

fn my_chat_member(update: &Update) -> Facts<'_> {
    let member = update.my_chat_member.as_ref();
    user_in_chat(member.map(|m| &m.from), member.map(|m| &m.chat))
}

fn chat_member(update: &Update) -> Facts<'_> {
    let member = update.chat_member.as_ref();
    user_in_chat(member.map(|m| &m.from), member.map(|m| &m.chat))
}

fn chat_join_request(update: &Update) -> Facts<'_> {
    let request = update.chat_join_request.as_ref();
    user_in_chat(request.map(|r| &r.from), request.map(|r| &r.chat))
}

fn chat_boost(update: &Update) -> Facts<'_> {
    let boost = update.chat_boost.as_ref();
    user_in_chat(
        boost.and_then(|b| b.boost.source.user()),
        boost.map(|b| &b.chat),
    )
}

fn removed_chat_boost(update: &Update) -> Facts<'_> {
    let removed = update.removed_chat_boost.as_ref();
    user_in_chat(
        removed.and_then(|r| r.source.user()),
        removed.map(|r| &r.chat),
    )
}
