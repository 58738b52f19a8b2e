// Sends text back to the chat of a message, as a reply in groups and plainly in private chats.

use crate::types;
use teloxide::{
    prelude::*,
    types::{ChatId, Message, MessageId, ReplyParameters, ThreadId},
};

pub async fn send_reply_or_plain(
    bot: &Bot,
    msg: &types::Message,
    text: impl Into<String>,
) -> Result<Message, teloxide::RequestError> {
    let chat_id = ChatId(msg.chat.id);
    let thread_id = msg.message_thread_id.map(|id| ThreadId(MessageId(id)));

    let mut req = bot.send_message(chat_id, text.into());

    // Replies only make sense where several people talk
    if msg.chat.is_group_like() {
        let params = ReplyParameters::new(MessageId(msg.message_id)).allow_sending_without_reply();
        req = req.reply_parameters(params);
    }

    if let Some(tid) = thread_id {
        req = req.message_thread_id(tid);
    }

    req.await
}
