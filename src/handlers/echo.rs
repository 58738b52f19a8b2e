// Echoes every message back, reading it through the normalized context.

use crate::{
    context::Context,
    handlers::utils::{reencode, send_reply_or_plain},
    types::{self, Sender},
};
use teloxide::{
    prelude::*,
    types::{Me, Update},
};
use tracing::{debug, error};

pub async fn echo(bot: Bot, me: Me, update: Update) -> ResponseResult<()> {
    let envelope = reencode::<_, types::Update>(&update);
    let receiver = reencode::<_, types::User>(&me.user);
    let (envelope, receiver) = match (envelope, receiver) {
        (Ok(envelope), Ok(receiver)) => (envelope, receiver),
        (Err(e), _) | (_, Err(e)) => {
            error!("Could not normalize update: {e}");
            return Ok(());
        }
    };

    let ctx = Context::new(&envelope, receiver, None);

    // Media without a caption, service messages and the like have nothing to echo.
    let Some(message) = ctx.effective_message.as_deref() else {
        return Ok(());
    };
    let Some(text) = message.text.as_deref().filter(|t| !t.is_empty()) else {
        return Ok(());
    };

    debug!(
        "Echoing in chat {} for sender {:?}, args = {:?}",
        message.chat.id,
        ctx.effective_sender.as_ref().map(Sender::id),
        ctx.args()
    );

    if let Err(e) = send_reply_or_plain(&bot, message, text).await {
        error!("Telegram send failed: {e}");
        return Err(e);
    }

    Ok(())
}
