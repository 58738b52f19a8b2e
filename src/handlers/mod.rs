mod echo;
pub use echo::echo;

pub mod utils;

use teloxide::{dispatching::UpdateHandler, prelude::*, types::Update};

pub fn get_update_handler() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message().endpoint(echo)
}
