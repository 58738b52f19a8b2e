pub mod reencode;
pub use reencode::reencode;

pub mod send_reply_or_plain;
pub use send_reply_or_plain::send_reply_or_plain;
