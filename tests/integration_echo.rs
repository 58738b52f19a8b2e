use serial_test::serial;
use teloxide_tests::{MockBot, MockMessageText};
use tgcontext_rs::handlers::get_update_handler;

#[tokio::test]
#[serial]
async fn echo_repeats_message_text() {
    let mock = MockMessageText::new().text("Hello");
    let handler = get_update_handler();

    let mut bot = MockBot::new(mock, handler);

    bot.dispatch().await;

    let binding = bot.get_responses();
    let last = binding
        .sent_messages
        .last()
        .expect("At least 1 sent message was expected");

    assert_eq!(last.text(), Some("Hello"));
}

#[tokio::test]
#[serial]
async fn echo_keeps_the_whole_text() {
    let mock = MockMessageText::new().text("/echo Hello   world");
    let handler = get_update_handler();

    let mut bot = MockBot::new(mock, handler);

    bot.dispatch().await;

    let binding = bot.get_responses();
    let last = binding.sent_messages.last().expect("no response");

    assert_eq!(last.text(), Some("/echo Hello   world"));
}
