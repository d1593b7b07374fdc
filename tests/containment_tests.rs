//! Every invocation is answered exactly once, whatever goes wrong.

use signalcast::application::{AckState, SignalService, SlashCommand};
use signalcast::error::Error;
use signalcast::port::outbound::ChannelKind;
use signalcast::testkit::gateway::FakeGateway;
use signalcast::testkit::request;
use signalcast::testkit::responder::{RecordingResponder, Response};

const ENTRY_FAILURE: &str =
    "An error occurred while processing your entry command. Please try again.";

fn gateway() -> FakeGateway {
    FakeGateway::new()
        .with_channel("111", "signals", ChannelKind::Text)
        .with_channel("222", "vip", ChannelKind::Text)
}

#[tokio::test]
async fn parse_failure_gets_generic_reply() {
    let responder = RecordingResponder::new();
    let state = SignalService::new(gateway())
        .handle("entry", Err(Error::missing_option("price")), &responder)
        .await;

    assert_eq!(state, AckState::Replied);
    assert_eq!(
        responder.responses(),
        vec![Response::Reply(ENTRY_FAILURE.to_string())]
    );
}

#[tokio::test]
async fn generic_reply_names_the_command() {
    let responder = RecordingResponder::new();
    SignalService::new(gateway())
        .handle("stats", Err(Error::missing_option("date_range")), &responder)
        .await;

    assert_eq!(
        responder.final_text().as_deref(),
        Some("An error occurred while processing your stats command. Please try again.")
    );
}

#[tokio::test]
async fn panic_before_acknowledging_is_answered() {
    let responder = RecordingResponder::panicking_on_defer();
    let gw = gateway();
    let state = SignalService::new(gw.clone())
        .handle(
            "entry",
            Ok(SlashCommand::Entry(request::entry("<#111>"))),
            &responder,
        )
        .await;

    assert_eq!(state, AckState::Replied);
    assert!(gw.sent().is_empty());
    assert_eq!(
        responder.responses(),
        vec![Response::Reply(ENTRY_FAILURE.to_string())]
    );
}

#[tokio::test]
async fn panicking_channel_only_fails_itself() {
    let responder = RecordingResponder::new();
    let gw = gateway().panic_on_send("111");
    SignalService::new(gw.clone())
        .handle(
            "entry",
            Ok(SlashCommand::Entry(request::entry("<#111> <#222>"))),
            &responder,
        )
        .await;

    assert_eq!(gw.sent().len(), 1);
    assert_eq!(
        responder.final_text().as_deref(),
        Some("✅ Signal sent successfully to: vip\n❌ Failed to send to: 111: internal error")
    );
}

#[tokio::test]
async fn responder_outage_does_not_escape() {
    let responder = RecordingResponder::failing();
    let gw = gateway();
    let state = SignalService::new(gw.clone())
        .handle(
            "entry",
            Ok(SlashCommand::Entry(request::entry("<#111>"))),
            &responder,
        )
        .await;

    assert_eq!(state, AckState::Unacknowledged);
    assert!(responder.responses().is_empty());
    assert!(gw.sent().is_empty());
}

#[tokio::test]
async fn failure_after_deferring_completes_the_deferred_reply() {
    let responder = RecordingResponder::failing_edits(1);
    let gw = gateway();
    let state = SignalService::new(gw.clone())
        .handle(
            "entry",
            Ok(SlashCommand::Entry(request::entry("<#111>"))),
            &responder,
        )
        .await;

    assert_eq!(state, AckState::Replied);
    assert_eq!(gw.sent().len(), 1);
    assert_eq!(
        responder.responses(),
        vec![Response::Defer, Response::Edit(ENTRY_FAILURE.to_string())]
    );
}

#[test]
fn handle_runs_on_a_plain_executor() {
    let responder = RecordingResponder::new();
    let state = tokio_test::block_on(SignalService::new(gateway()).handle(
        "stats",
        Ok(SlashCommand::Stats(request::stats("<#111>"))),
        &responder,
    ));

    assert_eq!(state, AckState::Replied);
    assert_eq!(
        responder.final_text().as_deref(),
        Some("✅ Stats sent successfully to: signals")
    );
}

#[cfg(feature = "discord")]
#[tokio::test]
async fn unregistered_command_gets_generic_reply() {
    use signalcast::adapter::inbound::discord::{parse_command, CommandOptions};

    let responder = RecordingResponder::new();
    let gw = gateway();
    let parsed = parse_command("ping", &CommandOptions::new());
    let state = SignalService::new(gw.clone())
        .handle("ping", parsed, &responder)
        .await;

    assert_eq!(state, AckState::Replied);
    assert!(gw.sent().is_empty());
    assert_eq!(
        responder.responses(),
        vec![Response::Reply(
            "An error occurred while processing your ping command. Please try again.".to_string()
        )]
    );
}
