//! Router tests
//!
//! Routing is pure, so these run without a Bot API server.

use assert_matches::assert_matches;

use minechain_bot::{
    handlers::{DeliveryMode, InboundEvent, Reply, ResponseSink},
    models::{ButtonAction, CallbackAction, ResponseBody},
    Command,
};

use crate::helpers::*;

fn all_commands() -> Vec<Command> {
    vec![
        Command::Start,
        Command::Website,
        Command::Price,
        Command::Contract,
        Command::About,
        Command::Help,
        Command::Webapp,
        Command::Balance,
        Command::Airdrop,
        Command::Vesting,
        Command::Mint,
        Command::Nft,
    ]
}

#[test]
fn every_command_responds() {
    let router = test_router();

    for command in all_commands() {
        let reply = router.route(&InboundEvent::Command(command.clone()));
        let response = reply.response().unwrap_or_else(|| panic!("/{} gave no response", command.name()));
        assert!(!response.text_content().is_empty(), "/{} is empty", command.name());
    }
}

#[test]
fn button_urls_come_from_configuration() {
    let router = test_router();
    let allowed = [
        TEST_WEBSITE,
        TEST_CHART_URL,
        TEST_DOCS_URL,
        TEST_ARZIA_URL,
        TEST_WEBAPP_URL,
        "https://etherscan.io/token/0xABC",
    ];

    for command in all_commands() {
        let response = router.route_command(&command);
        for button in response.buttons() {
            if let Some(url) = button.target_url() {
                assert!(
                    allowed.iter().any(|prefix| url.as_str().starts_with(prefix)),
                    "/{} button {:?} points at unconfigured {}",
                    command.name(),
                    button.label,
                    url
                );
            }
        }
    }
}

#[test]
fn contract_explorer_button_is_prefix_plus_address() {
    let response = test_router().route_command(&Command::Contract);

    let explorer = response.find_button("Explorer").expect("explorer button");
    assert_matches!(
        &explorer.action,
        ButtonAction::Url(url) if url.as_str() == "https://etherscan.io/token/0xABC"
    );
    assert!(response.text_content().contains(TEST_TOKEN_ADDRESS));
}

#[test]
fn website_and_about_link_to_configured_pages() {
    let router = test_router();

    let website = router.route_command(&Command::Website);
    assert_eq!(
        website.find_button("Website").and_then(|b| b.target_url()).map(|u| u.as_str()),
        Some(TEST_WEBSITE)
    );

    let about = router.route_command(&Command::About);
    assert_eq!(
        about.find_button("Documentation").and_then(|b| b.target_url()).map(|u| u.as_str()),
        Some(TEST_DOCS_URL)
    );
    assert_eq!(
        about.find_button("ARZIA").and_then(|b| b.target_url()).map(|u| u.as_str()),
        Some(TEST_ARZIA_URL)
    );
}

#[test]
fn start_sends_welcome_photo() {
    let response = test_router().route_command(&Command::Start);

    assert_matches!(
        &response.body,
        ResponseBody::Photo { url, .. } if url.as_str() == TEST_PHOTO_URL
    );
}

#[test]
fn start_over_and_start_callbacks_show_welcome() {
    let router = test_router();
    let welcome = router.route_command(&Command::Start);

    for data in ["start_over", "start"] {
        let reply = router.route(&InboundEvent::Callback(data.to_string()));
        assert_eq!(reply.response(), Some(&welcome), "callback {data}");
    }
}

#[test]
fn menu_callbacks_mirror_commands() {
    let router = test_router();
    let pairs = [
        ("website", Command::Website),
        ("contract", Command::Contract),
        ("about", Command::About),
        ("help", Command::Help),
    ];

    for (data, command) in pairs {
        let reply = router.route(&InboundEvent::Callback(data.to_string()));
        assert_eq!(reply.response(), Some(&router.route_command(&command)), "callback {data}");
    }
}

#[test]
fn copy_contract_is_a_toast_with_the_address() {
    let reply = test_router().route(&InboundEvent::Callback("copy_contract".to_string()));

    assert_matches!(reply, Reply::Acknowledge(notice) if notice.text.contains(TEST_TOKEN_ADDRESS));
}

#[test]
fn unknown_callback_is_ignored() {
    let router = test_router();

    for data in ["", "stake", "PRICE", "lang:en", "refresh_price "] {
        assert_eq!(router.route(&InboundEvent::Callback(data.to_string())), Reply::Ignore);
    }
}

#[tokio::test]
async fn unknown_callback_delivers_nothing() {
    let router = test_router();
    let sink = RecordingSink::new(DeliveryMode::EditInPlace);

    let reply = router
        .dispatch(&InboundEvent::Callback("definitely_not_a_button".to_string()), &sink)
        .await
        .expect("dispatch");

    assert_eq!(reply, Reply::Ignore);
    assert!(sink.delivered().is_empty());
}

#[tokio::test]
async fn refresh_price_renders_new_values_each_time() {
    let router = router_with_prices(vec![0.006, 0.014]);
    let sink = RecordingSink::new(DeliveryMode::EditInPlace);
    let event = InboundEvent::Callback(CallbackAction::RefreshPrice.to_string());

    router.dispatch(&event, &sink).await.expect("first refresh");
    router.dispatch(&event, &sink).await.expect("second refresh");

    let delivered = sink.delivered();
    assert_eq!(delivered.len(), 2);
    assert!(delivered[0].text_content().contains("$0.006000"));
    assert!(delivered[1].text_content().contains("$0.014000"));
    assert!(delivered
        .iter()
        .all(|r| r.find_button("Refresh").is_some() && !r.is_photo()));
    assert_eq!(sink.mode(), DeliveryMode::EditInPlace);
}

#[test]
fn mock_price_view_is_labelled_as_simulated() {
    let response = test_router().route_command(&Command::Price);

    assert!(response.text_content().contains("Simulated data"));
}

#[test]
fn app_commands_open_the_webapp() {
    let router = test_router();

    for command in [
        Command::Webapp,
        Command::Balance,
        Command::Airdrop,
        Command::Vesting,
        Command::Mint,
        Command::Nft,
    ] {
        let response = router.route_command(&command);
        assert!(
            response.buttons().any(|b| matches!(&b.action, ButtonAction::WebApp(url) if url.as_str().starts_with(TEST_WEBAPP_URL))),
            "/{} has no web app button",
            command.name()
        );
    }
}
