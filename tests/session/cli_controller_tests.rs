use marketplace_session::session::interfaces::cli::controllers::session_cli_controller::{
    handle_session_command, SessionCliError, SessionCommand,
};

use crate::support::{create_harness, user_credential, FakeVerdict, CREDENTIAL_KEY};

#[tokio::test]
async fn whoami_prints_identity() {
    let harness = create_harness();
    harness.storage.put(CREDENTIAL_KEY, &user_credential("u1"));

    let output = handle_session_command(&*harness.service, SessionCommand::Whoami)
        .await
        .expect("command succeeds");

    assert_eq!(output, "u1");
}

#[tokio::test]
async fn whoami_reports_missing_session() {
    let harness = create_harness();

    let output = handle_session_command(&*harness.service, SessionCommand::Whoami)
        .await
        .expect("command succeeds");

    assert_eq!(output, "not signed in (no credential is stored)");
}

#[tokio::test]
async fn sign_in_stores_and_resolves() {
    let harness = create_harness();

    let output = handle_session_command(
        &*harness.service,
        SessionCommand::SignIn {
            credential: user_credential("u7"),
        },
    )
    .await
    .expect("command succeeds");

    assert_eq!(output, "signed in as u7");
    assert_eq!(
        harness.storage.value(CREDENTIAL_KEY),
        Some(user_credential("u7"))
    );
}

#[tokio::test]
async fn sign_in_rejects_non_compact_credential() {
    let harness = create_harness();

    let result = handle_session_command(
        &*harness.service,
        SessionCommand::SignIn {
            credential: "not-a-token".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(SessionCliError::Validation(_))));
    assert_eq!(harness.storage.set_calls(), 0);
}

#[tokio::test]
async fn sign_in_with_rejected_credential_reports_failure() {
    let harness = create_harness();
    harness.authority.set_verdict(FakeVerdict::Rejected);

    let output = handle_session_command(
        &*harness.service,
        SessionCommand::SignIn {
            credential: user_credential("u7"),
        },
    )
    .await
    .expect("command succeeds");

    assert!(output.starts_with("credential stored but not accepted"));
    assert_eq!(harness.storage.value(CREDENTIAL_KEY), None);
}

#[tokio::test]
async fn sign_out_clears_session() {
    let harness = create_harness();
    harness.storage.put(CREDENTIAL_KEY, &user_credential("u1"));

    let output = handle_session_command(&*harness.service, SessionCommand::SignOut)
        .await
        .expect("command succeeds");

    assert_eq!(output, "signed out");
    assert_eq!(harness.storage.value(CREDENTIAL_KEY), None);
}

#[tokio::test]
async fn check_does_not_touch_storage() {
    let harness = create_harness();
    harness.authority.set_verdict(FakeVerdict::Rejected);

    let output = handle_session_command(
        &*harness.service,
        SessionCommand::Check {
            credential: user_credential("u1"),
        },
    )
    .await
    .expect("command succeeds");

    assert_eq!(output, "invalid");
    assert_eq!(harness.storage.get_calls(), 0);
    assert_eq!(harness.storage.set_calls(), 0);
}

#[tokio::test]
async fn check_rejects_blank_credential() {
    let harness = create_harness();

    let result = handle_session_command(
        &*harness.service,
        SessionCommand::Check {
            credential: "  ".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(SessionCliError::Domain(_))));
    assert_eq!(harness.authority.check_calls(), 0);
}
