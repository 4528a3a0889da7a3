//! End-to-end dispatch scenarios: show/lock/unlock round trips, help
//! routing, and the configuration guard.

use mutexbot::{ClaimStore, DispatchError, Dispatcher, InMemoryClaimStore, Secrets};

use crate::support::{claims, request, secrets, FailingStore};

#[test]
fn show_unclaimed_resource() {
    let dispatcher = Dispatcher::new(InMemoryClaimStore::new());
    let response = dispatcher
        .dispatch(&request("khaleesi", "show kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "kings-landing is unclaimed");
}

#[test]
fn show_claimed_resource_names_the_holder() {
    let store =
        InMemoryClaimStore::with_claims(claims(&[("kings-landing", Some("khaleesi"))])).unwrap();
    let dispatcher = Dispatcher::new(store);

    let response = dispatcher
        .dispatch(&request("tyrion", "show kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "kings-landing is claimed by @khaleesi");
}

#[test]
fn show_does_not_write_to_the_store() {
    let store = FailingStore::failing_save(
        Some(claims(&[("kings-landing", Some("khaleesi"))])),
        mutexbot::StoreError::Backend("save must not be called".into()),
    );
    let dispatcher = Dispatcher::new(store);

    let response = dispatcher
        .dispatch(&request("tyrion", "show kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "kings-landing is claimed by @khaleesi");
}

#[test]
fn lock_unclaimed_resource_persists_the_claimant() {
    let store = InMemoryClaimStore::new();
    let dispatcher = Dispatcher::new(store.clone());

    let response = dispatcher
        .dispatch(&request("khaleesi", "lock kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "You've successfully claimed kings-landing");

    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved, claims(&[("kings-landing", Some("khaleesi"))]));
}

#[test]
fn relock_by_the_holder_succeeds() {
    let store =
        InMemoryClaimStore::with_claims(claims(&[("kings-landing", Some("khaleesi"))])).unwrap();
    let dispatcher = Dispatcher::new(store.clone());

    let response = dispatcher
        .dispatch(&request("khaleesi", "lock kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "You've successfully claimed kings-landing");
    assert_eq!(
        store.load().unwrap().unwrap(),
        claims(&[("kings-landing", Some("khaleesi"))])
    );
}

#[test]
fn lock_held_by_other_renders_sorry_and_does_not_save() {
    let store = FailingStore::failing_save(
        Some(claims(&[("kings-landing", Some("cersei"))])),
        mutexbot::StoreError::Backend("save must not be called".into()),
    );
    let dispatcher = Dispatcher::new(store);

    let response = dispatcher
        .dispatch(&request("khaleesi", "lock kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "Sorry, kings-landing is claimed by @cersei");
}

#[test]
fn lock_conflict_leaves_the_store_unchanged() {
    let seeded = claims(&[("kings-landing", Some("cersei"))]);
    let store = InMemoryClaimStore::with_claims(seeded.clone()).unwrap();
    let dispatcher = Dispatcher::new(store.clone());

    dispatcher
        .dispatch(&request("khaleesi", "lock kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(store.load().unwrap().unwrap(), seeded);
}

#[test]
fn unlock_by_the_holder_writes_an_explicit_null() {
    let store =
        InMemoryClaimStore::with_claims(claims(&[("kings-landing", Some("khaleesi"))])).unwrap();
    let dispatcher = Dispatcher::new(store.clone());

    let response = dispatcher
        .dispatch(&request("khaleesi", "unlock kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "You've successfully released kings-landing");

    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved, claims(&[("kings-landing", None)]));
}

#[test]
fn unlock_unclaimed_resource_succeeds_for_anyone() {
    let store = InMemoryClaimStore::new();
    let dispatcher = Dispatcher::new(store.clone());

    let response = dispatcher
        .dispatch(&request("khaleesi", "unlock kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "You've successfully released kings-landing");
    assert_eq!(
        store.load().unwrap().unwrap(),
        claims(&[("kings-landing", None)])
    );
}

#[test]
fn unlock_held_by_other_renders_sorry_and_does_not_save() {
    let store = FailingStore::failing_save(
        Some(claims(&[("kings-landing", Some("cersei"))])),
        mutexbot::StoreError::Backend("save must not be called".into()),
    );
    let dispatcher = Dispatcher::new(store);

    let response = dispatcher
        .dispatch(&request("khaleesi", "unlock kings-landing"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "Sorry, kings-landing is claimed by @cersei");
}

#[test]
fn lock_and_unlock_preserve_other_resources() {
    let store = InMemoryClaimStore::with_claims(claims(&[
        ("kings-landing", Some("cersei")),
        ("winterfell", None),
    ]))
    .unwrap();
    let dispatcher = Dispatcher::new(store.clone());

    dispatcher
        .dispatch(
            &request("jon", "lock winterfell"),
            &secrets("kings-landing,winterfell"),
        )
        .unwrap();

    let saved = store.load().unwrap().unwrap();
    assert_eq!(
        saved,
        claims(&[("kings-landing", Some("cersei")), ("winterfell", Some("jon"))])
    );
}

// ===== Help routing =====

fn assert_full_help(text: &str) {
    assert!(text.starts_with("How to use /lock\n"));
    assert!(text.contains("`/lock help`: This message"));
    assert!(text.contains("`/lock show RESOURCE`: Tell who (if anyone) claimed `RESOURCE`"));
    assert!(text.contains("`/lock lock RESOURCE`: Claim `RESOURCE`"));
    assert!(text.contains("`/lock unlock RESOURCE`: Release `RESOURCE`"));
}

#[test]
fn empty_command_text_gets_help() {
    let dispatcher = Dispatcher::new(InMemoryClaimStore::new());
    let response = dispatcher
        .dispatch(&request("khaleesi", ""), &secrets("kings-landing"))
        .unwrap();
    assert_full_help(&response.text);
}

#[test]
fn unrecognized_subcommand_gets_help() {
    let dispatcher = Dispatcher::new(InMemoryClaimStore::new());
    let response = dispatcher
        .dispatch(&request("khaleesi", "stop-winter"), &secrets("kings-landing"))
        .unwrap();
    assert_full_help(&response.text);
}

#[test]
fn subcommand_without_resource_gets_help() {
    let dispatcher = Dispatcher::new(InMemoryClaimStore::new());
    let response = dispatcher
        .dispatch(&request("khaleesi", "show"), &secrets("kings-landing"))
        .unwrap();
    assert_full_help(&response.text);
}

#[test]
fn help_subcommand_gets_help() {
    let dispatcher = Dispatcher::new(InMemoryClaimStore::new());
    let response = dispatcher
        .dispatch(&request("khaleesi", "help"), &secrets("kings-landing"))
        .unwrap();
    assert_full_help(&response.text);
}

// ===== Configuration guard =====

#[test]
fn unset_allow_list_propagates_a_config_error() {
    let dispatcher = Dispatcher::new(InMemoryClaimStore::new());
    let err = dispatcher
        .dispatch(&request("khaleesi", "lock kings-landing"), &Secrets::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "Secret 'resources' must be set");
    assert!(matches!(err, DispatchError::Config(_)));
}

#[test]
fn empty_allow_list_errors_regardless_of_subcommand() {
    let dispatcher = Dispatcher::new(InMemoryClaimStore::new());
    for text in ["help", "", "show kings-landing", "stop-winter"] {
        let err = dispatcher
            .dispatch(&request("khaleesi", text), &secrets(""))
            .unwrap_err();
        assert_eq!(err.to_string(), "Secret 'resources' must be set");
    }
}

#[test]
fn config_guard_runs_before_any_store_access() {
    let store = FailingStore::failing_load(mutexbot::StoreError::Backend(
        "load must not be called".into(),
    ));
    let dispatcher = Dispatcher::new(store);

    let err = dispatcher
        .dispatch(&request("khaleesi", "show kings-landing"), &Secrets::new())
        .unwrap_err();
    assert!(matches!(err, DispatchError::Config(_)));
}

// ===== Unknown resource =====

#[test]
fn unknown_resource_is_a_response_not_an_error() {
    let dispatcher = Dispatcher::new(InMemoryClaimStore::new());
    let response = dispatcher
        .dispatch(&request("khaleesi", "lock braavos"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "Resource braavos doesn't exist");
}

#[test]
fn unknown_resource_never_touches_the_store() {
    let store = FailingStore::failing_load(mutexbot::StoreError::Backend(
        "load must not be called".into(),
    ));
    let dispatcher = Dispatcher::new(store);

    let response = dispatcher
        .dispatch(&request("khaleesi", "show braavos"), &secrets("kings-landing"))
        .unwrap();
    assert_eq!(response.text, "Resource braavos doesn't exist");
}
