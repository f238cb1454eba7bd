use super::{MockBackend, create_test_client, giveaway_body, transaction_body};
use crate::error::ErrorKind;
use crate::models::TransactionStatus;
use crate::transport::Method;
use serde_json::json;

#[tokio::test(start_paused = true)]
async fn test_short_fuse_transaction_uses_blocking_wait_once() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend
        .push(
            200,
            json!({ "data": transaction_body(5, "PENDING", Some(120)) }),
        )
        .await;
    backend.push(200, json!({ "status": "APPROVED" })).await;

    let mut transaction = client.transaction(5);
    transaction.fetch_info().await.unwrap();
    assert_eq!(backend.request_count().await, 1);

    let status = transaction.wait_for_completion().await.unwrap();
    assert_eq!(status, TransactionStatus::Approved);

    // the wait itself issued exactly one request: the blocking wait route
    let requests = backend.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, Method::Patch);
    assert_eq!(requests[1].path, "/economy/transaction/wait/5");
}

#[tokio::test(start_paused = true)]
async fn test_long_fuse_transaction_polls_instead_of_blocking() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend
        .push(
            200,
            json!({ "data": transaction_body(9, "PENDING", Some(600)) }),
        )
        .await;
    // two polls: still pending, then approved
    backend
        .push(
            200,
            json!({ "data": transaction_body(9, "PENDING", Some(600)) }),
        )
        .await;
    backend
        .push(
            200,
            json!({ "data": transaction_body(9, "APPROVED", Some(600)) }),
        )
        .await;

    let mut transaction = client.transaction(9);
    transaction.fetch_info().await.unwrap();

    let status = transaction.wait_for_completion().await.unwrap();
    assert_eq!(status, TransactionStatus::Approved);

    let requests = backend.requests().await;
    assert_eq!(requests.len(), 3);
    assert!(
        requests.iter().all(|r| r.path == "/transaction/9"),
        "a far deadline must never touch the blocking wait route"
    );
}

#[tokio::test]
async fn test_wait_rejects_non_pending_transaction_without_network() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend
        .push(
            200,
            json!({ "data": transaction_body(3, "APPROVED", Some(600)) }),
        )
        .await;

    let mut transaction = client.transaction(3);
    transaction.fetch_info().await.unwrap();
    assert_eq!(backend.request_count().await, 1);

    let err = transaction.wait_for_completion().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransactionNotPending);
    assert_eq!(backend.request_count().await, 1);
}

#[tokio::test]
async fn test_wait_rejects_expired_transaction_without_network() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend
        .push(
            200,
            json!({ "data": transaction_body(3, "PENDING", Some(-60)) }),
        )
        .await;

    let mut transaction = client.transaction(3);
    transaction.fetch_info().await.unwrap();

    let err = transaction.wait_for_completion().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransactionError);
    assert_eq!(backend.request_count().await, 1);
}

#[tokio::test]
async fn test_wait_rejects_never_expiring_transaction() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend
        .push(200, json!({ "data": transaction_body(3, "PENDING", None) }))
        .await;

    let mut transaction = client.transaction(3);
    transaction.fetch_info().await.unwrap();

    let err = transaction.wait_for_completion().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransactionError);
    assert_eq!(backend.request_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_strict_mode_raises_on_rejection() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend
        .push(
            200,
            json!({ "data": transaction_body(5, "PENDING", Some(120)) }),
        )
        .await;
    backend.push(200, json!({ "status": "REJECTED" })).await;

    let mut transaction = client.transaction(5);
    let err = transaction.wait_for_approval().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransactionNotApproved);
}

#[tokio::test(start_paused = true)]
async fn test_plain_mode_returns_rejection_as_value() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend
        .push(
            200,
            json!({ "data": transaction_body(5, "PENDING", Some(120)) }),
        )
        .await;
    backend.push(200, json!({ "status": "REJECTED" })).await;

    let mut transaction = client.transaction(5);
    let status = transaction.wait_for_completion().await.unwrap();
    assert_eq!(status, TransactionStatus::Rejected);
}

#[tokio::test]
async fn test_transport_error_aborts_wait_immediately() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend
        .push(
            200,
            json!({ "data": transaction_body(5, "PENDING", Some(120)) }),
        )
        .await;
    backend
        .push(500, json!({ "message": "internal server error" }))
        .await;

    let mut transaction = client.transaction(5);
    let err = transaction.wait_for_completion().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InternalServerError);
    assert_eq!(backend.request_count().await, 2);
}

#[tokio::test]
async fn test_fetch_info_replaces_snapshot_wholesale() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    let mut first = transaction_body(7, "PENDING", Some(300));
    first["reason"] = json!("gift");
    backend.push(200, json!({ "data": first })).await;

    let mut second = transaction_body(7, "APPROVED", Some(300));
    second["messageId"] = json!("msg-2");
    backend.push(200, json!({ "data": second })).await;

    let mut transaction = client.transaction(7);
    transaction.fetch_info().await.unwrap();
    assert_eq!(
        transaction.info().unwrap().reason,
        Some("gift".to_string())
    );
    assert_eq!(transaction.info().unwrap().message_id, None);

    transaction.fetch_info().await.unwrap();
    let info = transaction.info().unwrap();
    // fields absent from the new payload are gone, not carried over
    assert_eq!(info.reason, None);
    assert_eq!(info.message_id, Some("msg-2".to_string()));
    assert_eq!(info.status, TransactionStatus::Approved);
}

#[tokio::test(start_paused = true)]
async fn test_giveaway_near_expiry_sleeps_then_fetches_once() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend.push(200, giveaway_body(11, false, 120)).await;
    backend.push(200, giveaway_body(11, true, 120)).await;

    let mut giveaway = client.giveaway(11);
    let finished = giveaway.wait_for_completion().await.unwrap();

    assert!(finished.ended);
    let requests = backend.requests().await;
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.path == "/giveaway/info/11"));
}

#[tokio::test(start_paused = true)]
async fn test_giveaway_far_expiry_polls_on_long_cadence() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend.push(200, giveaway_body(11, false, 600)).await;
    backend.push(200, giveaway_body(11, true, 600)).await;

    let mut giveaway = client.giveaway(11);
    let finished = giveaway.wait_for_completion().await.unwrap();

    assert!(finished.ended);
    assert_eq!(backend.request_count().await, 2);
}

#[tokio::test(start_paused = true)]
async fn test_giveaway_final_fetch_returns_latest_snapshot() {
    // the server may settle a moment after the deadline; the wait still
    // resolves with the freshest snapshot instead of spinning
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend.push(200, giveaway_body(11, false, 120)).await;
    backend.push(200, giveaway_body(11, false, 120)).await;

    let mut giveaway = client.giveaway(11);
    let finished = giveaway.wait_for_completion().await.unwrap();

    assert!(!finished.ended);
    assert_eq!(backend.request_count().await, 2);
}

#[tokio::test]
async fn test_wait_rejects_already_ended_giveaway_without_network() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend.push(200, giveaway_body(11, true, 120)).await;

    let mut giveaway = client.giveaway(11);
    giveaway.fetch_info().await.unwrap();

    let err = giveaway.wait_for_completion().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GiveawayAlreadyEnded);
    assert_eq!(backend.request_count().await, 1);
}

#[tokio::test]
async fn test_wait_rejects_expired_giveaway_without_network() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    backend.push(200, giveaway_body(11, false, -60)).await;

    let mut giveaway = client.giveaway(11);
    giveaway.fetch_info().await.unwrap();

    let err = giveaway.wait_for_completion().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GiveawayError);
    assert_eq!(backend.request_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_lazy_handle_materializes_before_preconditions() {
    let backend = MockBackend::new();
    let client = create_test_client(backend.clone());

    // the materializing fetch itself reports an already-approved transaction
    backend
        .push(
            200,
            json!({ "data": transaction_body(4, "APPROVED", Some(120)) }),
        )
        .await;

    let mut transaction = client.transaction(4);
    assert!(transaction.info().is_none());

    let err = transaction.wait_for_completion().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransactionNotPending);
    assert_eq!(backend.request_count().await, 1);
}
