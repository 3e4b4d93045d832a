//! Tests for the Message Ledger service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{MockMessageRepository, MockUserDirectory};
use crate::domain::test_support::{sample_message, sample_user, user_id};
use crate::domain::{ErrorCode, MessageContent};

type Ledger = MessageLedgerService<MockMessageRepository, MockUserDirectory>;

fn make_ledger(messages: MockMessageRepository, directory: MockUserDirectory) -> Ledger {
    MessageLedgerService::new(Arc::new(messages), Arc::new(directory))
}

fn new_message(owner: i32) -> NewMessage {
    NewMessage {
        content: MessageContent::new("hello").expect("content"),
        user_id: user_id(owner),
    }
}

fn message_id(raw: i32) -> MessageId {
    MessageId::new(raw).expect("message id")
}

#[tokio::test]
async fn create_returns_stored_message() {
    let mut messages = MockMessageRepository::new();
    messages
        .expect_create()
        .withf(|message: &NewMessage| message.user_id.get() == 1)
        .times(1)
        .return_once(|_| Ok(sample_message(10, 1)));

    let created = make_ledger(messages, MockUserDirectory::new())
        .create(new_message(1))
        .await
        .expect("created");

    assert_eq!(created.id, message_id(10));
}

#[rstest]
#[case(StorageError::foreign_key_violation("messages_user_id_fkey"), ErrorCode::Conflict)]
#[case(StorageError::unique_violation("unexpected"), ErrorCode::InternalError)]
#[case(StorageError::connection("refused"), ErrorCode::InternalError)]
#[case(StorageError::query("P9999"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_classifies_storage_errors(
    #[case] failure: StorageError,
    #[case] expected: ErrorCode,
) {
    let mut messages = MockMessageRepository::new();
    messages.expect_create().return_once(move |_| Err(failure));

    let err = make_ledger(messages, MockUserDirectory::new())
        .create(new_message(999))
        .await
        .expect_err("fails");

    assert_eq!(err.code(), expected);
}

#[tokio::test]
async fn create_with_unknown_owner_reports_conflict_message() {
    let mut messages = MockMessageRepository::new();
    messages
        .expect_create()
        .return_once(|_| Err(StorageError::foreign_key_violation("messages_user_id_fkey")));

    let err = make_ledger(messages, MockUserDirectory::new())
        .create(new_message(999))
        .await
        .expect_err("conflict");

    assert_eq!(err.message(), OWNER_DOES_NOT_EXIST);
}

#[tokio::test]
async fn find_all_returns_every_message() {
    let mut messages = MockMessageRepository::new();
    messages
        .expect_list()
        .return_once(|| Ok(vec![sample_message(1, 1), sample_message(2, 2)]));

    let all = make_ledger(messages, MockUserDirectory::new())
        .find_all()
        .await
        .expect("messages");

    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn find_all_returns_empty_list() {
    let mut messages = MockMessageRepository::new();
    messages.expect_list().return_once(|| Ok(Vec::new()));

    let all = make_ledger(messages, MockUserDirectory::new())
        .find_all()
        .await
        .expect("messages");

    assert!(all.is_empty());
}

#[rstest]
#[case(Some(7))]
#[case(None)]
#[tokio::test]
async fn find_one_returns_optional_message(#[case] stored: Option<i32>) {
    let mut messages = MockMessageRepository::new();
    messages
        .expect_find_by_id()
        .return_once(move |_| Ok(stored.map(|id| sample_message(id, 1))));

    let found = make_ledger(messages, MockUserDirectory::new())
        .find_one(message_id(7))
        .await
        .expect("lookup");

    assert_eq!(found.is_some(), stored.is_some());
}

#[tokio::test]
async fn remove_deletes_physically() {
    let mut messages = MockMessageRepository::new();
    messages
        .expect_delete()
        .withf(|id: &MessageId| id.get() == 1)
        .times(1)
        .return_once(|id| Ok(sample_message(id.get(), 1)));

    let removed = make_ledger(messages, MockUserDirectory::new())
        .remove(message_id(1))
        .await
        .expect("removed");

    assert_eq!(removed.id, message_id(1));
}

#[tokio::test]
async fn remove_missing_message_is_not_found() {
    let mut messages = MockMessageRepository::new();
    messages
        .expect_delete()
        .return_once(|_| Err(StorageError::record_not_found()));

    let err = make_ledger(messages, MockUserDirectory::new())
        .remove(message_id(1))
        .await
        .expect_err("missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn user_messages_lists_by_owner_for_stored_users(#[case] active: bool) {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_find_one()
        .withf(|id: &UserId| id.get() == 1)
        .times(1)
        .return_once(move |id| Ok(Some(sample_user(id.get(), active))));
    let mut messages = MockMessageRepository::new();
    messages
        .expect_list_by_user()
        .withf(|id: &UserId| id.get() == 1)
        .times(1)
        .return_once(|_| Ok(vec![sample_message(1, 1), sample_message(2, 1)]));

    let listed = make_ledger(messages, directory)
        .user_messages(user_id(1))
        .await
        .expect("messages");

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|message| message.user_id == user_id(1)));
}

#[tokio::test]
async fn user_messages_for_missing_user_is_conflict() {
    let mut directory = MockUserDirectory::new();
    directory.expect_find_one().return_once(|_| Ok(None));
    let mut messages = MockMessageRepository::new();
    messages.expect_list_by_user().times(0);

    let err = make_ledger(messages, directory)
        .user_messages(user_id(999))
        .await
        .expect_err("conflict");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), USER_DOES_NOT_EXIST);
}

#[tokio::test]
async fn user_messages_maps_lookup_failure_to_internal() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_find_one()
        .return_once(|_| Err(Error::internal("directory down")));
    let mut messages = MockMessageRepository::new();
    messages.expect_list_by_user().times(0);

    let err = make_ledger(messages, directory)
        .user_messages(user_id(1))
        .await
        .expect_err("internal");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn user_messages_maps_listing_failure_to_internal() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_find_one()
        .return_once(|id| Ok(Some(sample_user(id.get(), true))));
    let mut messages = MockMessageRepository::new();
    messages
        .expect_list_by_user()
        .return_once(|_| Err(StorageError::connection("refused")));

    let err = make_ledger(messages, directory)
        .user_messages(user_id(1))
        .await
        .expect_err("internal");

    assert_eq!(err.code(), ErrorCode::InternalError);
}
