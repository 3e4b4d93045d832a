//! Sample aggregates for unit tests.

use chrono::{DateTime, Utc};

use super::{
    EmailAddress, Message, MessageContent, MessageId, User, UserId, UserName,
};

fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

pub(crate) fn user_id(raw: i32) -> UserId {
    UserId::new(raw).expect("valid user id")
}

pub(crate) fn sample_user(id: i32, active: bool) -> User {
    User {
        id: user_id(id),
        name: UserName::new(format!("User {id}")).expect("valid name"),
        email: EmailAddress::new(format!("user{id}@example.com")).expect("valid email"),
        active,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

pub(crate) fn sample_message(id: i32, owner: i32) -> Message {
    Message {
        id: MessageId::new(id).expect("valid message id"),
        content: MessageContent::new(format!("message {id}")).expect("valid content"),
        user_id: user_id(owner),
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}
