//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod messages;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
pub(crate) mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// All `/api/v1` routes.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(users::create_user)
        .service(users::list_users)
        .service(users::list_user_messages)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(messages::create_message)
        .service(messages::list_messages)
        .service(messages::get_message)
        .service(messages::delete_message)
}
