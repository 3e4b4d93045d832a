//! Users API handlers.
//!
//! ```text
//! POST   /api/v1/users                {"name":"Ada","email":"ada@example.com"}
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! PATCH  /api/v1/users/{id}           {"active":false}
//! DELETE /api/v1/users/{id}
//! GET    /api/v1/users/{id}/messages
//! ```
//!
//! Routes addressing one user run the Existence Gate before reading the body,
//! so a missing user wins over a malformed payload.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::user_presence::user_not_found;
use crate::domain::{EmailAddress, Error, Message, NewUser, User, UserChanges, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MessageSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    EMAIL, NAME, decode_body, map_user_validation_error, require,
};

/// Request body for `POST /api/v1/users`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Defaults to `true`.
    pub active: Option<bool>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let name = UserName::new(require(value.name, NAME)?).map_err(map_user_validation_error)?;
        let email =
            EmailAddress::new(require(value.email, EMAIL)?).map_err(map_user_validation_error)?;
        let user = NewUser::new(name, email);
        Ok(match value.active {
            Some(active) => user.with_active(active),
            None => user,
        })
    }
}

/// Request body for `PATCH /api/v1/users/{id}`: any subset of the create body.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

impl TryFrom<UpdateUserRequest> for UserChanges {
    type Error = Error;

    fn try_from(value: UpdateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value
                .name
                .map(UserName::new)
                .transpose()
                .map_err(map_user_validation_error)?,
            email: value
                .email
                .map(EmailAddress::new)
                .transpose()
                .map_err(map_user_validation_error)?,
            active: value.active,
        })
    }
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already exists", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let payload: CreateUserRequest = decode_body(&body)?;
    let user = state.users.create(NewUser::try_from(payload)?).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List every user, including soft-deleted ones.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users.find_all().await?))
}

/// Fetch one active user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "Invalid id, or user missing or inactive", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = state.gate.admit(&path).await?;
    let user = state
        .users
        .find_one(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(web::Json(user))
}

/// Partially update an active user.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Invalid id, or user missing or inactive", body = ErrorSchema),
        (status = 409, description = "Email already exists", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let id = state.gate.admit(&path).await?;
    let payload: UpdateUserRequest = decode_body(&body)?;
    let user = state.users.update(id, UserChanges::try_from(payload)?).await?;
    Ok(web::Json(user))
}

/// Soft-delete an active user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deactivated user", body = UserSchema),
        (status = 404, description = "Invalid id, or user missing or inactive", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = state.gate.admit(&path).await?;
    Ok(web::Json(state.users.remove(id).await?))
}

/// List the messages owned by an active user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/messages",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Messages owned by the user", body = [MessageSchema]),
        (status = 404, description = "Invalid id, or user missing or inactive", body = ErrorSchema),
        (status = 409, description = "User does not exist", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserMessages"
)]
#[get("/users/{id}/messages")]
pub async fn list_user_messages(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Message>>> {
    let id = state.gate.admit(&path).await?;
    Ok(web::Json(state.messages.user_messages(id).await?))
}
