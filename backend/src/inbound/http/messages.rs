//! Messages API handlers.
//!
//! ```text
//! POST   /api/v1/messages        {"content":"hi","userId":1}
//! GET    /api/v1/messages
//! GET    /api/v1/messages/{id}
//! DELETE /api/v1/messages/{id}
//! ```
//!
//! Only creation is gated: the owner named by `userId` must be active before
//! the rest of the body is validated.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::message_ledger_service::message_not_found;
use crate::domain::{Error, Message, MessageContent, NewMessage, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MessageSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    CONTENT, USER_ID, decode_value, map_message_validation_error, not_positive_error,
    parse_json_value, parse_message_id, require,
};

/// Request body for `POST /api/v1/messages`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMessageRequest {
    #[schema(example = "Hello there")]
    pub content: Option<String>,
    #[schema(example = 1, minimum = 1)]
    pub user_id: Option<i64>,
}

impl TryFrom<CreateMessageRequest> for NewMessage {
    type Error = Error;

    fn try_from(value: CreateMessageRequest) -> Result<Self, Self::Error> {
        let content = MessageContent::new(require(value.content, CONTENT)?)
            .map_err(map_message_validation_error)?;
        let user_id = UserId::try_from(require(value.user_id, USER_ID)?)
            .map_err(|_| not_positive_error(USER_ID))?;
        Ok(Self { content, user_id })
    }
}

/// Textual candidate the Existence Gate parses from the body's `userId`.
///
/// Integral floats such as `1.0` are read as the integer they denote.
fn owner_candidate(body: &Value) -> String {
    match body.get("userId") {
        Some(Value::Number(number)) => match number.as_f64() {
            Some(float) if number.as_i64().is_none() && float.is_finite() && float.fract() == 0.0 => {
                format!("{float:.0}")
            }
            _ => number.to_string(),
        },
        Some(Value::String(text)) => text.trim().to_owned(),
        _ => String::new(),
    }
}

/// Create a message owned by an active user.
#[utoipa::path(
    post,
    path = "/api/v1/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created", body = MessageSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Owner id invalid, missing or inactive", body = ErrorSchema),
        (status = 409, description = "Owner does not exist", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "createMessage"
)]
#[post("/messages")]
pub async fn create_message(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let mut value = parse_json_value(&body)?;
    let owner = state.gate.admit(&owner_candidate(&value)).await?;
    if let Some(user_id) = value.get_mut("userId").filter(|user_id| user_id.is_number()) {
        *user_id = Value::from(owner.get());
    }
    let payload: CreateMessageRequest = decode_value(value)?;
    let message = state.messages.create(NewMessage::try_from(payload)?).await?;
    Ok(HttpResponse::Created().json(message))
}

/// List every message.
#[utoipa::path(
    get,
    path = "/api/v1/messages",
    responses(
        (status = 200, description = "Messages", body = [MessageSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "listMessages"
)]
#[get("/messages")]
pub async fn list_messages(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Message>>> {
    Ok(web::Json(state.messages.find_all().await?))
}

/// Fetch one message.
#[utoipa::path(
    get,
    path = "/api/v1/messages/{id}",
    params(("id" = i32, Path, description = "Message identifier")),
    responses(
        (status = 200, description = "Message", body = MessageSchema),
        (status = 404, description = "Invalid id or message missing", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "getMessage"
)]
#[get("/messages/{id}")]
pub async fn get_message(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Message>> {
    let id = parse_message_id(&path)?;
    let message = state
        .messages
        .find_one(id)
        .await?
        .ok_or_else(|| message_not_found(id))?;
    Ok(web::Json(message))
}

/// Permanently delete a message.
#[utoipa::path(
    delete,
    path = "/api/v1/messages/{id}",
    params(("id" = i32, Path, description = "Message identifier")),
    responses(
        (status = 200, description = "Deleted message", body = MessageSchema),
        (status = 404, description = "Invalid id or message missing", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "deleteMessage"
)]
#[delete("/messages/{id}")]
pub async fn delete_message(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Message>> {
    let id = parse_message_id(&path)?;
    Ok(web::Json(state.messages.remove(id).await?))
}
