//! Submission intake handler.
//!
//! ```text
//! POST /submission {"userData":{...},"addressData":{...}}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{
    AddressPayload, AddressWithUser, UserPayload, UserWithAddresses, validate_address,
    validate_user,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Request body for `POST /submission`.
///
/// Both payloads default to empty records so an absent key reports required
/// fields rather than failing deserialisation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub user_data: UserPayload,
    #[serde(default)]
    pub address_data: AddressPayload,
}

/// Success envelope for the submission workflow.
///
/// `complete` carries the created user with its nested address; `partial`
/// carries the new address linked to the pre-existing user.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionResponse {
    #[schema(example = "complete")]
    pub state: &'static str,
    pub msg: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserWithAddresses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressWithUser>,
}

impl SubmissionResponse {
    fn complete(user: UserWithAddresses) -> Self {
        Self {
            state: "complete",
            msg: "User and address added successfully to the database",
            user: Some(user),
            address: None,
        }
    }

    fn partial(address: AddressWithUser) -> Self {
        Self {
            state: "partial",
            msg: "User already exists, new address added",
            user: None,
            address: Some(address),
        }
    }
}

/// Accept a user/address submission.
///
/// Validation is fail-fast: no persistence call happens while either payload
/// has violations. A known email attaches the address to the existing user;
/// an unknown one creates both records in a single transaction.
#[utoipa::path(
    post,
    path = "/submission",
    request_body = SubmissionRequest,
    responses(
        (status = 200, description = "Records persisted", body = SubmissionResponse),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tags = ["submission"],
    operation_id = "submitContact"
)]
#[post("/submission")]
pub async fn submit(
    state: web::Data<HttpState>,
    payload: web::Json<SubmissionRequest>,
) -> ApiResult<web::Json<SubmissionResponse>> {
    let SubmissionRequest {
        user_data,
        address_data,
    } = payload.into_inner();

    let (new_user, new_address) = match (validate_user(&user_data), validate_address(&address_data))
    {
        (Ok(user), Ok(address)) => (user, address),
        (user, address) => {
            return Err(ApiError::validation(
                user.err().unwrap_or_default(),
                address.err().unwrap_or_default(),
            ));
        }
    };

    match state.contacts.find_user_by_email(&new_user.email).await? {
        Some(existing) => {
            let address = state
                .contacts
                .create_address_for_user(new_address, existing.id)
                .await?;
            info!(user_id = existing.id, "user already exists, new address added");
            Ok(web::Json(SubmissionResponse::partial(address)))
        }
        None => {
            // The lookup and the insert are separate statements; two
            // concurrent submissions with the same new email can both reach
            // this branch and each create a user.
            let user = state
                .contacts
                .create_user_with_address(new_user, new_address)
                .await?;
            info!(user_id = user.user.id, "user and address added");
            Ok(web::Json(SubmissionResponse::complete(user)))
        }
    }
}
