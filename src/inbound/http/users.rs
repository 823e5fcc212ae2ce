//! User lookup, deletion, and combined-update handlers.
//!
//! ```text
//! GET /users
//! GET /user/{id}
//! DELETE /delete/{id}
//! PUT /user/{id} {"userData":{...},"addressData":{"id":...}}
//! ```

use actix_web::{delete, get, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Address, AddressUpdate, User, UserUpdate, UserWithAddresses};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every user.
///
/// Unbounded full-table read; the intake contract has no pagination. A
/// storage fault propagates through the central error mapping.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Storage failure")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.contacts.list_users().await?))
}

/// Fetch a user with its addresses.
///
/// An absent record answers 200 with a JSON `null` body rather than 404;
/// callers relying on the intake contract expect the empty body.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User with addresses, or null when absent"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Option<UserWithAddresses>>> {
    let id = path.into_inner();
    Ok(web::Json(state.contacts.get_user_by_id(id).await?))
}

/// Confirmation envelope for a completed deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Deleted Successfully")]
    pub state: &'static str,
    pub msg: &'static str,
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self {
            state: "Deleted Successfully",
            msg: "User and address deleted successfully from the database",
        }
    }
}

/// Delete a user and, through the store's cascading referential action, its
/// addresses.
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 404, description = "No such user"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/delete/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeleteResponse>> {
    let id = path.into_inner();
    state.contacts.delete_user_by_id(id).await?;
    info!(user_id = id, "user and addresses deleted");
    Ok(web::Json(DeleteResponse::default()))
}

/// Replacement user fields for the combined update.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserUpdateRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<UserUpdateRequest> for UserUpdate {
    fn from(value: UserUpdateRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
        }
    }
}

/// Replacement address fields for the combined update.
///
/// The address is targeted by its own `id`, supplied by the caller; it is
/// not derived from the path's user id.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddressUpdateRequest {
    pub id: i32,
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl From<AddressUpdateRequest> for AddressUpdate {
    fn from(value: AddressUpdateRequest) -> Self {
        Self {
            address1: value.address1,
            address2: value.address2,
            city: value.city,
            state: value.state,
            zip: value.zip,
        }
    }
}

/// Request body for `PUT /user/{id}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub user_data: UserUpdateRequest,
    pub address_data: AddressUpdateRequest,
}

/// Success envelope for the combined update.
///
/// `updated_data` serialises as the `[user, address]` pair the transactional
/// update produced.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub state: &'static str,
    pub msg: &'static str,
    #[serde(rename = "updatedData")]
    pub updated_data: (User, Address),
}

/// Update a user and one of its addresses in a single transaction.
///
/// No field validation applies on this path; the two updates either both
/// commit or both roll back.
#[utoipa::path(
    put,
    path = "/user/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Updated user/address pair"),
        (status = 404, description = "Either target row is missing"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateRequest>,
) -> ApiResult<web::Json<UpdateResponse>> {
    let user_id = path.into_inner();
    let UpdateRequest {
        user_data,
        address_data,
    } = payload.into_inner();
    let address_id = address_data.id;

    let (user, address) = state
        .contacts
        .update_user_and_address(user_data.into(), address_data.into(), user_id, address_id)
        .await?;
    info!(user_id, address_id, "user and address updated");
    Ok(web::Json(UpdateResponse {
        state: "Updated",
        msg: "User and address details updated successfully",
        updated_data: (user, address),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::inbound::http::test_utils::{seeded_app, test_app};

    #[rstest]
    #[actix_rt::test]
    async fn listing_an_empty_store_yields_an_empty_array() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::get().uri("/users").to_request();
        let users: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(users, json!([]));
    }

    #[rstest]
    #[actix_rt::test]
    async fn fetching_an_absent_user_answers_null_with_200() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::get().uri("/user/42").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        assert_eq!(&body[..], b"null");
    }

    #[rstest]
    #[actix_rt::test]
    async fn fetching_a_seeded_user_includes_its_addresses() {
        let app = actix_test::init_service(seeded_app()).await;

        let request = actix_test::TestRequest::get().uri("/user/1").to_request();
        let user: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(user.get("email").and_then(Value::as_str), Some("jane@x.com"));
        assert_eq!(
            user.get("address").and_then(Value::as_array).map(Vec::len),
            Some(1)
        );
    }

    #[rstest]
    #[actix_rt::test]
    async fn deleting_a_user_removes_it_and_its_addresses() {
        let app = actix_test::init_service(seeded_app()).await;

        let request = actix_test::TestRequest::delete()
            .uri("/delete/1")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("state").and_then(Value::as_str),
            Some("Deleted Successfully")
        );

        let request = actix_test::TestRequest::get().uri("/user/1").to_request();
        let user: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(user, Value::Null);
    }

    #[rstest]
    #[actix_rt::test]
    async fn deleting_an_unknown_id_reports_an_error_envelope() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::delete()
            .uri("/delete/99")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("state").and_then(Value::as_str), Some("error"));
        assert_eq!(
            body.get("msg").and_then(Value::as_str),
            Some("user not found")
        );
    }

    fn update_body(address_id: i32) -> Value {
        json!({
            "userData": {
                "name": "Jane Smith",
                "email": "jane@x.com",
                "phone": "9876543210"
            },
            "addressData": {
                "id": address_id,
                "address1": "2 High St",
                "city": "Mumbai",
                "state": "MH",
                "zip": "400001"
            }
        })
    }

    #[rstest]
    #[actix_rt::test]
    async fn combined_update_changes_both_rows() {
        let app = actix_test::init_service(seeded_app()).await;

        let request = actix_test::TestRequest::put()
            .uri("/user/1")
            .set_json(update_body(1))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;

        assert_eq!(body.get("state").and_then(Value::as_str), Some("Updated"));
        let pair = body
            .get("updatedData")
            .and_then(Value::as_array)
            .expect("updated pair");
        assert_eq!(pair[0].get("name").and_then(Value::as_str), Some("Jane Smith"));
        assert_eq!(pair[1].get("city").and_then(Value::as_str), Some("Mumbai"));
    }

    #[rstest]
    #[actix_rt::test]
    async fn combined_update_rolls_back_when_the_address_is_missing() {
        let app = actix_test::init_service(seeded_app()).await;

        let request = actix_test::TestRequest::put()
            .uri("/user/1")
            .set_json(update_body(99))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The user update must not have been applied.
        let request = actix_test::TestRequest::get().uri("/user/1").to_request();
        let user: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(user.get("name").and_then(Value::as_str), Some("Jane Doe"));
    }
}
