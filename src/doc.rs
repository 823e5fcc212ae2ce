//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the intake API: every HTTP endpoint plus the request, response, and
//! error schemas they reference. The generated specification backs Swagger
//! UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Address, AddressPayload, AddressWithUser, ErrorCode, FieldViolation, User, UserPayload,
    UserWithAddresses,
};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::submission::{SubmissionRequest, SubmissionResponse};
use crate::inbound::http::users::{
    AddressUpdateRequest, DeleteResponse, UpdateRequest, UserUpdateRequest,
};

/// OpenAPI document for the intake API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact intake API",
        description = "HTTP interface for submitting, reading, updating, and deleting user and address records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::submission::submit,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Address,
        UserWithAddresses,
        AddressWithUser,
        UserPayload,
        AddressPayload,
        FieldViolation,
        ErrorCode,
        ApiError,
        SubmissionRequest,
        SubmissionResponse,
        DeleteResponse,
        UpdateRequest,
        UserUpdateRequest,
        AddressUpdateRequest,
    )),
    tags(
        (name = "submission", description = "Intake workflow for user/address submissions"),
        (name = "users", description = "Operations related to users and their addresses"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn document_registers_every_intake_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for expected in [
            "/submission",
            "/users",
            "/user/{id}",
            "/delete/{id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(expected), "missing path {expected}");
        }
    }
}
