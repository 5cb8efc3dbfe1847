//! HTTP routes and the helpers they share.

use actix_web::{HttpResponse, error, web};
use serde::Serialize;
use serde_json::json;

use crate::services::{ServiceError, ServiceResult};

pub mod members;
pub mod teams;

/// Registers every member and team route plus the JSON query error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(members::search_members_v1)
        .service(members::search_members_v2)
        .service(members::search_members_v3)
        .service(members::search_members_v4)
        .service(members::search_members)
        .service(members::members_by_username)
        .service(members::list_members)
        .service(members::show_member)
        .service(teams::show_team);
}

/// Rejects malformed query strings with a JSON `400 Bad Request`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = error_response(HttpResponse::BadRequest(), &err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}

fn error_response(mut builder: actix_web::HttpResponseBuilder, message: &str) -> HttpResponse {
    builder.json(json!({ "error": message }))
}

/// Maps the outcome of a blocking service call onto an HTTP response.
pub fn respond<T: Serialize>(
    result: Result<ServiceResult<T>, error::BlockingError>,
    context: &str,
) -> HttpResponse {
    match result {
        Ok(Ok(body)) => HttpResponse::Ok().json(body),
        Ok(Err(ServiceError::NotFound)) => {
            error_response(HttpResponse::NotFound(), "entity not found")
        }
        Ok(Err(err @ (ServiceError::Form(_) | ServiceError::TypeConstraint(_)))) => {
            error_response(HttpResponse::BadRequest(), &err.to_string())
        }
        Ok(Err(err)) => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
