use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;

#[derive(Serialize)]
struct ErrorMessage<'a> {
    message: &'a str,
}

/// Map a service failure onto an HTTP response.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorMessage {
            message: "Category not found",
        }),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(ErrorMessage { message })
        }
        ServiceError::Repository(_) | ServiceError::CorruptTree(_) => {
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Register every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(categories::list_workspace_categories)
        .service(categories::show_workspace_tree)
        .service(categories::show_category_by_name)
        .service(categories::add_category)
        .service(categories::show_category)
        .service(categories::show_category_subtree)
        .service(categories::show_category_tree)
        .service(categories::update_category)
        .service(categories::delete_category);
}
