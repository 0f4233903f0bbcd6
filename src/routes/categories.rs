use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::category::{Category, CategoryUpdate};
use crate::domain::types::{CategoryId, CategoryName, WorkspaceId};
use crate::dto::categories::{CategoryDto, CategoryTreeDto};
use crate::forms::categories::{
    CreateCategoryForm, CreateCategoryFormPayload, UpdateCategoryForm,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::categories::{
    create_category as create_category_service,
    delete_category_subtree as delete_category_service,
    list_workspace_categories as list_workspace_categories_service,
    show_category as show_category_service,
    show_category_by_name as show_category_by_name_service,
    show_category_forest as show_category_forest_service,
    show_category_subtree as show_category_subtree_service,
    show_category_tree as show_category_tree_service,
    update_category_details as update_category_service,
};

fn category_list(categories: Vec<Category>) -> HttpResponse {
    HttpResponse::Ok().json(
        categories
            .into_iter()
            .map(CategoryDto::from)
            .collect::<Vec<CategoryDto>>(),
    )
}

#[get("/api/workspaces/{workspace_id}/categories")]
pub async fn list_workspace_categories(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(workspace_id) = WorkspaceId::new(path.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match list_workspace_categories_service(workspace_id, repo.get_ref()) {
        Ok(categories) => category_list(categories),
        Err(err) => error_response(&err),
    }
}

#[get("/api/workspaces/{workspace_id}/categories/tree")]
pub async fn show_workspace_tree(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(workspace_id) = WorkspaceId::new(path.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match show_category_forest_service(workspace_id, repo.get_ref()) {
        Ok(forest) => HttpResponse::Ok().json(
            forest
                .into_iter()
                .map(CategoryTreeDto::from)
                .collect::<Vec<CategoryTreeDto>>(),
        ),
        Err(err) => error_response(&err),
    }
}

#[get("/api/workspaces/{workspace_id}/categories/by-name/{name}")]
pub async fn show_category_by_name(
    path: web::Path<(i32, String)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (workspace_id, name) = path.into_inner();
    let Ok(workspace_id) = WorkspaceId::new(workspace_id) else {
        return HttpResponse::NotFound().finish();
    };
    let name = match CategoryName::new(name) {
        Ok(name) => name,
        Err(e) => return error_response(&ServiceError::from(e)),
    };

    match show_category_by_name_service(workspace_id, &name, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(err) => error_response(&err),
    }
}

#[post("/api/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCategoryForm>,
) -> impl Responder {
    let payload: CreateCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(&ServiceError::from(e)),
    };

    match create_category_service(payload.parent_id, &payload.category, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(err) => error_response(&err),
    }
}

#[get("/api/categories/{category_id}")]
pub async fn show_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(path.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match show_category_service(category_id, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(err) => error_response(&err),
    }
}

#[get("/api/categories/{category_id}/subtree")]
pub async fn show_category_subtree(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(path.into_inner()) else {
        return category_list(Vec::new());
    };

    match show_category_subtree_service(category_id, repo.get_ref()) {
        Ok(categories) => category_list(categories),
        Err(err) => error_response(&err),
    }
}

#[get("/api/categories/{category_id}/tree")]
pub async fn show_category_tree(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(path.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match show_category_tree_service(category_id, repo.get_ref()) {
        Ok(Some(tree)) => HttpResponse::Ok().json(CategoryTreeDto::from(tree)),
        Ok(None) => error_response(&ServiceError::NotFound),
        Err(err) => error_response(&err),
    }
}

#[put("/api/categories/{category_id}")]
pub async fn update_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateCategoryForm>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(path.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };
    let update: CategoryUpdate = match form.try_into() {
        Ok(update) => update,
        Err(e) => return error_response(&ServiceError::from(e)),
    };

    match update_category_service(category_id, &update, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryDto::from(category)),
        Err(err) => error_response(&err),
    }
}

#[delete("/api/categories/{category_id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(category_id) = CategoryId::new(path.into_inner()) else {
        return HttpResponse::Ok().json(Option::<CategoryDto>::None);
    };

    match delete_category_service(category_id, repo.get_ref()) {
        Ok(deleted) => HttpResponse::Ok().json(deleted.map(CategoryDto::from)),
        Err(err) => error_response(&err),
    }
}
