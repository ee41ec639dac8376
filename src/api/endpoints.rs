//! Request descriptors for every backend operation.
//!
//! Each function only maps an operation to method, path and options; sending
//! is the job of [`crate::api::ApiClient`].

use serde_json::Value;

use crate::api::request::{ApiRequest, RequestOptions};
use crate::types::LoginRequest;

// Login

pub fn login(params: &LoginRequest) -> ApiRequest {
    let body = serde_json::json!({
        "username": params.username,
        "password": params.password,
    });
    ApiRequest::post("/v1/login").params(body).options(RequestOptions {
        token: false,
        custom_dev: false,
        loading: true,
    })
}

// Menus

pub fn get_menus() -> ApiRequest {
    ApiRequest::get("/v1/menus")
}

pub fn get_admin_menus() -> ApiRequest {
    ApiRequest::get("/v1/admin/menus")
}

pub fn create_menu(params: Value) -> ApiRequest {
    ApiRequest::post("/v1/admin/menu").params(params)
}

pub fn update_menu(params: Value) -> ApiRequest {
    ApiRequest::put("/v1/admin/menu").params(params)
}

pub fn delete_menu(params: Value) -> ApiRequest {
    ApiRequest::delete("/v1/admin/menu").params(params)
}

// Admin users

pub fn get_admin_user_info() -> ApiRequest {
    ApiRequest::get("/v1/admin/user")
}

pub fn get_admin_users(params: Value) -> ApiRequest {
    ApiRequest::get("/v1/admin/users").params(params)
}

pub fn create_admin_user(params: Value) -> ApiRequest {
    ApiRequest::post("/v1/admin/user").params(params)
}

pub fn update_admin_user(params: Value) -> ApiRequest {
    ApiRequest::put("/v1/admin/user").params(params)
}

pub fn delete_admin_user(params: Value) -> ApiRequest {
    ApiRequest::delete("/v1/admin/user").params(params)
}

// Roles and permissions

pub fn get_roles(params: Value) -> ApiRequest {
    ApiRequest::get("/v1/admin/roles").params(params)
}

pub fn create_role(params: Value) -> ApiRequest {
    ApiRequest::post("/v1/admin/role").params(params)
}

pub fn update_role(params: Value) -> ApiRequest {
    ApiRequest::put("/v1/admin/role").params(params)
}

pub fn delete_role(params: Value) -> ApiRequest {
    ApiRequest::delete("/v1/admin/role").params(params)
}

pub fn get_user_permissions(params: Value) -> ApiRequest {
    ApiRequest::get("/v1/admin/user/permissions").params(params)
}

pub fn get_role_permissions(params: Value) -> ApiRequest {
    ApiRequest::get("/v1/admin/role/permissions").params(params)
}

pub fn update_role_permissions(params: Value) -> ApiRequest {
    ApiRequest::put("/v1/admin/role/permission").params(params)
}

// API registry

pub fn get_apis(params: Value) -> ApiRequest {
    ApiRequest::get("/v1/admin/apis").params(params)
}

pub fn create_api(params: Value) -> ApiRequest {
    ApiRequest::post("/v1/admin/api").params(params)
}

pub fn update_api(params: Value) -> ApiRequest {
    ApiRequest::put("/v1/admin/api").params(params)
}

pub fn delete_api(params: Value) -> ApiRequest {
    ApiRequest::delete("/v1/admin/api").params(params)
}

// Demo list pages, served by the mock server in development

fn dev_mock() -> RequestOptions {
    RequestOptions {
        custom_dev: true,
        ..RequestOptions::default()
    }
}

pub fn get_crud_list(params: Value) -> ApiRequest {
    ApiRequest::post("/list/crud-table").params(params).options(dev_mock())
}

pub fn get_consult_list(params: Value) -> ApiRequest {
    ApiRequest::post("/list/consult-list").params(params).options(dev_mock())
}

pub fn delete_list_item(id: u64) -> ApiRequest {
    ApiRequest::delete(format!("/list/{}", id)).options(dev_mock())
}
