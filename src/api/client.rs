use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::endpoints;
use crate::api::request::ApiRequest;
use crate::api::transport::Transport;
use crate::error::RequestError;
use crate::types::{
    ApiListData, Envelope, ListData, LoginData, LoginRequest, MenuRecord, PermissionList, Role,
    UserInfo,
};

/// The API facade: one method per backend operation
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a request and return the raw envelope
    pub async fn send(&self, request: ApiRequest) -> Result<Envelope, RequestError> {
        self.transport.send(&request).await
    }

    /// Send a request and decode its `data` payload
    pub async fn send_as<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, RequestError> {
        self.send(request).await?.into_data()
    }

    pub async fn login(&self, params: &LoginRequest) -> Result<LoginData, RequestError> {
        self.send_as(endpoints::login(params)).await
    }

    // Menus

    pub async fn get_menus(&self) -> Result<ListData<MenuRecord>, RequestError> {
        self.send_as(endpoints::get_menus()).await
    }

    pub async fn get_admin_menus(&self) -> Result<ListData<MenuRecord>, RequestError> {
        self.send_as(endpoints::get_admin_menus()).await
    }

    pub async fn create_menu(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::create_menu(params)).await
    }

    pub async fn update_menu(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::update_menu(params)).await
    }

    pub async fn delete_menu(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::delete_menu(params)).await
    }

    // Admin users

    pub async fn get_admin_user_info(&self) -> Result<UserInfo, RequestError> {
        self.send_as(endpoints::get_admin_user_info()).await
    }

    pub async fn get_admin_users(&self, params: Value) -> Result<ListData<UserInfo>, RequestError> {
        self.send_as(endpoints::get_admin_users(params)).await
    }

    pub async fn create_admin_user(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::create_admin_user(params)).await
    }

    pub async fn update_admin_user(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::update_admin_user(params)).await
    }

    pub async fn delete_admin_user(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::delete_admin_user(params)).await
    }

    // Roles and permissions

    pub async fn get_roles(&self, params: Value) -> Result<ListData<Role>, RequestError> {
        self.send_as(endpoints::get_roles(params)).await
    }

    pub async fn create_role(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::create_role(params)).await
    }

    pub async fn update_role(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::update_role(params)).await
    }

    pub async fn delete_role(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::delete_role(params)).await
    }

    pub async fn get_user_permissions(
        &self,
        params: Value,
    ) -> Result<PermissionList, RequestError> {
        self.send_as(endpoints::get_user_permissions(params)).await
    }

    pub async fn get_role_permissions(
        &self,
        params: Value,
    ) -> Result<PermissionList, RequestError> {
        self.send_as(endpoints::get_role_permissions(params)).await
    }

    pub async fn update_role_permissions(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::update_role_permissions(params)).await
    }

    // API registry

    pub async fn get_apis(&self, params: Value) -> Result<ApiListData, RequestError> {
        self.send_as(endpoints::get_apis(params)).await
    }

    pub async fn create_api(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::create_api(params)).await
    }

    pub async fn update_api(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::update_api(params)).await
    }

    pub async fn delete_api(&self, params: Value) -> Result<Envelope, RequestError> {
        self.send(endpoints::delete_api(params)).await
    }

    // Demo lists

    pub async fn get_crud_list(&self, params: Value) -> Result<Value, RequestError> {
        self.send_as(endpoints::get_crud_list(params)).await
    }

    pub async fn get_consult_list(&self, params: Value) -> Result<Value, RequestError> {
        self.send_as(endpoints::get_consult_list(params)).await
    }

    pub async fn delete_list_item(&self, id: u64) -> Result<Envelope, RequestError> {
        self.send(endpoints::delete_list_item(id)).await
    }
}
