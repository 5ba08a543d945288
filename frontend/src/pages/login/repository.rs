use crate::api::{ApiClient, ApiError, AuthResponse, Identity, LoginRequest, SignupRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl AuthRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.login(request).await
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError> {
        self.client.signup(request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }

    pub async fn current_user(&self) -> Result<Identity, ApiError> {
        self.client.get_me().await
    }
}

impl Default for AuthRepository {
    fn default() -> Self {
        Self::new()
    }
}
