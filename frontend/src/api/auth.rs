use super::{
    client::ApiClient,
    types::{ApiError, AuthResponse, Identity, LoginRequest, MeResponse, SignupRequest},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.endpoint("/api/login").await;
        let response = self
            .send(self.http_client().post(url).json(&request))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError> {
        let url = self.endpoint("/api/signup").await;
        let response = self
            .send(self.http_client().post(url).json(&request))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/api/logout").await;
        let response = self.send(self.http_client().post(url)).await?;
        self.map_empty_response(response).await
    }

    pub async fn get_me(&self) -> Result<Identity, ApiError> {
        let url = self.endpoint("/api/me").await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response::<MeResponse>(response)
            .await
            .map(Identity::from)
    }
}
