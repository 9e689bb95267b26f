//! Platforms, accounts, analytics and posts.

use super::{ApiClient, Method};
use crate::error::ApiResult;
use crate::models::{
    Analytics, ConnectAccountRequest, CreatePostRequest, Platform, Post, SocialAccount,
};
use crate::traits::HttpClient;

impl<C: HttpClient> ApiClient<C> {
    pub async fn list_platforms(&self) -> ApiResult<Vec<Platform>> {
        self.get_json("/api/platforms", "Failed to load platforms").await
    }

    pub async fn list_accounts(&self) -> ApiResult<Vec<SocialAccount>> {
        self.get_json("/api/accounts", "Failed to load accounts").await
    }

    pub async fn get_analytics(&self) -> ApiResult<Analytics> {
        self.get_json("/api/analytics", "Failed to load analytics").await
    }

    pub async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        self.get_json("/api/posts", "Failed to load posts").await
    }

    pub async fn create_post(&self, request: &CreatePostRequest) -> ApiResult<Post> {
        self.send_json(Method::Post, "/api/posts", request, "Failed to create post")
            .await
    }

    pub async fn connect_account(&self, request: &ConnectAccountRequest) -> ApiResult<SocialAccount> {
        self.send_json(Method::Post, "/api/accounts", request, "Failed to connect account")
            .await
    }

    /// Connect the session's user to `platform`.
    pub async fn connect_platform(&self, platform: &Platform) -> ApiResult<SocialAccount> {
        let request = self.connect_request(platform);
        tracing::info!("connecting {} as {}", platform.slug, request.account_name);
        self.connect_account(&request).await
    }

    /// Connect request for `platform` built from the session identity.
    pub fn connect_request(&self, platform: &Platform) -> ConnectAccountRequest {
        ConnectAccountRequest {
            user_id: self.session.user_id,
            platform_id: platform.id,
            account_name: self.session.brand_name.clone(),
            account_id: self.session.account_id_for(&platform.slug),
            access_token: None,
            connected: true,
        }
    }
}
