use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::error::ClientError;
use crate::models::{
    AccessToken, CreateTodo, RegisterUser, Todo, TokenPair, UpdateTodo, UserProfile,
};
use crate::tokens::{MemoryTokenStore, TokenStore};

/// Client for both services, holding base URLs and the session token store.
///
/// Cloning is cheap; clones share the underlying store, so a refresh done
/// through one clone is visible to all of them.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    auth_base_url: String,
    todo_base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(auth_base_url: impl Into<String>, todo_base_url: impl Into<String>) -> Self {
        Self::with_token_store(auth_base_url, todo_base_url, Arc::new(MemoryTokenStore::new()))
    }

    pub fn with_token_store(
        auth_base_url: impl Into<String>,
        todo_base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_base_url: auth_base_url.into(),
            todo_base_url: todo_base_url.into(),
            tokens,
        }
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    // ---- auth service ----

    /// Registers a new account and stores the issued token pair.
    pub async fn register(&self, user: RegisterUser) -> Result<TokenPair, ClientError> {
        let response = self
            .http
            .post(format!("{}/auth/register", self.auth_base_url))
            .json(&user)
            .send()
            .await?;
        let pair: TokenPair = Self::check(response).await?.json().await?;
        self.tokens
            .set_tokens(pair.access_token.clone(), pair.refresh_token.clone());
        Ok(pair)
    }

    /// Logs in and stores the issued token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ClientError> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.auth_base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let pair: TokenPair = Self::check(response).await?.json().await?;
        self.tokens
            .set_tokens(pair.access_token.clone(), pair.refresh_token.clone());
        Ok(pair)
    }

    /// Explicitly exchanges the stored refresh token for a new access token.
    pub async fn refresh(&self) -> Result<String, ClientError> {
        let refresh_token = self
            .tokens
            .refresh_token()
            .ok_or(ClientError::NotAuthenticated)?;

        let response = self
            .http
            .post(format!("{}/auth/refresh", self.auth_base_url))
            .json(&json!({ "refreshToken": refresh_token }))
            .send()
            .await?;
        let token: AccessToken = Self::check(response).await?.json().await?;
        self.tokens.set_access_token(token.access_token.clone());
        Ok(token.access_token)
    }

    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        let url = format!("{}/auth/profile", self.auth_base_url);
        let response = self
            .send_with_refresh(|http| http.get(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    /// Tells the server goodbye and drops the stored pair. The server keeps
    /// no session state, so the local drop is the operative part.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let url = format!("{}/auth/logout", self.auth_base_url);
        let result = self.send_with_refresh(|http| http.post(url.clone())).await;
        self.tokens.clear();
        result.map(|_| ())
    }

    // ---- todo service ----

    pub async fn create_todo(&self, todo: CreateTodo) -> Result<Todo, ClientError> {
        let url = format!("{}/todos", self.todo_base_url);
        let response = self
            .send_with_refresh(|http| http.post(url.clone()).json(&todo))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn list_todos(&self, completed: Option<bool>) -> Result<Vec<Todo>, ClientError> {
        let url = match completed {
            Some(completed) => format!("{}/todos?completed={}", self.todo_base_url, completed),
            None => format!("{}/todos", self.todo_base_url),
        };
        let response = self
            .send_with_refresh(|http| http.get(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_todo(&self, id: Uuid) -> Result<Todo, ClientError> {
        let url = format!("{}/todos/{}", self.todo_base_url, id);
        let response = self
            .send_with_refresh(|http| http.get(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn update_todo(&self, id: Uuid, patch: UpdateTodo) -> Result<Todo, ClientError> {
        let url = format!("{}/todos/{}", self.todo_base_url, id);
        let response = self
            .send_with_refresh(|http| http.patch(url.clone()).json(&patch))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn delete_todo(&self, id: Uuid) -> Result<(), ClientError> {
        let url = format!("{}/todos/{}", self.todo_base_url, id);
        self.send_with_refresh(|http| http.delete(url.clone()))
            .await?;
        Ok(())
    }

    pub async fn list_all_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let url = format!("{}/todos/admin/all", self.todo_base_url);
        let response = self
            .send_with_refresh(|http| http.get(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn admin_delete_todo(&self, id: Uuid) -> Result<(), ClientError> {
        let url = format!("{}/todos/admin/{}", self.todo_base_url, id);
        self.send_with_refresh(|http| http.delete(url.clone()))
            .await?;
        Ok(())
    }

    // ---- refresh-retry decorator ----

    /// Sends a bearer-authorized request; on 401, silently refreshes the
    /// access token and replays the request exactly once.
    ///
    /// Concurrent expired calls each run their own refresh; the server
    /// accepts the same refresh token any number of times, so the races are
    /// wasteful but harmless.
    async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ClientError>
    where
        F: Fn(&reqwest::Client) -> RequestBuilder,
    {
        let response = self.authorize(build(&self.http)).send().await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::check(response).await;
        }

        if self.tokens.refresh_token().is_none() {
            return Err(Self::api_error(response).await);
        }

        tracing::debug!("Access token rejected; attempting silent refresh");

        match self.refresh().await {
            Ok(_) => {
                let retried = self.authorize(build(&self.http)).send().await?;
                Self::check(retried).await
            }
            Err(refresh_err) => {
                // A dead refresh token ends the session
                self.tokens.clear();
                Err(refresh_err)
            }
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    async fn api_error(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => "Unknown error".to_string(),
        };
        ClientError::Api { status, message }
    }
}
