use crate::{CliClientResult, ClientError};

use reqwest::header::{COOKIE, HeaderMap, SET_COOKIE};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// Result of `POST /user`
#[derive(Debug)]
pub struct CreatedUser {
    pub user: Value,
    /// Present only when the server minted a new session
    pub session_token: Option<String>,
}

#[derive(Serialize)]
struct MealBody<'a> {
    name: &'a str,
    description: &'a str,
    is_on_diet: bool,
    date: &'a str,
}

/// HTTP client for the diet-server REST API
pub struct Client {
    pub base_url: String,
    pub session: Option<String>,
    pub cookie_name: String,
    client: ReqwestClient,
}

impl Client {
    /// # Arguments
    /// * `base_url` - Server URL (e.g. "http://127.0.0.1:8000")
    /// * `session` - Session token sent as the session cookie
    /// * `cookie_name` - Name of the session cookie
    pub fn new(base_url: &str, session: Option<&str>, cookie_name: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session: session.map(String::from),
            cookie_name: cookie_name.to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.session {
            req = req.header(COOKIE, format!("{}={}", self.cookie_name, token));
        }

        req
    }

    async fn send(&self, req: RequestBuilder) -> CliClientResult<(HeaderMap, Value)> {
        let response = req.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        Ok((headers, body))
    }

    async fn execute(&self, req: RequestBuilder) -> CliClientResult<Value> {
        self.send(req).await.map(|(_, body)| body)
    }

    fn issued_session(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|cookie| cookie.split(';').next())
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.cookie_name)
            .map(|(_, value)| value.to_string())
    }

    // =========================================================================
    // Identity Operations
    // =========================================================================

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        img_url: Option<&str>,
    ) -> CliClientResult<CreatedUser> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            name: &'a str,
            email: &'a str,
            #[serde(rename = "imgUrl", skip_serializing_if = "Option::is_none")]
            img_url: Option<&'a str>,
        }

        let body = CreateRequest {
            name,
            email,
            img_url,
        };
        let req = self.request(Method::POST, "/user").json(&body);
        let (headers, user) = self.send(req).await?;

        Ok(CreatedUser {
            session_token: self.issued_session(&headers),
            user,
        })
    }

    pub async fn list_users(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/user");
        self.execute(req).await
    }

    // =========================================================================
    // Meal Operations
    // =========================================================================

    pub async fn list_meals(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/meal");
        self.execute(req).await
    }

    pub async fn get_meal(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/meal/{}", id));
        self.execute(req).await
    }

    pub async fn create_meal(
        &self,
        name: &str,
        description: &str,
        is_on_diet: bool,
        date: &str,
    ) -> CliClientResult<Value> {
        let body = MealBody {
            name,
            description,
            is_on_diet,
            date,
        };
        let req = self.request(Method::POST, "/meal").json(&body);
        self.execute(req).await
    }

    /// Full replace of every meal field
    pub async fn update_meal(
        &self,
        id: &str,
        name: &str,
        description: &str,
        is_on_diet: bool,
        date: &str,
    ) -> CliClientResult<Value> {
        let body = MealBody {
            name,
            description,
            is_on_diet,
            date,
        };
        let req = self
            .request(Method::PUT, &format!("/meal/{}", id))
            .json(&body);
        self.execute(req).await
    }

    pub async fn delete_meal(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/meal/{}", id));
        self.execute(req).await
    }

    pub async fn metrics(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/meal/metrics");
        self.execute(req).await
    }
}
