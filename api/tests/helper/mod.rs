#![allow(dead_code)]

use anyhow::Result;
use api::route::routes;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use kernel::model::member::event::CreateMember;
use registry::AppRegistry;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const ADMIN: &str = "admin";

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub async fn spawn() -> Result<Self> {
        let registry = AppRegistry::in_memory();
        registry
            .member_repository()
            .ensure_admin(CreateMember::new(
                ADMIN.into(),
                ADMIN.into(),
                ADMIN.into(),
                String::new(),
            ))
            .await?;
        Ok(Self {
            router: routes().with_state(registry),
        })
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> Result<Response> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(authorization) = authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };
        Ok(self.router.clone().oneshot(request).await?)
    }

    pub async fn create_member(&self, username: &str, password: &str) -> Result<Response> {
        self.send(
            Method::POST,
            "/members",
            None,
            Some(json!({
                "username": username,
                "password": password,
                "name": "name",
                "phone": "010-1234-5678",
            })),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Response> {
        self.send(
            Method::POST,
            "/login/token",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    /// `Bearer <token>` 形式のヘッダ値を返す
    pub async fn bearer_token(&self, username: &str, password: &str) -> Result<String> {
        let response = self.login(username, password).await?;
        anyhow::ensure!(response.status() == StatusCode::OK, "login failed");
        let body = json_body(response).await?;
        let token = body["accessToken"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("accessToken is missing"))?;
        Ok(format!("Bearer {token}"))
    }
}

pub async fn json_body(response: Response) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn location(response: &Response) -> Result<String> {
    Ok(response
        .headers()
        .get(header::LOCATION)
        .ok_or_else(|| anyhow::anyhow!("Location header is missing"))?
        .to_str()?
        .to_string())
}

/// Location ヘッダの末尾にある ID を取り出す
pub fn id_from_location(response: &Response) -> Result<String> {
    let location = location(response)?;
    location
        .rsplit('/')
        .next()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("malformed Location: {location}"))
}
