// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bankline::api::{CPF_HEADER, create_router};
use bankline::application::BankService;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Helper to create a fresh service with an empty directory
pub fn test_service() -> BankService {
    BankService::new()
}

/// Helper to create a service with "Ana" (cpf 111) already registered
pub async fn service_with_ana() -> Result<BankService> {
    let service = test_service();
    service.create_account("111", "Ana").await?;
    Ok(service)
}

/// Router and service sharing the same directory
pub fn test_app() -> (Router, BankService) {
    let service = test_service();
    (create_router(service.clone()), service)
}

/// Build a request, optionally with a cpf header and a JSON body
pub fn request(method: &str, uri: &str, cpf: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cpf) = cpf {
        builder = builder.header(CPF_HEADER, cpf);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

/// Send a request through the router and return status plus raw body
pub async fn send(app: &Router, req: Request<Body>) -> Result<(StatusCode, Vec<u8>)> {
    let response = app.clone().oneshot(req).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok((status, bytes.to_vec()))
}

/// Send a request and parse the body as JSON
pub async fn send_json(app: &Router, req: Request<Body>) -> Result<(StatusCode, Value)> {
    let (status, bytes) = send(app, req).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}
