use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::application::{AppError, BankService};

use super::ApiError;

/// Header carrying the caller's national ID.
pub const CPF_HEADER: &str = "cpf";

/// National ID from the `cpf` header, already checked against the directory.
///
/// Extraction runs before any body or query extractor, so a request naming an
/// unknown customer is rejected with `CustomerNotFound` before anything else is
/// looked at. A missing or unreadable header counts as an unknown customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedCpf(pub String);

impl FromRequestParts<BankService> for VerifiedCpf {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        service: &BankService,
    ) -> Result<Self, Self::Rejection> {
        let cpf = parts
            .headers
            .get(CPF_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                tracing::debug!("request without a readable cpf header");
                AppError::CustomerNotFound(String::new())
            })?
            .to_string();

        service.verify_account(&cpf).await?;
        Ok(Self(cpf))
    }
}
