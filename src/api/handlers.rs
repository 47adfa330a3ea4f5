//! Request handlers. Every handler except `create_account` and `health_check`
//! takes a [`VerifiedCpf`], so unknown customers never reach the service.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::BankService;
use crate::domain::{Cents, Customer, Operation, deserialize_units, serialize_units};

use super::{ApiError, VerifiedCpf};

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_units")]
    pub amount: Cents,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    #[serde(deserialize_with = "deserialize_units")]
    pub amount: Cents,
}

#[derive(Debug, Deserialize)]
pub struct RenameAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: String,
}

/// Balance rendered as a bare JSON number in currency units.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BalanceResponse(#[serde(serialize_with = "serialize_units")] pub Cents);

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// POST /account
pub async fn create_account(
    State(service): State<BankService>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    service.create_account(&request.cpf, &request.name).await?;
    Ok(StatusCode::CREATED)
}

/// GET /account
pub async fn get_account(
    State(service): State<BankService>,
    VerifiedCpf(cpf): VerifiedCpf,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(service.get_account(&cpf).await?))
}

/// PUT /account
pub async fn rename_account(
    State(service): State<BankService>,
    VerifiedCpf(cpf): VerifiedCpf,
    payload: Result<Json<RenameAccountRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    service.rename_account(&cpf, &request.name).await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /account - responds with the customers that remain.
pub async fn delete_account(
    State(service): State<BankService>,
    VerifiedCpf(cpf): VerifiedCpf,
) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(service.delete_account(&cpf).await?))
}

/// GET /statement
pub async fn get_statement(
    State(service): State<BankService>,
    VerifiedCpf(cpf): VerifiedCpf,
) -> Result<Json<Vec<Operation>>, ApiError> {
    Ok(Json(service.get_statement(&cpf).await?))
}

/// GET /statement/date?date=YYYY-MM-DD
pub async fn get_statement_by_date(
    State(service): State<BankService>,
    VerifiedCpf(cpf): VerifiedCpf,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<Vec<Operation>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(service.get_statement_by_date(&cpf, &query.date).await?))
}

/// POST /deposit
pub async fn deposit(
    State(service): State<BankService>,
    VerifiedCpf(cpf): VerifiedCpf,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    service
        .deposit(&cpf, request.amount, request.description)
        .await?;
    Ok(StatusCode::CREATED)
}

/// POST /withdraw
pub async fn withdraw(
    State(service): State<BankService>,
    VerifiedCpf(cpf): VerifiedCpf,
    payload: Result<Json<WithdrawRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    service.withdraw(&cpf, request.amount).await?;
    Ok(StatusCode::CREATED)
}

/// GET /balance
pub async fn get_balance(
    State(service): State<BankService>,
    VerifiedCpf(cpf): VerifiedCpf,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = service.get_balance(&cpf).await?;
    Ok(Json(BalanceResponse(balance)))
}
