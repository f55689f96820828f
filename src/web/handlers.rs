//! REST handlers for the calculator endpoints.
//!
//! Handlers are `async` only because axum requires it; none of them awaits.

use axum::{Extension, Json};
use tracing::debug;

use super::dto::{CalculatorResponse, TwoNumbersRequest};
use crate::calculator::SharedCalculator;

/// Handler for POST /add
pub async fn handle_add(
    Extension(calculator): Extension<SharedCalculator>,
    Json(req): Json<TwoNumbersRequest>,
) -> Json<CalculatorResponse> {
    let result = calculator.add(req.first_number, req.second_number);
    debug!(?req, result, "add");
    Json(CalculatorResponse { result })
}

/// Handler for POST /subtract
pub async fn handle_subtract(
    Extension(calculator): Extension<SharedCalculator>,
    Json(req): Json<TwoNumbersRequest>,
) -> Json<CalculatorResponse> {
    let result = calculator.subtract(req.first_number, req.second_number);
    debug!(?req, result, "subtract");
    Json(CalculatorResponse { result })
}

/// Handler for POST /multiply
pub async fn handle_multiply(
    Extension(calculator): Extension<SharedCalculator>,
    Json(req): Json<TwoNumbersRequest>,
) -> Json<CalculatorResponse> {
    let result = calculator.multiply(req.first_number, req.second_number);
    debug!(?req, result, "multiply");
    Json(CalculatorResponse { result })
}
