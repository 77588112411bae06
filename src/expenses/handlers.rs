use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::AppError,
    expenses::{
        dto::{DeleteResponse, NewExpenseRequest, SummaryResponse},
        repo::Expense,
        summary,
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses))
        .route("/expenses/summary", get(get_summary))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(create_expense))
        .route("/expenses/:id", delete(delete_expense))
}

#[instrument(skip(state))]
pub async fn list_expenses(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Expense>>, AppError> {
    let expenses = Expense::list_by_user(&state.db, user_id).await?;
    Ok(Json(expenses))
}

#[instrument(skip(state, payload))]
pub async fn create_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<NewExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), AppError> {
    let category =
        summary::resolve_category(&payload.category, payload.custom_category.as_deref());
    let expense = Expense::create(
        &state.db,
        user_id,
        &payload.description,
        payload.amount,
        &category,
    )
    .await?;

    info!(user_id = %user_id, expense_id = %expense.id, category = %expense.category, "expense created");
    Ok((StatusCode::CREATED, Json(expense)))
}

#[instrument(skip(state))]
pub async fn delete_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = Expense::delete(&state.db, user_id, id).await?;

    // A miss still reports success so the caller cannot probe other users' ids
    info!(user_id = %user_id, expense_id = %id, deleted, "expense delete");
    Ok(Json(DeleteResponse { deleted }))
}

#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<SummaryResponse>, AppError> {
    let expenses = Expense::list_by_user(&state.db, user_id).await?;
    Ok(Json(SummaryResponse {
        total: summary::total(&expenses),
        categories: summary::categories(&expenses),
        category_totals: summary::category_totals(&expenses),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_response_serialization() {
        let json = serde_json::to_string(&DeleteResponse { deleted: 1 }).unwrap();
        assert_eq!(json, r#"{"deleted":1}"#);
    }

    #[test]
    fn summary_response_serialization() {
        use crate::expenses::dto::CategoryTotal;

        let response = SummaryResponse {
            total: 15.0,
            categories: vec!["food".into()],
            category_totals: vec![CategoryTotal {
                category: "food".into(),
                total: 15.0,
            }],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""total":15.0"#));
        assert!(json.contains(r#""category":"food""#));
    }
}
