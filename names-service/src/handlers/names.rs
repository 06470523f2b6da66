use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{AddNameRequest, ErrorResponse, MessageResponse, NameResponse, UpdateNameRequest},
    utils::ValidatedJson,
    AppState,
};

fn parse_number(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid name number: {}", raw)))
}

/// Add a new name
#[utoipa::path(
    post,
    path = "/add-name",
    request_body = AddNameRequest,
    responses(
        (status = 200, description = "Name added successfully", body = MessageResponse),
        (status = 400, description = "Name already exists or payload is malformed", body = ErrorResponse),
        (status = 500, description = "Error while adding name", body = ErrorResponse)
    ),
    tag = "Names"
)]
#[tracing::instrument(skip(state, req), fields(number = req.number))]
pub async fn add_name(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AddNameRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let failure = format!("Error while adding {} name", req.transliteration);

    // Not atomic with the insert below; concurrent adds of the same name can
    // both pass this check.
    match state
        .store
        .exists(req.number, &req.arabic_name, &req.transliteration)
        .await
    {
        Ok(true) => {
            tracing::info!("Rejected duplicate name");
            return Err(AppError::BadRequest(anyhow::anyhow!("Name already exists")));
        }
        Ok(false) => {}
        Err(e) => return Err(AppError::internal(failure, e)),
    }

    let transliteration = req.transliteration.clone();
    match state.store.insert(req.into()).await {
        Ok(name) => {
            tracing::info!(transliteration = %name.transliteration, "Name added");
            Ok(Json(MessageResponse::new(format!(
                "Allah's {} name added",
                transliteration
            ))))
        }
        Err(e) => Err(AppError::internal(failure, e)),
    }
}

/// Retrieve every stored name
#[utoipa::path(
    get,
    path = "/names-of-allah",
    responses(
        (status = 200, description = "A list of names", body = [NameResponse]),
        (status = 500, description = "Error fetching names", body = ErrorResponse)
    ),
    tag = "Names"
)]
#[tracing::instrument(skip(state))]
pub async fn list_names(State(state): State<AppState>) -> Result<Json<Vec<NameResponse>>, AppError> {
    match state.store.list_all().await {
        Ok(names) => Ok(Json(names.into_iter().map(NameResponse::from).collect())),
        Err(e) => Err(AppError::internal("Error fetching Allah(SWT) names", e)),
    }
}

/// Retrieve a single name by its number
#[utoipa::path(
    get,
    path = "/name/{number}",
    params(
        ("number" = i32, Path, description = "The number of the name")
    ),
    responses(
        (status = 200, description = "Single name", body = NameResponse),
        (status = 400, description = "Number is not an integer", body = ErrorResponse),
        (status = 404, description = "Name not found", body = ErrorResponse),
        (status = 500, description = "Error fetching name", body = ErrorResponse)
    ),
    tag = "Names"
)]
#[tracing::instrument(skip(state))]
pub async fn get_name(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<NameResponse>, AppError> {
    let number = parse_number(&number)?;

    match state.store.find_by_number(number).await {
        Ok(Some(name)) => Ok(Json(name.into())),
        Ok(None) => Err(AppError::NotFound(anyhow::anyhow!("Name not found"))),
        Err(e) => Err(AppError::internal("Error fetching Allah(SWT) name", e)),
    }
}

/// Search names by keyword
///
/// Matches the Arabic name or transliteration, ignoring case. An empty list
/// is returned when nothing matches.
#[utoipa::path(
    get,
    path = "/search/{keyword}",
    params(
        ("keyword" = String, Path, description = "The keyword to search for")
    ),
    responses(
        (status = 200, description = "Matching names, possibly none", body = [NameResponse]),
        (status = 500, description = "Error searching names", body = ErrorResponse)
    ),
    tag = "Names"
)]
#[tracing::instrument(skip(state))]
pub async fn search_names(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<Vec<NameResponse>>, AppError> {
    match state.store.find_by_keyword(&keyword).await {
        Ok(names) => {
            tracing::debug!(matches = names.len(), "Search completed");
            Ok(Json(names.into_iter().map(NameResponse::from).collect()))
        }
        Err(e) => Err(AppError::internal("Error searching Allah's names", e)),
    }
}

/// Update the brief meaning of a name
#[utoipa::path(
    put,
    path = "/update-name/{number}",
    params(
        ("number" = i32, Path, description = "The number of the name")
    ),
    request_body = UpdateNameRequest,
    responses(
        (status = 200, description = "Name updated successfully", body = NameResponse),
        (status = 400, description = "Malformed number or payload", body = ErrorResponse),
        (status = 404, description = "Name not found", body = ErrorResponse),
        (status = 500, description = "Error updating name", body = ErrorResponse)
    ),
    tag = "Names"
)]
#[tracing::instrument(skip(state, req))]
pub async fn update_name(
    State(state): State<AppState>,
    Path(number): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateNameRequest>,
) -> Result<Json<NameResponse>, AppError> {
    let number = parse_number(&number)?;

    match state
        .store
        .update_brief_meaning(number, &req.brief_meaning)
        .await
    {
        Ok(Some(name)) => {
            tracing::info!(number, "Name updated");
            Ok(Json(name.into()))
        }
        Ok(None) => Err(AppError::NotFound(anyhow::anyhow!("Allah's name not found"))),
        Err(e) => Err(AppError::internal("Error updating Allah's name", e)),
    }
}

/// Delete a name by its number
#[utoipa::path(
    delete,
    path = "/delete-name/{number}",
    params(
        ("number" = i32, Path, description = "The number of the name")
    ),
    responses(
        (status = 200, description = "Name deleted successfully", body = MessageResponse),
        (status = 400, description = "Number is not an integer", body = ErrorResponse),
        (status = 404, description = "Name not found", body = ErrorResponse),
        (status = 500, description = "Error deleting name", body = ErrorResponse)
    ),
    tag = "Names"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_name(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let number = parse_number(&number)?;

    match state.store.delete_by_number(number).await {
        Ok(true) => {
            tracing::info!(number, "Name deleted");
            Ok(Json(MessageResponse::new(
                "Allah's name deleted successfully",
            )))
        }
        Ok(false) => Err(AppError::NotFound(anyhow::anyhow!("Allah name not found"))),
        Err(e) => Err(AppError::internal("Error deleting Allah's name", e)),
    }
}
