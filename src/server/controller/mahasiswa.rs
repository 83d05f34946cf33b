use axum::extract::{Path, State};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        mahasiswa::{CreateMahasiswaDto, MahasiswaDto, UpdateMahasiswaDto},
    },
    server::{
        error::AppError,
        middleware::{envelope::Envelope, validation::ValidatedJson},
        model::mahasiswa::{CreateMahasiswaParam, UpdateMahasiswaParam},
        service::mahasiswa::MahasiswaService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static MAHASISWA_TAG: &str = "mahasiswa";

/// Create a new student record.
///
/// Validates the body, then stores a new active record with a generated ID.
///
/// # Returns
/// - `201 Created` - The stored record
/// - `400 Bad Request` - Missing fields, short `nama`, unknown properties or malformed JSON
/// - `409 Conflict` - Another record already uses the `nim`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/mahasiswa",
    tag = MAHASISWA_TAG,
    request_body = CreateMahasiswaDto,
    responses(
        (status = 201, description = "Successfully created student record", body = ApiResponse<MahasiswaDto>),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 409, description = "NIM already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mahasiswa(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMahasiswaDto>,
) -> Result<Envelope<MahasiswaDto>, AppError> {
    let mahasiswa = MahasiswaService::new(&state.db)
        .create(CreateMahasiswaParam::from(payload))
        .await?;

    Ok(Envelope::created(mahasiswa.into_dto()))
}

/// List every student record.
///
/// # Returns
/// - `200 OK` - All records, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/mahasiswa",
    tag = MAHASISWA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved student records", body = ApiResponse<Vec<MahasiswaDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_mahasiswa(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<MahasiswaDto>>, AppError> {
    let records = MahasiswaService::new(&state.db).find_all().await?;

    Ok(Envelope::ok(
        records.into_iter().map(|m| m.into_dto()).collect(),
    ))
}

/// Get a student record by ID.
///
/// # Returns
/// - `200 OK` - The record
/// - `404 Not Found` - No record has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/mahasiswa/{id}",
    tag = MAHASISWA_TAG,
    params(
        ("id" = String, Path, description = "Student record ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student record", body = ApiResponse<MahasiswaDto>),
        (status = 404, description = "Student record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mahasiswa(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<MahasiswaDto>, AppError> {
    let mahasiswa = MahasiswaService::new(&state.db).find_one(&id).await?;

    Ok(Envelope::ok(mahasiswa.into_dto()))
}

/// Partially update a student record.
///
/// Only the fields present in the body are written.
///
/// # Returns
/// - `200 OK` - The record after the update
/// - `400 Bad Request` - Invalid field values, unknown properties or malformed JSON
/// - `404 Not Found` - No record has this ID
/// - `409 Conflict` - Another record already uses the new `nim`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/mahasiswa/{id}",
    tag = MAHASISWA_TAG,
    params(
        ("id" = String, Path, description = "Student record ID (UUID)")
    ),
    request_body = UpdateMahasiswaDto,
    responses(
        (status = 200, description = "Successfully updated student record", body = ApiResponse<MahasiswaDto>),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student record not found", body = ErrorDto),
        (status = 409, description = "NIM already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mahasiswa(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateMahasiswaDto>,
) -> Result<Envelope<MahasiswaDto>, AppError> {
    let mahasiswa = MahasiswaService::new(&state.db)
        .update(&id, UpdateMahasiswaParam::from(payload))
        .await?;

    Ok(Envelope::ok(mahasiswa.into_dto()))
}

/// Delete a student record.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No record has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/mahasiswa/{id}",
    tag = MAHASISWA_TAG,
    params(
        ("id" = String, Path, description = "Student record ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully deleted student record", body = ApiResponse<MessageDto>),
        (status = 404, description = "Student record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mahasiswa(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<MessageDto>, AppError> {
    let ack = MahasiswaService::new(&state.db).remove(&id).await?;

    Ok(Envelope::ok(ack))
}
