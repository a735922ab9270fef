//! Handlers for tariff CRUD and file endpoints.
//!
//! Reads are public; every mutation requires the [`AdminAuth`] extractor.
//! Uploads arrive as `multipart/form-data` with the PDF in a `file` part.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use uuid::Uuid;

use super::dto::{
    CreateTariffRequest, TariffFileListResponse, TariffFileResponse, TariffListResponse,
    TariffResponse, UpdateTariffRequest,
};
use crate::adapters::http::middleware::AdminAuth;
use crate::adapters::http::response::ErrorResponse;
use crate::adapters::http::state::AppState;
use crate::application::tariff::{CreateTariffCommand, UpdateTariffCommand, UploadFileCommand};
use crate::domain::foundation::{FileId, TariffId};
use crate::domain::tariff::TariffError;

/// GET /api/tariffs
pub async fn list_tariffs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, TariffApiError> {
    let tariffs = state.list_tariffs_handler().handle().await?;
    Ok(Json(TariffListResponse {
        tariffs: tariffs.into_iter().map(TariffResponse::from).collect(),
    }))
}

/// GET /api/tariffs/:id
pub async fn get_tariff(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, TariffApiError> {
    let tariff = state
        .get_tariff_handler()
        .handle(TariffId::from_uuid(id))
        .await?;
    Ok(Json(TariffResponse::from(tariff)))
}

/// POST /api/tariffs (admin)
pub async fn create_tariff(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(request): Json<CreateTariffRequest>,
) -> Result<impl IntoResponse, TariffApiError> {
    let tariff = state
        .create_tariff_handler()
        .handle(CreateTariffCommand {
            name: request.name,
            base_price: request.base_price,
            description: request.description,
            calories: request.calories,
            features: request.features,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TariffResponse::from(tariff))))
}

/// PUT /api/tariffs/:id (admin)
pub async fn update_tariff(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTariffRequest>,
) -> Result<impl IntoResponse, TariffApiError> {
    let tariff = state
        .update_tariff_handler()
        .handle(UpdateTariffCommand {
            tariff_id: TariffId::from_uuid(id),
            update: request.into(),
        })
        .await?;

    Ok(Json(TariffResponse::from(tariff)))
}

/// DELETE /api/tariffs/:id (admin)
pub async fn delete_tariff(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, TariffApiError> {
    state
        .delete_tariff_handler()
        .handle(TariffId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/tariffs/:id/files (admin)
pub async fn list_files(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, TariffApiError> {
    let files = state
        .list_files_handler()
        .handle(TariffId::from_uuid(id))
        .await?;
    Ok(Json(TariffFileListResponse {
        files: files.into_iter().map(TariffFileResponse::from).collect(),
    }))
}

/// POST /api/tariffs/:id/files (admin, multipart)
pub async fn upload_file(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, TariffApiError> {
    let mut upload: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| TariffError::Storage(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| TariffError::Storage(format!("failed to read upload: {e}")))?
            .to_vec();
        upload = Some((filename, content_type, content));
        break;
    }

    let Some((filename, content_type, content)) = upload else {
        return Err(TariffError::invalid_file_type("missing file part").into());
    };

    let file = state
        .upload_file_handler()
        .handle(UploadFileCommand {
            tariff_id: TariffId::from_uuid(id),
            filename,
            content_type,
            content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TariffFileResponse::from(file))))
}

/// GET /api/files/:id (admin)
pub async fn download_file(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<Response, TariffApiError> {
    let file = state
        .download_file_handler()
        .handle(FileId::from_uuid(id))
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    )
        .into_response())
}

/// DELETE /api/files/:id (admin)
pub async fn delete_file(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, TariffApiError> {
    state
        .delete_file_handler()
        .handle(FileId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Maps tariff errors onto HTTP responses.
pub struct TariffApiError(TariffError);

impl From<TariffError> for TariffApiError {
    fn from(err: TariffError) -> Self {
        Self(err)
    }
}

impl IntoResponse for TariffApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            TariffError::NotFound(_) => (StatusCode::NOT_FOUND, "TARIFF_NOT_FOUND"),
            TariffError::FileNotFound(_) => (StatusCode::NOT_FOUND, "FILE_NOT_FOUND"),
            TariffError::AlreadyExists { .. } => (StatusCode::CONFLICT, "TARIFF_EXISTS"),
            TariffError::InvalidFileType { .. } => (StatusCode::BAD_REQUEST, "INVALID_FILE_TYPE"),
            TariffError::FileSizeExceeded { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, "FILE_TOO_LARGE")
            }
            TariffError::Storage(_) | TariffError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
