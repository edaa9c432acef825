//! Upload forwarding endpoint.

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::forward::{ForwardError, UploadedFile};
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    response::Json,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tracing::{error, info};

/// Uploads are media files; axum's 2 MiB default would reject most of them.
const MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/forward-upload", post(forward_upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// POST /api/forward-upload - Forward the uploaded `file` field to the
/// transcription service and relay its response.
async fn forward_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    info!("Received file upload request");

    let Some(upload) = read_file_field(multipart).await? else {
        error!("No file provided in upload request");
        return Err(ApiError::bad_request("No file provided"));
    };

    info!(
        "File received: {}, MIME type: {}",
        upload.file_name, upload.content_type
    );

    match state.forwarder.forward(upload).await {
        Ok(response) => Ok(Json(json!({
            "message": "File forwarded successfully",
            "response": response,
        }))),
        Err(err @ (ForwardError::UpstreamRejected { .. } | ForwardError::Transport(_))) => {
            error!("Error forwarding file to transcription service: {}", err);
            Err(ApiError::internal(format!(
                "Failed to forward file to transcription service: {}",
                err
            )))
        }
        Err(err) => {
            error!("Unexpected error while forwarding file: {}", err);
            Err(ApiError::internal(format!(
                "An unexpected error occurred: {}",
                err
            )))
        }
    }
}

/// Pull the `file` field out of the multipart body, if present.
async fn read_file_field(mut multipart: Multipart) -> ApiResult<Option<UploadedFile>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::bad_request(format!("Invalid multipart body: {}", err)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::bad_request(format!("Failed to read file field: {}", err)))?
            .to_vec();

        return Ok(Some(UploadedFile {
            file_name,
            content_type,
            data,
        }));
    }

    Ok(None)
}
