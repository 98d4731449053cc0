use crate::error::AnalyzeError;
use crate::models::{AnalysisResponse, PartImage, VehicleDetails};
use crate::prompt::build_prompt;
use crate::services::metrics;
use crate::startup::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use std::time::Instant;

/// Multipart field carrying the photo.
pub const IMAGE_FIELD: &str = "image";

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// `POST /analyze`: diagnose one vehicle-part photo.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AnalyzeError> {
    let outcome = run_analysis(&state, multipart).await;

    metrics::record_analysis(match &outcome {
        Ok(_) => "success",
        Err(AnalyzeError::ImageMissing) => "image_missing",
        Err(_) => "failed",
    });

    outcome.map(Json)
}

async fn run_analysis(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AnalysisResponse, AnalyzeError> {
    // A body that is not multipart carries no image.
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(%rejection, "Request body is not multipart");
        AnalyzeError::ImageMissing
    })?;

    let (details, image) = read_upload(multipart).await?;
    let image = image.ok_or(AnalyzeError::ImageMissing)?;

    let prompt = build_prompt(&details);
    let model = state.provider.model();

    tracing::info!(
        model = %model,
        mime_type = %image.mime_type,
        image_bytes = image.data.len(),
        "Analyzing part image"
    );

    let started = Instant::now();
    let result = state.provider.analyze(&prompt, &image).await;
    metrics::record_provider_latency(model, started.elapsed().as_secs_f64());

    let response = result.inspect_err(|e| metrics::record_provider_error(model, e.kind()))?;
    metrics::record_tokens(model, response.input_tokens, response.output_tokens);

    tracing::info!(
        model = %model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish_reason = response.finish_reason.as_str(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Part analysis completed"
    );

    Ok(AnalysisResponse {
        result: response.text,
    })
}

/// Drain the form: the first `image` file part plus the vehicle text fields.
///
/// File parts under other names and extra `image` files are skipped.
async fn read_upload(
    mut multipart: Multipart,
) -> Result<(VehicleDetails, Option<PartImage>), AnalyzeError> {
    let mut details = VehicleDetails::default();
    let mut image: Option<PartImage> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        // Browsers send `filename=""` for a file input left empty.
        if field.file_name().map_or(true, str::is_empty) {
            let value = field.text().await?;
            details.set_field(&name, value);
            continue;
        }

        if name != IMAGE_FIELD || image.is_some() {
            tracing::debug!(field = %name, "Skipping file part");
            continue;
        }

        let mime_type = field
            .content_type()
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        let data = field.bytes().await?;

        image = Some(PartImage { mime_type, data });
    }

    Ok((details, image))
}
