//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::upload::{read_upload, syllabus_text};
use crate::analysis::{AnalysisResult, RoleAnalysis};
use crate::catalog::RoleId;
use crate::errors::AppError;
use crate::render::{render_report, RenderedReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub syllabus: String,
    /// Unselected role arrives as absent or "".
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
    pub report: RenderedReport,
}

#[derive(Debug, Deserialize)]
pub struct AllRolesRequest {
    #[serde(default)]
    pub syllabus: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AllRolesResponse {
    pub roles: Vec<RoleAnalysis>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleId>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
///
/// Role keys for the selector, in catalog order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.analyzer.catalog().role_ids(),
    })
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let result = analyze_request(&state, &request)?;
    let report = RenderedReport::from_result(&result);
    Ok(Json(AnalyzeResponse { result, report }))
}

/// POST /api/v1/analyze/report
///
/// Same input as /analyze, returns the plain-text report.
pub async fn handle_analyze_report(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<String, AppError> {
    let result = analyze_request(&state, &request)?;
    Ok(render_report(&result))
}

/// POST /api/v1/analyze/all-roles
///
/// Matched and missing skills for every role from a single scan.
pub async fn handle_analyze_all_roles(
    State(state): State<AppState>,
    Json(request): Json<AllRolesRequest>,
) -> Json<AllRolesResponse> {
    Json(AllRolesResponse {
        roles: state.analyzer.analyze_all_roles(&request.syllabus),
    })
}

/// POST /api/v1/analyze/upload
///
/// Multipart form with a `role` field and a `syllabus` file (text or PDF).
/// The role is resolved before the file is decoded.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    state.analyzer.requirements_for(&upload.role)?;

    let file = upload
        .file
        .ok_or_else(|| AppError::Validation("syllabus file is required".to_string()))?;
    info!(
        "Analyzing uploaded syllabus ({} bytes, pdf: {})",
        file.bytes.len(),
        file.is_pdf()
    );
    let syllabus = syllabus_text(file).await?;

    let result = state.analyzer.analyze(&syllabus, &upload.role)?;
    let report = RenderedReport::from_result(&result);
    Ok(Json(AnalyzeResponse { result, report }))
}

fn analyze_request(state: &AppState, request: &AnalyzeRequest) -> Result<AnalysisResult, AppError> {
    let role = request.role.as_deref().unwrap_or_default();
    Ok(state.analyzer.analyze(&request.syllabus, role)?)
}
