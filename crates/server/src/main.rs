// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Multipart, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use scorebook_api::{ApiError, AppConfig, ImportSummary, import_spreadsheet};
use scorebook_persistence::{AnnouncementRow, PersistenceError, SqlitePersistence, StudentRow};

/// ScoreBook Server - HTTP server for the student score records system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Directory where uploaded spreadsheets are staged before import
    #[arg(short, long, default_value = "uploads")]
    uploads_dir: String,
}

/// Atomic counter for generating unique staged upload filenames.
static UPLOAD_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Derives the staged filename for an uploaded spreadsheet.
///
/// The original extension is preserved because the reader detects the
/// workbook format (xlsx/xls/ods) from it; a missing or suspicious
/// extension falls back to `xlsx`.
fn staged_file_name(original_name: Option<&str>, upload_id: u64) -> String {
    let extension: &str = original_name
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or("xlsx");
    format!("upload_{}_{upload_id}.{extension}", std::process::id())
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access, plus the injected service configuration.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for student records and announcements.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// Injected configuration (default secret, hash cost, admin credential).
    config: Arc<AppConfig>,
    /// Directory where uploaded spreadsheets are staged.
    uploads_dir: Arc<PathBuf>,
}

/// API request for a student login.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct StudentLoginRequest {
    /// The claimed student identifier.
    id: String,
    /// The plain-text password.
    password: String,
}

/// API request for an admin login.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AdminLoginRequest {
    /// The administrator login name.
    user: String,
    /// The administrator password.
    pass: String,
}

/// API request for posting an announcement.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AnnouncementRequest {
    /// The announcement text.
    text: String,
}

/// Query parameters for the record search endpoint.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    /// Name or identifier substring.
    q: String,
}

/// A student record in API responses.
///
/// The stored credential hash is deliberately not serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StudentResponse {
    /// The unique student identifier.
    student_id: String,
    /// The student's name.
    name: String,
    /// The student's email.
    email: String,
    /// Maths score.
    math: f64,
    /// Science score.
    science: f64,
    /// English score.
    english: f64,
    /// Derived pass/fail status.
    status: String,
}

impl From<StudentRow> for StudentResponse {
    fn from(row: StudentRow) -> Self {
        Self {
            student_id: row.student_id,
            name: row.name,
            email: row.email,
            math: row.math,
            science: row.science,
            english: row.english,
            status: row.status,
        }
    }
}

/// API response for a successful student login.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StudentLoginResponse {
    /// Success indicator.
    success: bool,
    /// The authenticated student's record.
    student: StudentResponse,
}

/// API response for the record search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SearchResponse {
    /// Matching student records, bounded.
    students: Vec<StudentResponse>,
}

/// An announcement in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnnouncementResponse {
    /// The announcement ID.
    id: i64,
    /// The announcement text.
    text: String,
    /// Creation timestamp (ISO 8601).
    created_at: String,
}

impl From<AnnouncementRow> for AnnouncementResponse {
    fn from(row: AnnouncementRow) -> Self {
        Self {
            id: row.announcement_id,
            text: row.text,
            created_at: row.created_at,
        }
    }
}

/// API response for a completed spreadsheet import.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UploadResponse {
    /// Success indicator.
    success: bool,
    /// A success message.
    message: String,
    /// Number of rows upserted.
    applied: usize,
    /// Number of rows skipped for an empty identifier.
    skipped: usize,
}

/// API response for write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Success indicator.
    success: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    /// The ID of the created announcement, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    announcement_id: Option<i64>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::SpreadsheetUnreadable { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Handler for POST `/api/admin/upload` endpoint.
///
/// Stages the uploaded spreadsheet under the uploads directory, then drives
/// it through the import pipeline. The staged file is removed once the whole
/// batch has been applied; on failure it is left in place.
async fn handle_upload(
    AxumState(app_state): AxumState<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpError> {
    info!("Handling spreadsheet upload request");

    let mut upload: Option<(Option<String>, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!("Malformed multipart body: {e}"),
    })? {
        if field.name() == Some("file") {
            let file_name: Option<String> = field.file_name().map(ToString::to_string);
            let bytes = field.bytes().await.map_err(|e| HttpError {
                status: StatusCode::BAD_REQUEST,
                message: format!("Failed to read uploaded file: {e}"),
            })?;
            upload = Some((file_name, bytes.to_vec()));
        }
    }

    let (file_name, file_bytes): (Option<String>, Vec<u8>) = upload.ok_or_else(|| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: String::from("Missing 'file' field in upload"),
    })?;

    let upload_id: u64 = UPLOAD_COUNTER.fetch_add(1, Ordering::SeqCst);
    let staged_path: PathBuf = app_state
        .uploads_dir
        .join(staged_file_name(file_name.as_deref(), upload_id));

    tokio::fs::write(&staged_path, &file_bytes)
        .await
        .map_err(|e| HttpError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Failed to stage uploaded file: {e}"),
        })?;

    let mut persistence = app_state.persistence.lock().await;
    let summary: ImportSummary =
        import_spreadsheet(&mut persistence, &app_state.config, &staged_path)?;
    drop(persistence);

    info!(
        applied = summary.applied,
        skipped = summary.skipped,
        "Spreadsheet imported"
    );

    Ok(Json(UploadResponse {
        success: true,
        message: String::from("File uploaded and data imported successfully"),
        applied: summary.applied,
        skipped: summary.skipped,
    }))
}

/// Handler for POST `/api/student/login` endpoint.
async fn handle_student_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<StudentLoginRequest>,
) -> Result<Json<StudentLoginResponse>, HttpError> {
    info!(student_id = %req.id, "Handling student login request");

    let mut persistence = app_state.persistence.lock().await;
    let row: StudentRow = scorebook_api::student_login(&mut persistence, &req.id, &req.password)?;
    drop(persistence);

    Ok(Json(StudentLoginResponse {
        success: true,
        student: StudentResponse::from(row),
    }))
}

/// Handler for POST `/api/admin/login` endpoint.
async fn handle_admin_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(user = %req.user, "Handling admin login request");

    scorebook_api::admin_login(&app_state.config, &req.user, &req.pass)?;

    Ok(Json(WriteResponse {
        success: true,
        message: Some(String::from("Login successful")),
        announcement_id: None,
    }))
}

/// Handler for GET `/api/admin/search` endpoint.
///
/// Searches student records by name or identifier substring.
async fn handle_search(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, HttpError> {
    info!(query = %query.q, "Handling record search request");

    let mut persistence = app_state.persistence.lock().await;
    let rows: Vec<StudentRow> = scorebook_api::search_students(&mut persistence, &query.q)?;
    drop(persistence);

    let students: Vec<StudentResponse> = rows.into_iter().map(StudentResponse::from).collect();

    Ok(Json(SearchResponse { students }))
}

/// Handler for GET `/api/announcements` endpoint.
///
/// Returns the most recent announcements, newest first.
async fn handle_list_announcements(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<AnnouncementResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let rows: Vec<AnnouncementRow> = scorebook_api::recent_announcements(&mut persistence)?;
    drop(persistence);

    let announcements: Vec<AnnouncementResponse> =
        rows.into_iter().map(AnnouncementResponse::from).collect();

    Ok(Json(announcements))
}

/// Handler for POST `/api/admin/announcement` endpoint.
async fn handle_post_announcement(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AnnouncementRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!("Handling post announcement request");

    let mut persistence = app_state.persistence.lock().await;
    let announcement_id: i64 = scorebook_api::post_announcement(&mut persistence, &req.text)?;
    drop(persistence);

    info!(announcement_id, "Announcement posted");

    Ok(Json(WriteResponse {
        success: true,
        message: Some(String::from("Announcement posted successfully")),
        announcement_id: Some(announcement_id),
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/admin/upload", post(handle_upload))
        .route("/api/admin/login", post(handle_admin_login))
        .route("/api/admin/search", get(handle_search))
        .route("/api/admin/announcement", post(handle_post_announcement))
        .route("/api/student/login", post(handle_student_login))
        .route("/api/announcements", get(handle_list_announcements))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ScoreBook Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        warn!("Using in-memory database; records do not survive restarts");
        SqlitePersistence::new_in_memory()?
    };

    let uploads_dir: PathBuf = PathBuf::from(&args.uploads_dir);
    std::fs::create_dir_all(&uploads_dir)?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        config: Arc::new(AppConfig::default()),
        uploads_dir: Arc::new(uploads_dir),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use scorebook_api::{CredentialProvisioner, import_rows};
    use scorebook_domain::{RawCell, RawRow, columns};
    use tower::ServiceExt;

    const TEST_SECRET: &str = "Student123";

    /// Helper to create test app state with in-memory persistence and a
    /// cheap hash cost.
    fn create_test_app_state() -> AppState {
        let persistence: SqlitePersistence =
            SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence");
        let config: AppConfig = AppConfig::new(
            TEST_SECRET.to_string(),
            4,
            "admin".to_string(),
            "password123".to_string(),
        );
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            config: Arc::new(config),
            uploads_dir: Arc::new(std::env::temp_dir()),
        }
    }

    /// Helper to seed one student record through the import pipeline.
    async fn seed_student(app_state: &AppState, id: &str, name: &str) {
        let mut row: RawRow = RawRow::new();
        row.insert(columns::ID, RawCell::Text(id.to_string()));
        row.insert(columns::NAME, RawCell::Text(name.to_string()));
        row.insert(columns::MATHS, RawCell::Number(50.0));
        row.insert(columns::SCIENCE, RawCell::Number(60.0));
        row.insert(columns::ENGLISH, RawCell::Number(70.0));

        let provisioner: CredentialProvisioner =
            CredentialProvisioner::from_config(&app_state.config);
        let mut persistence = app_state.persistence.lock().await;
        import_rows(&mut persistence, &provisioner, &[row]).expect("Seed import failed");
    }

    fn json_request(method: &str, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    #[test]
    fn test_staged_file_name_preserves_uploaded_extension() {
        assert!(staged_file_name(Some("term1.xls"), 1).ends_with(".xls"));
        assert!(staged_file_name(Some("term1.ods"), 2).ends_with(".ods"));
        assert!(staged_file_name(Some("scores.final.xlsx"), 3).ends_with(".xlsx"));
    }

    #[test]
    fn test_staged_file_name_falls_back_to_xlsx() {
        assert!(staged_file_name(None, 4).ends_with(".xlsx"));
        assert!(staged_file_name(Some("noextension"), 5).ends_with(".xlsx"));
        assert!(staged_file_name(Some("trailing-dot."), 6).ends_with(".xlsx"));
        assert!(staged_file_name(Some("weird.x!y"), 7).ends_with(".xlsx"));
    }

    #[test]
    fn test_staged_file_names_are_unique_per_upload() {
        assert_ne!(
            staged_file_name(Some("a.xlsx"), 8),
            staged_file_name(Some("a.xlsx"), 9)
        );
    }

    #[tokio::test]
    async fn test_admin_login_succeeds() {
        let app: Router = build_router(create_test_app_state());

        let req_body: AdminLoginRequest = AdminLoginRequest {
            user: String::from("admin"),
            pass: String::from("password123"),
        };
        let response = app
            .oneshot(json_request("POST", "/api/admin/login", &req_body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let write_response: WriteResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert!(write_response.success);
    }

    #[tokio::test]
    async fn test_admin_login_wrong_password_unauthorized() {
        let app: Router = build_router(create_test_app_state());

        let req_body: AdminLoginRequest = AdminLoginRequest {
            user: String::from("admin"),
            pass: String::from("wrong"),
        };
        let response = app
            .oneshot(json_request("POST", "/api/admin/login", &req_body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_student_login_returns_record_without_credential_hash() {
        let app_state: AppState = create_test_app_state();
        seed_student(&app_state, "S1", "Alice").await;
        let app: Router = build_router(app_state);

        let req_body: StudentLoginRequest = StudentLoginRequest {
            id: String::from("S1"),
            password: String::from(TEST_SECRET),
        };
        let response = app
            .oneshot(json_request("POST", "/api/student/login", &req_body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["student"]["student_id"], "S1");
        assert_eq!(value["student"]["name"], "Alice");
        assert_eq!(value["student"]["status"], "Pass");
        assert!(value["student"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_student_login_wrong_password_unauthorized() {
        let app_state: AppState = create_test_app_state();
        seed_student(&app_state, "S1", "Alice").await;
        let app: Router = build_router(app_state);

        let req_body: StudentLoginRequest = StudentLoginRequest {
            id: String::from("S1"),
            password: String::from("not-the-secret"),
        };
        let response = app
            .oneshot(json_request("POST", "/api/student/login", &req_body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert!(error_response.error);
        assert!(error_response.message.contains("Invalid ID or Password"));
    }

    #[tokio::test]
    async fn test_search_returns_matching_records() {
        let app_state: AppState = create_test_app_state();
        seed_student(&app_state, "S1", "Alice").await;
        seed_student(&app_state, "S2", "Bob").await;
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/admin/search?q=Ali")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let search_response: SearchResponse = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(search_response.students.len(), 1);
        assert_eq!(search_response.students[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_post_and_list_announcements_newest_first() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        for i in 1..=4 {
            let req_body: AnnouncementRequest = AnnouncementRequest {
                text: format!("Notice {i}"),
            };
            let response = app
                .clone()
                .oneshot(json_request("POST", "/api/admin/announcement", &req_body))
                .await
                .unwrap();
            assert_eq!(response.status(), HttpStatusCode::OK);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/announcements")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let announcements: Vec<AnnouncementResponse> =
            serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(announcements.len(), 3);
        assert_eq!(announcements[0].text, "Notice 4");
        assert_eq!(announcements[1].text, "Notice 3");
        assert_eq!(announcements[2].text, "Notice 2");
    }

    #[tokio::test]
    async fn test_empty_announcement_rejected() {
        let app: Router = build_router(create_test_app_state());

        let req_body: AnnouncementRequest = AnnouncementRequest {
            text: String::from("   "),
        };
        let response = app
            .oneshot(json_request("POST", "/api/admin/announcement", &req_body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_with_unreadable_content_leaves_store_untouched() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let boundary: &str = "scorebook-test-boundary";
        let body: String = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"scores.xlsx\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             this is not a spreadsheet\r\n\
             --{boundary}--\r\n"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/upload")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

        let mut persistence = app_state.persistence.lock().await;
        assert_eq!(persistence.count_students().expect("Count failed"), 0);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let boundary: &str = "scorebook-test-boundary";
        let body: String = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"notes\"\r\n\r\n\
             hello\r\n\
             --{boundary}--\r\n"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/admin/upload")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }
}
