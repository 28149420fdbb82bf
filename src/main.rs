use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use roster::config::CONFIG;
use roster::error::RosterError;
use roster::logger::in_memory::InMemoryActivityLog;
use roster::models::NewUser;
use roster::service::RosterService;
use roster::store::csv_file::CsvFileStore;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

type Service = RosterService<InMemoryActivityLog, CsvFileStore>;

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

// Error response struct
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// Newtype wrapper for RosterError to implement IntoResponse
struct ApiError(RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            RosterError::MissingRequiredFields
            | RosterError::NonNumericId
            | RosterError::InvalidEmail
            | RosterError::IdExists
            | RosterError::EmailExists
            | RosterError::DuplicateScan => (StatusCode::BAD_REQUEST, self.0.to_string()),
            RosterError::NoData => (StatusCode::NOT_FOUND, self.0.to_string()),
            RosterError::Storage(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server error: {}", detail),
            ),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

async fn create_user(
    State(service): State<Arc<Service>>,
    Json(payload): Json<NewUser>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.create_user(payload).await?;
    Ok(Json(MessageResponse {
        message: "User created successfully and appended to CSV".to_string(),
    }))
}

async fn download_users(State(service): State<Arc<Service>>) -> Result<impl IntoResponse, ApiError> {
    let contents = service.export_csv().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"users.csv\"",
            ),
        ],
        contents,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_level.as_str())
        .init();

    // Initialize the backing file; any failure here aborts startup
    let store = CsvFileStore::new(&CONFIG.csv_path);
    let activity = InMemoryActivityLog::new();
    let service = Arc::new(RosterService::new(store, activity));
    service.init().await?;

    // Define API routes
    let app = Router::new()
        // add / route with a simple health check
        .route("/", get(|| async { "OK" }))
        .route("/api/users", post(create_user))
        .route("/api/users/download", get(download_users))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()) // Request tracing
        .with_state(service);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
