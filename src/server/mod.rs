//! REST surface over the record store, mirroring the original HTTP API:
//! records CRUD, clock-in/out, status, summary, backup/restore, health.
//!
//! The store sits behind a mutex; handlers lock, mutate, persist, and only
//! then kick off best-effort sheet mirroring on a detached task.

mod handlers;

use crate::store::JsonStore;
use crate::sync::{SheetClient, SyncEngine};
use axum::routing::{get, post};
use axum::Router;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<JsonStore>>,
    pub sync: Option<Arc<SyncEngine<Box<dyn SheetClient>>>>,
    pub started: Instant,
}

impl AppState {
    pub fn new(store: JsonStore, sync: Option<Box<dyn SheetClient>>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            sync: sync.map(|client| Arc::new(SyncEngine::new(client))),
            started: Instant::now(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/records",
            get(handlers::list_records).post(handlers::create_record),
        )
        .route(
            "/api/records/:id",
            axum::routing::put(handlers::update_record).delete(handlers::delete_record),
        )
        .route("/api/clock-in", post(handlers::clock_in))
        .route("/api/clock-out", post(handlers::clock_out))
        .route("/api/status", get(handlers::status_default))
        .route("/api/status/:user_id", get(handlers::status))
        .route("/api/summary", get(handlers::summary))
        .route("/api/backup", get(handlers::backup))
        .route("/api/restore", post(handlers::restore))
        .route(
            "/api/export-google-sheets",
            post(handlers::export_google_sheets),
        )
        .with_state(state)
}

pub async fn serve(state: AppState, port: u16) -> crate::errors::AppResult<()> {
    let app = router(state);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "time clock server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppResult;
    use crate::sync::RowRef;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct StubSheet {
        overwrites: Arc<Mutex<Vec<usize>>>,
    }

    #[async_trait]
    impl SheetClient for StubSheet {
        async fn ensure_header_row(&self) -> AppResult<()> {
            Ok(())
        }
        async fn append_row(&self, _row: [String; 5]) -> AppResult<RowRef> {
            Ok(RowRef(2))
        }
        async fn patch_range(&self, _row: RowRef, _values: [String; 2]) -> AppResult<()> {
            Ok(())
        }
        async fn overwrite_all(&self, rows: Vec<[String; 5]>) -> AppResult<()> {
            self.overwrites.lock().unwrap().push(rows.len());
            Ok(())
        }
    }

    fn test_state(name: &str) -> AppState {
        let dir = std::env::temp_dir().join(format!("timeclock_server_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("time-records.json");
        std::fs::remove_file(&path).ok();
        AppState::new(JsonStore::open(path).unwrap(), None)
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = router(test_state("health"));
        let (status, body) = send(app, Request::get("/api/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn clock_in_then_out_lifecycle() {
        let state = test_state("lifecycle");

        let (status, session) =
            send(router(state.clone()), post_json("/api/clock-in", json!({}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(session["clockOutTime"], Value::Null);

        // double clock-in is a 400 and leaves the open session alone
        let (status, body) =
            send(router(state.clone()), post_json("/api/clock-in", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("clocked in"));

        let (status, body) = send(
            router(state.clone()),
            Request::get("/api/status").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isClockedIn"], json!(true));

        let (status, closed) = send(
            router(state.clone()),
            post_json("/api/clock-out", json!({"notes": "wrap up"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(closed["notes"], "wrap up");
        assert_ne!(closed["clockOutTime"], Value::Null);

        // no session left to close
        let (status, _) =
            send(router(state), post_json("/api/clock-out", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn record_crud_and_errors() {
        let state = test_state("crud");

        let (status, created) = send(
            router(state.clone()),
            post_json(
                "/api/records",
                json!({
                    "date": "2024-01-02",
                    "clockInTime": "2024-01-02T09:00:00Z",
                    "clockOutTime": "2024-01-02T17:00:00Z",
                    "notes": "manual"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().unwrap();

        // out-of-order times rejected
        let (status, _) = send(
            router(state.clone()),
            post_json(
                "/api/records",
                json!({
                    "date": "2024-01-02",
                    "clockInTime": "2024-01-02T09:00:00Z",
                    "clockOutTime": "2024-01-02T08:00:00Z"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, updated) = send(
            router(state.clone()),
            Request::put(format!("/api/records/{id}"))
                .header("content-type", "application/json")
                .body(Body::from(json!({"notes": "edited"}).to_string()))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["notes"], "edited");

        let (status, _) = send(
            router(state.clone()),
            Request::put("/api/records/999")
                .header("content-type", "application/json")
                .body(Body::from(json!({}).to_string()))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            router(state.clone()),
            Request::delete(format!("/api/records/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, records) = send(
            router(state),
            Request::get("/api/records").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(records.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn summary_counts_only_closed_records() {
        let state = test_state("summary");

        for (start, end) in [
            ("2024-01-10T08:00:00Z", "2024-01-10T10:00:00Z"),
            ("2024-01-10T11:00:00Z", "2024-01-10T14:00:00Z"),
        ] {
            let (status, _) = send(
                router(state.clone()),
                post_json(
                    "/api/records",
                    json!({
                        "date": "2024-01-10",
                        "clockInTime": start,
                        "clockOutTime": end
                    }),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(
            router(state),
            Request::get("/api/summary?startDate=2024-01-01&endDate=2024-01-31")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSessions"], json!(2));
        assert_eq!(body["totalHours"], json!(5.0));
        assert_eq!(body["dailyBreakdown"]["2024-01-10"], json!(5.0));
    }

    #[tokio::test]
    async fn backup_restore_round_trip() {
        let state = test_state("backup");

        let (_, created) = send(
            router(state.clone()),
            post_json(
                "/api/records",
                json!({
                    "date": "2024-01-02",
                    "clockInTime": "2024-01-02T09:00:00Z",
                    "clockOutTime": "2024-01-02T17:00:00Z"
                }),
            ),
        )
        .await;

        let (status, backup) = send(
            router(state.clone()),
            Request::get("/api/backup").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            router(state.clone()),
            post_json(
                "/api/restore",
                json!({"records": backup, "replaceExisting": true}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalRecords"], json!(1));

        let (_, records) = send(
            router(state),
            Request::get("/api/records").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(records.as_array().unwrap()[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn export_google_sheets_runs_full_overwrite() {
        let dir = std::env::temp_dir().join("timeclock_server_sheet_export");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("time-records.json");
        std::fs::remove_file(&path).ok();

        let stub = StubSheet::default();
        let state = AppState::new(
            JsonStore::open(path).unwrap(),
            Some(Box::new(stub.clone())),
        );

        let (status, _) = send(
            router(state.clone()),
            post_json(
                "/api/records",
                json!({
                    "date": "2024-01-02",
                    "clockInTime": "2024-01-02T09:00:00Z",
                    "clockOutTime": "2024-01-02T17:00:00Z"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            router(state),
            Request::post("/api/export-google-sheets")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recordsExported"], json!(1));
        assert_eq!(*stub.overwrites.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn export_google_sheets_without_sync_is_rejected() {
        let (status, body) = send(
            router(test_state("sheet_export_off")),
            Request::post("/api/export-google-sheets")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("not configured"));
    }

    #[tokio::test]
    async fn restore_rejects_non_array() {
        let state = test_state("restore_bad");
        let (status, _) = send(
            router(state),
            post_json("/api/restore", json!({"records": {"oops": 1}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_record_is_404() {
        let state = test_state("missing");
        let (status, body) = send(
            router(state),
            Request::delete("/api/records/12345")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().is_some());
    }
}
