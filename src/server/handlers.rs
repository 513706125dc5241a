use super::AppState;
use crate::core::{aggregate, clock};
use crate::errors::AppError;
use crate::models::TimeRecord;
use crate::utils::date::parse_date;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

fn error_response(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(json!({ "error": msg.into() }))).into_response()
}

fn app_error(e: &AppError) -> Response {
    let status = match e {
        AppError::Validation(_) | AppError::InvalidDate(_) | AppError::InvalidTime(_) => {
            StatusCode::BAD_REQUEST
        }
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, e.to_string())
}

pub async fn health(State(state): State<AppState>) -> Response {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
        "uptimeSeconds": state.started.elapsed().as_secs(),
    }))
    .into_response()
}

pub async fn list_records(State(state): State<AppState>) -> Response {
    let store = state.store.lock().unwrap();
    Json(store.list().to_vec()).into_response()
}

/// Subset of record fields accepted on create; id and createdAt are assigned
/// server-side.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecord {
    #[serde(default = "default_user")]
    user_id: String,
    date: NaiveDate,
    clock_in_time: DateTime<Utc>,
    #[serde(default)]
    clock_out_time: Option<DateTime<Utc>>,
    #[serde(default)]
    notes: String,
}

fn default_user() -> String {
    "default".to_string()
}

pub async fn create_record(
    State(state): State<AppState>,
    Json(body): Json<CreateRecord>,
) -> Response {
    if let Some(out) = body.clock_out_time {
        if out <= body.clock_in_time {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Clock out time must be after clock in time",
            );
        }
    }

    let record = {
        let mut store = state.store.lock().unwrap();
        let record = TimeRecord {
            id: store.next_id(),
            user_id: body.user_id,
            date: body.date,
            clock_in_time: body.clock_in_time,
            clock_out_time: body.clock_out_time,
            notes: body.notes,
            sheets_row_number: None,
            created_at: Utc::now().to_rfc3339(),
            updated_at: None,
        };
        match store.add(record) {
            Ok(r) => r,
            Err(e) => return app_error(&e),
        }
    };

    // complete records mirror as a single full-row append
    if !record.is_open() {
        if let Some(engine) = state.sync.clone() {
            let mirrored = record.clone();
            tokio::spawn(async move { engine.entry_added(&mirrored).await });
        }
    }

    (StatusCode::CREATED, Json(record)).into_response()
}

pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> Response {
    let Value::Object(patch) = patch else {
        return error_response(StatusCode::BAD_REQUEST, "Patch body must be an object");
    };

    let mut store = state.store.lock().unwrap();
    let Some(current) = store.get(id) else {
        return error_response(StatusCode::NOT_FOUND, "Record not found");
    };

    // merge patch over the serialized record, then revalidate as a whole
    let mut merged = match serde_json::to_value(current) {
        Ok(Value::Object(m)) => m,
        _ => return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update record"),
    };
    for (k, v) in patch {
        if k == "id" {
            continue; // record identity is immutable
        }
        merged.insert(k, v);
    }
    merged.insert("updatedAt".to_string(), json!(Utc::now().to_rfc3339()));

    let updated: TimeRecord = match serde_json::from_value(Value::Object(merged)) {
        Ok(r) => r,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, format!("Invalid patch: {e}")),
    };
    if let Some(out) = updated.clock_out_time {
        if out <= updated.clock_in_time {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Clock out time must be after clock in time",
            );
        }
    }

    match store.update(id, move |r| {
        *r = updated;
        Ok(())
    }) {
        Ok(r) => Json(r).into_response(),
        Err(e) => app_error(&e),
    }
}

pub async fn delete_record(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut store = state.store.lock().unwrap();
    match store.remove(id) {
        Ok(true) => Json(json!({ "message": "Record deleted successfully" })).into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Record not found"),
        Err(e) => app_error(&e),
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClockBody {
    #[serde(default = "default_user")]
    user_id: String,
    #[serde(default)]
    notes: String,
}

pub async fn clock_in(
    State(state): State<AppState>,
    body: Option<Json<ClockBody>>,
) -> Response {
    let Json(body) = body.unwrap_or_else(|| {
        Json(ClockBody {
            user_id: default_user(),
            notes: String::new(),
        })
    });

    let record = {
        let mut store = state.store.lock().unwrap();
        match clock::clock_in(&mut store, &body.user_id, Utc::now(), &body.notes) {
            Ok(r) => r,
            Err(e) => return app_error(&e),
        }
    };

    // best-effort mirror, detached from the response
    if let Some(engine) = state.sync.clone() {
        let store = state.store.clone();
        let opened = record.clone();
        tokio::spawn(async move {
            if let Some(row) = engine.session_opened(&opened).await {
                let mut store = store.lock().unwrap();
                let _ = clock::remember_row_ref(&mut store, opened.id, row.0);
            }
        });
    }

    (StatusCode::CREATED, Json(record)).into_response()
}

pub async fn clock_out(
    State(state): State<AppState>,
    body: Option<Json<ClockBody>>,
) -> Response {
    let Json(body) = body.unwrap_or_else(|| {
        Json(ClockBody {
            user_id: default_user(),
            notes: String::new(),
        })
    });

    let record = {
        let mut store = state.store.lock().unwrap();
        match clock::clock_out(&mut store, &body.user_id, Utc::now(), &body.notes) {
            Ok(r) => r,
            Err(e) => return app_error(&e),
        }
    };

    if let Some(engine) = state.sync.clone() {
        let closed = record.clone();
        tokio::spawn(async move { engine.session_closed(&closed).await });
    }

    Json(record).into_response()
}

pub async fn status_default(state: State<AppState>) -> Response {
    status(state, Path(default_user())).await
}

pub async fn status(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let store = state.store.lock().unwrap();
    let session = store.active_session(&user_id);
    Json(json!({
        "isClockedIn": session.is_some(),
        "session": session,
    }))
    .into_response()
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    start_date: Option<String>,
    end_date: Option<String>,
    user_id: Option<String>,
}

pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let range = match (query.start_date.as_deref(), query.end_date.as_deref()) {
        (Some(from), Some(to)) => match (parse_date(from), parse_date(to)) {
            (Some(f), Some(t)) => Some((f, t)),
            _ => return error_response(StatusCode::BAD_REQUEST, "Invalid date range"),
        },
        _ => None,
    };
    let user_id = query.user_id.unwrap_or_else(default_user);

    let store = state.store.lock().unwrap();
    let summary = aggregate::summarize_range(store.list(), &user_id, Utc::now(), range);
    Json(summary).into_response()
}

/// Manual full overwrite of the remote sheet. Unlike the per-mutation
/// mirroring this surfaces failures, since the caller asked for it.
pub async fn export_google_sheets(State(state): State<AppState>) -> Response {
    let Some(engine) = state.sync.clone() else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Google Sheets sync is not configured",
        );
    };
    let records = {
        let store = state.store.lock().unwrap();
        store.list().to_vec()
    };
    match engine.full_sync(&records).await {
        Ok(count) => Json(json!({
            "message": "Data exported to Google Sheets successfully",
            "recordsExported": count,
        }))
        .into_response(),
        Err(e) => app_error(&e),
    }
}

pub async fn backup(State(state): State<AppState>) -> Response {
    let records = {
        let store = state.store.lock().unwrap();
        store.list().to_vec()
    };
    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S");
    let filename = format!("time-records-backup-{timestamp}.json");
    (
        [
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
            (header::CONTENT_TYPE, "application/json".to_string()),
        ],
        Json(records),
    )
        .into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreBody {
    records: Value,
    #[serde(default)]
    replace_existing: bool,
}

pub async fn restore(State(state): State<AppState>, Json(body): Json<RestoreBody>) -> Response {
    if !body.records.is_array() {
        return error_response(StatusCode::BAD_REQUEST, "Invalid backup data format");
    }
    let records: Vec<TimeRecord> = match serde_json::from_value(body.records) {
        Ok(r) => r,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid backup data format: {e}"),
            )
        }
    };
    let mut store = state.store.lock().unwrap();
    let result = if body.replace_existing {
        let count = records.len();
        store.replace_all(records).map(|()| count)
    } else {
        store.merge(records)
    };
    match result {
        Ok(restored) => Json(json!({
            "message": "Data restored successfully",
            "recordsRestored": restored,
            "totalRecords": store.list().len(),
        }))
        .into_response(),
        Err(e) => app_error(&e),
    }
}
