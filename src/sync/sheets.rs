//! Google Sheets REST client (spreadsheets.values API).

use super::{RowRef, SheetClient, HEADER};
use crate::config::SyncConfig;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use regex::Regex;
use serde_json::{json, Value};
use std::time::Duration;

pub struct GoogleSheetsClient {
    http: reqwest::Client,
    api_base: String,
    spreadsheet_id: String,
    access_token: String,
}

impl GoogleSheetsClient {
    /// Build a client from config. `None` when sync is disabled, no
    /// spreadsheet is configured, or the token env var is unset; callers
    /// simply skip mirroring in that case.
    pub fn from_config(cfg: &SyncConfig) -> AppResult<Option<Self>> {
        if !cfg.enabled || cfg.spreadsheet.is_empty() {
            return Ok(None);
        }
        let Ok(token) = std::env::var(&cfg.access_token_env) else {
            return Ok(None);
        };
        let spreadsheet_id = extract_spreadsheet_id(&cfg.spreadsheet).ok_or_else(|| {
            AppError::Config(format!("Invalid spreadsheet id or URL: {}", cfg.spreadsheet))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Some(Self {
            http,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            spreadsheet_id,
            access_token: token,
        }))
    }

    fn values_url(&self, range: &str) -> String {
        format!("{}/{}/values/{}", self.api_base, self.spreadsheet_id, range)
    }

    async fn check(&self, resp: reqwest::Response) -> AppResult<Value> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Sync(format!("Sheets API {status}: {body}")));
        }
        Ok(resp.json().await?)
    }

    async fn put_values(&self, range: &str, values: Vec<Vec<String>>) -> AppResult<Value> {
        let resp = self
            .http
            .put(self.values_url(range))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.access_token)
            .json(&json!({ "values": values }))
            .send()
            .await?;
        self.check(resp).await
    }
}

#[async_trait]
impl SheetClient for GoogleSheetsClient {
    async fn ensure_header_row(&self) -> AppResult<()> {
        let resp = self
            .http
            .get(self.values_url("A1:E1"))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let body = self.check(resp).await?;

        let has_header = body
            .get("values")
            .and_then(Value::as_array)
            .and_then(|rows| rows.first())
            .and_then(Value::as_array)
            .is_some_and(|cells| !cells.is_empty());

        if !has_header {
            let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
            self.put_values("A1:E1", vec![header]).await?;
        }
        Ok(())
    }

    async fn append_row(&self, row: [String; 5]) -> AppResult<RowRef> {
        let resp = self
            .http
            .post(format!("{}:append", self.values_url("A:E")))
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(&self.access_token)
            .json(&json!({ "values": [row] }))
            .send()
            .await?;
        let body = self.check(resp).await?;

        let updated_range = body
            .pointer("/updates/updatedRange")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::Sync("Append response missing updatedRange".to_string()))?;
        parse_row_ref(updated_range)
            .ok_or_else(|| AppError::Sync(format!("Unparseable range: {updated_range}")))
    }

    async fn patch_range(&self, row: RowRef, values: [String; 2]) -> AppResult<()> {
        let range = format!("C{}:D{}", row.0, row.0);
        self.put_values(&range, vec![values.to_vec()]).await?;
        Ok(())
    }

    async fn overwrite_all(&self, rows: Vec<[String; 5]>) -> AppResult<()> {
        let resp = self
            .http
            .post(format!("{}:clear", self.values_url("A:Z")))
            .bearer_auth(&self.access_token)
            .json(&json!({}))
            .send()
            .await?;
        self.check(resp).await?;

        let mut values: Vec<Vec<String>> =
            vec![HEADER.iter().map(|h| h.to_string()).collect()];
        values.extend(rows.into_iter().map(|r| r.to_vec()));
        let range = format!("A1:E{}", values.len());
        self.put_values(&range, values).await?;
        Ok(())
    }
}

/// Accepts a bare spreadsheet id or any docs.google.com spreadsheet URL.
pub fn extract_spreadsheet_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if !input.contains('/') {
        return Some(input.to_string());
    }
    let re = Regex::new(r"/spreadsheets/d/([a-zA-Z0-9\-_]+)").ok()?;
    re.captures(input)
        .map(|caps| caps[1].to_string())
}

/// `updatedRange` comes back like `Sheet1!A5:E5`; the row index is the
/// 1-based number after the A.
fn parse_row_ref(range: &str) -> Option<RowRef> {
    let re = Regex::new(r"A(\d+):?").ok()?;
    let caps = re.captures(range)?;
    caps[1].parse().ok().map(RowRef)
}
