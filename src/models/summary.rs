use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate hours over a store snapshot. Derived on every query, never
/// cached: the store is small and recomputation is always consistent.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_sessions: usize,
    pub today: f64,
    pub week: f64,
    pub month: f64,
    pub total_hours: f64,
    pub average_session_length: f64,
    /// `YYYY-MM-DD` -> hours
    pub daily_breakdown: BTreeMap<String, f64>,
    /// week-start Sunday `YYYY-MM-DD` -> hours
    pub weekly_breakdown: BTreeMap<String, f64>,
    /// `YYYY-MM` -> hours
    pub monthly_breakdown: BTreeMap<String, f64>,
}
