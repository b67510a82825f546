//! Prediction history persistence

pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use sqlite::SqlitePredictionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    Gender,
    GenderTable,
    Genetic,
    Traits,
}

impl PredictionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionKind::Gender => "gender",
            PredictionKind::GenderTable => "gender_table",
            PredictionKind::Genetic => "genetic",
            PredictionKind::Traits => "traits",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gender" => Some(PredictionKind::Gender),
            "gender_table" => Some(PredictionKind::GenderTable),
            "genetic" => Some(PredictionKind::Genetic),
            "traits" => Some(PredictionKind::Traits),
            _ => None,
        }
    }
}

/// One stored prediction: the request as received and the result returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PredictionKind,
    pub data: serde_json::Value,
    pub result: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(kind: PredictionKind, data: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            data,
            result,
            timestamp: Utc::now(),
        }
    }
}

#[async_trait]
pub trait PredictionStore: Send + Sync {
    async fn insert(&self, record: &PredictionRecord) -> Result<()>;
    /// Newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<PredictionRecord>>;
    async fn count(&self) -> Result<i64>;
}
