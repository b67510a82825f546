//! SQLite-backed prediction history

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tokio::task;

use super::{PredictionKind, PredictionRecord, PredictionStore};

#[derive(Clone)]
pub struct SqlitePredictionStore {
    db_path: PathBuf,
}

impl SqlitePredictionStore {
    pub async fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        let path_clone = path.clone();

        task::spawn_blocking(move || {
            let conn = Connection::open(&path_clone)?;

            conn.execute(
                r#"
                CREATE TABLE IF NOT EXISTS predictions (
                    id TEXT PRIMARY KEY,
                    kind TEXT NOT NULL,
                    data TEXT NOT NULL,
                    result TEXT NOT NULL,
                    timestamp TEXT NOT NULL
                );
                "#,
                [],
            )?;
            conn.execute(
                "CREATE INDEX IF NOT EXISTS idx_predictions_timestamp ON predictions(timestamp);",
                [],
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .await??;

        Ok(Self { db_path: path })
    }
}

type Row = (String, String, String, String, String);

fn decode(row: Row) -> Result<PredictionRecord> {
    let (id, kind, data, result, timestamp) = row;
    Ok(PredictionRecord {
        kind: PredictionKind::parse(&kind)
            .ok_or_else(|| anyhow!("unknown prediction kind '{kind}' in record {id}"))?,
        id,
        data: serde_json::from_str(&data)?,
        result: serde_json::from_str(&result)?,
        timestamp: DateTime::parse_from_rfc3339(&timestamp)?.with_timezone(&Utc),
    })
}

#[async_trait]
impl PredictionStore for SqlitePredictionStore {
    async fn insert(&self, record: &PredictionRecord) -> Result<()> {
        let path = self.db_path.clone();
        let id = record.id.clone();
        let kind = record.kind.as_str();
        let data = serde_json::to_string(&record.data)?;
        let result = serde_json::to_string(&record.result)?;
        // fixed width so that text ordering matches time ordering
        let timestamp = record.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true);

        task::spawn_blocking(move || {
            let conn = Connection::open(&path)?;
            conn.execute(
                "INSERT INTO predictions (id, kind, data, result, timestamp) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![&id, kind, &data, &result, &timestamp],
            )?;
            Ok::<_, anyhow::Error>(())
        })
        .await?
    }

    async fn recent(&self, limit: usize) -> Result<Vec<PredictionRecord>> {
        let path = self.db_path.clone();
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        task::spawn_blocking(move || {
            let conn = Connection::open(&path)?;
            let mut stmt = conn.prepare(
                "SELECT id, kind, data, result, timestamp
                 FROM predictions
                 ORDER BY timestamp DESC, rowid DESC
                 LIMIT ?1",
            )?;
            let rows = stmt
                .query_map(params![limit], |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
                })?
                .collect::<rusqlite::Result<Vec<Row>>>()?;

            rows.into_iter().map(decode).collect::<Result<Vec<_>>>()
        })
        .await?
    }

    async fn count(&self) -> Result<i64> {
        let path = self.db_path.clone();

        task::spawn_blocking(move || {
            let conn = Connection::open(&path)?;
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM predictions", [], |row| row.get(0))?;
            Ok::<_, anyhow::Error>(count)
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_insert_and_recent() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        let store = SqlitePredictionStore::new(temp_file.path()).await?;

        let mut older = PredictionRecord::new(
            PredictionKind::Gender,
            json!({"current_pregnancy_order": 1}),
            json!({"predicted_gender": "male"}),
        );
        older.timestamp -= Duration::minutes(5);
        let newer = PredictionRecord::new(
            PredictionKind::Genetic,
            json!({}),
            json!({"risk_assessment": "low"}),
        );

        store.insert(&older).await?;
        store.insert(&newer).await?;
        assert_eq!(store.count().await?, 2);

        let recent = store.recent(10).await?;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, newer.id);
        assert_eq!(recent[0].kind, PredictionKind::Genetic);
        assert_eq!(recent[1].data["current_pregnancy_order"], 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_recent_respects_limit() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        let store = SqlitePredictionStore::new(temp_file.path()).await?;
        for i in 0..5 {
            let record = PredictionRecord::new(PredictionKind::Traits, json!({ "i": i }), json!({}));
            store.insert(&record).await?;
        }
        assert_eq!(store.recent(3).await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_reopen_keeps_records() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        let record = PredictionRecord::new(PredictionKind::GenderTable, json!({}), json!({}));
        SqlitePredictionStore::new(temp_file.path()).await?.insert(&record).await?;

        let reopened = SqlitePredictionStore::new(temp_file.path()).await?;
        assert_eq!(reopened.count().await?, 1);
        Ok(())
    }

    #[test]
    fn test_record_serializes_type_field() {
        let record = PredictionRecord::new(PredictionKind::GenderTable, json!({}), json!({}));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "gender_table");
        assert!(value["id"].as_str().is_some());
    }
}
