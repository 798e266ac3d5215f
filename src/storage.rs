use crate::errors::AppError;
use crate::models::AppData;
use std::{env, io, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

pub const DEFAULT_DATA_PATH: &str = "data/ratings.json";

pub fn resolve_data_path() -> Result<PathBuf, io::Error> {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(PathBuf::from(DEFAULT_DATA_PATH)),
    }
}

/// Loads the rating log. A missing file is a fresh install; an unreadable
/// one is logged and replaced on the next write.
pub async fn load_data(path: &Path) -> AppData {
    match read_data(path).await {
        Ok(Some(data)) => {
            info!(ratings = data.ratings.len(), path = %path.display(), "loaded rating log");
            data
        }
        Ok(None) => {
            info!(path = %path.display(), "no rating log yet, starting empty");
            AppData::default()
        }
        Err(err) => {
            error!(path = %path.display(), "failed to load rating log: {err}");
            AppData::default()
        }
    }
}

async fn read_data(path: &Path) -> io::Result<Option<AppData>> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };
    let mut data: AppData = serde_json::from_slice(&bytes).map_err(io::Error::from)?;

    // Files written before `next_id` existed carry only the ratings.
    let max_id = data.ratings.iter().map(|rating| rating.id).max().unwrap_or(0);
    if data.next_id < max_id {
        warn!(next_id = data.next_id, max_id, "repairing rating id counter");
        data.next_id = max_id;
    }
    Ok(Some(data))
}

/// Writes the whole log beside the target and renames it into place, so a
/// crash mid-write never leaves a truncated file.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, payload).await?;
    fs::rename(&staging, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RatingType;
    use crate::stats::record_rating_at;
    use chrono::NaiveDate;

    fn scratch(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("rating_kiosk_storage_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn persisted_log_reloads_without_staging_file() {
        let path = scratch("reload");
        let mut data = AppData::default();
        let at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        record_rating_at(&mut data, RatingType::Satisfied, at);

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;

        assert_eq!(loaded.ratings, data.ratings);
        assert_eq!(loaded.next_id, 1);
        assert!(!path.with_extension("json.tmp").exists());
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn id_counter_is_repaired_from_old_files() {
        let path = scratch("legacy");
        std::fs::write(
            &path,
            r#"{"ratings": [{"id": 7, "tipo": 1, "avaliacao_date": "2026-10-15",
                "avaliacao_time": "10:00", "sequential_number": 3}]}"#,
        )
        .unwrap();

        let loaded = load_data(&path).await;

        assert_eq!(loaded.next_id, 7);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn unreadable_or_missing_file_starts_empty() {
        let corrupt = scratch("corrupt");
        std::fs::write(&corrupt, b"{not json").unwrap();
        assert!(load_data(&corrupt).await.ratings.is_empty());
        let _ = std::fs::remove_file(&corrupt);

        assert!(load_data(&scratch("absent")).await.ratings.is_empty());
    }
}
