use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use crate::store::JsonStore;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Dump the record set to `dest_file` as pretty JSON, optionally zipped.
    pub fn backup(store: &JsonStore, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if dest.exists() && !force {
            return Err(AppError::Export(format!(
                "File '{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        let json = serde_json::to_string_pretty(store.list())?;
        fs::write(dest, json)?;

        if compress {
            let compressed = compress_backup(dest)?;
            if compressed != dest {
                fs::remove_file(dest)?;
            }
            return Ok(compressed);
        }
        Ok(dest.to_path_buf())
    }

    /// Load a backup file and merge it into the store, or replace the store
    /// contents entirely. Returns `(restored, total)` counts.
    pub fn restore(store: &mut JsonStore, src_file: &str, replace: bool) -> AppResult<(usize, usize)> {
        let content = fs::read_to_string(src_file)
            .map_err(|e| AppError::Storage(format!("Failed to read backup: {e}")))?;
        let records: Vec<TimeRecord> = serde_json::from_str(&content)
            .map_err(|e| AppError::Validation(format!("Invalid backup data format: {e}")))?;

        let restored = if replace {
            let count = records.len();
            store.replace_all(records)?;
            count
        } else {
            store.merge(records)?
        };
        Ok((restored, store.list().len()))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(
        path.file_name().unwrap_or_default().to_string_lossy(),
        options,
    )
    .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn scratch_store(name: &str) -> JsonStore {
        let dir = std::env::temp_dir().join(format!("timeclock_backup_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("time-records.json");
        std::fs::remove_file(&path).ok();
        JsonStore::open(path).unwrap()
    }

    #[test]
    fn backup_restore_round_trip_is_identity() {
        let mut store = scratch_store("roundtrip");
        let mut a = TimeRecord::open(1, "default", ts("2024-01-01T09:00:00Z"));
        a.close(ts("2024-01-01T17:00:00Z"), "day one").unwrap();
        store.add(a).unwrap();
        store
            .add(TimeRecord::open(2, "default", ts("2024-01-02T09:00:00Z")))
            .unwrap();
        let original = store.list().to_vec();

        let dest = std::env::temp_dir().join("timeclock_backup_roundtrip.json");
        std::fs::remove_file(&dest).ok();
        BackupLogic::backup(&store, dest.to_str().unwrap(), false, false).unwrap();

        // wipe the store, then restore with replace
        store.replace_all(Vec::new()).unwrap();
        let (restored, total) =
            BackupLogic::restore(&mut store, dest.to_str().unwrap(), true).unwrap();

        assert_eq!((restored, total), (2, 2));
        assert_eq!(store.list(), original.as_slice());
    }

    #[test]
    fn restore_rejects_non_array_payload() {
        let mut store = scratch_store("badpayload");
        let bad = std::env::temp_dir().join("timeclock_backup_bad.json");
        std::fs::write(&bad, "{\"not\": \"an array\"}").unwrap();
        let err = BackupLogic::restore(&mut store, bad.to_str().unwrap(), false).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
