use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON record file backing the local store.
    pub data_file: String,

    #[serde(default = "default_user_id")]
    pub user_id: String,

    #[serde(default)]
    pub sync: SyncConfig,
}

/// Remote spreadsheet mirroring. Disabled by default; when enabled the
/// adapter is best-effort and never blocks a local mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Bare spreadsheet id or a full docs.google.com URL.
    #[serde(default)]
    pub spreadsheet: String,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Environment variable holding the OAuth access token.
    #[serde(default = "default_token_env")]
    pub access_token_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_id() -> String {
    "default".to_string()
}
fn default_api_base() -> String {
    "https://sheets.googleapis.com/v4/spreadsheets".to_string()
}
fn default_token_env() -> String {
    "TIMECLOCK_SHEETS_TOKEN".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            spreadsheet: String::new(),
            api_base: default_api_base(),
            access_token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_path().to_string_lossy().to_string(),
            user_id: default_user_id(),
            sync: SyncConfig::default(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timeclock")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeclock.conf")
    }

    pub fn data_file_path() -> PathBuf {
        Self::config_dir().join("time-records.json")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Initialize configuration and record files.
    pub fn init_all(custom_data_file: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_path = if let Some(name) = custom_data_file {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_file_path()
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("Config file: {:?}", Self::config_file());
        }

        if !data_path.exists() {
            if let Some(parent) = data_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&data_path, "[]")?;
        }

        println!("Record file: {:?}", data_path);
        Ok(())
    }
}
