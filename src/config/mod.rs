use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};

use tdb_core::{
    content::{ContentSettings, DEFAULT_PLACEHOLDER_IMAGE_URL},
    entities::LanguageCode,
    ordering::{ConcurrencyMode, OrderingSettings, SlotConflictPolicy},
    usecases::LocationDeletionPolicy,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "tourdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Config {
    pub db: Db,
    pub itinerary: Itinerary,
    pub content: ContentSettings,
    pub share: Share,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
    pub conn_timeout: Duration,
}

pub struct Itinerary {
    pub ordering: OrderingSettings,
    pub location_deletion: LocationDeletionPolicy,
}

pub struct Share {
    pub base_url: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            itinerary,
            content,
            share,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
            connection_timeout,
        } = db.unwrap_or_default();

        if connection_pool_size < 1 {
            return Err(anyhow!("The connection pool needs at least one connection"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
            conn_timeout: connection_timeout.unwrap_or(DEFAULT_CONNECTION_TIMEOUT),
        };

        let raw::Itinerary {
            slot_conflicts,
            concurrency,
            location_deletion,
        } = itinerary.unwrap_or_default();

        let slot_conflicts = match slot_conflicts {
            Some(raw::SlotConflicts::Allow) => SlotConflictPolicy::Allow,
            Some(raw::SlotConflicts::Reject) => SlotConflictPolicy::Reject,
            None => SlotConflictPolicy::default(),
        };
        let concurrency = match concurrency {
            Some(raw::Concurrency::LastWriterWins) => ConcurrencyMode::LastWriterWins,
            Some(raw::Concurrency::Optimistic) => ConcurrencyMode::Optimistic,
            None => ConcurrencyMode::default(),
        };
        let location_deletion = match location_deletion {
            Some(raw::LocationDeletion::Refuse) => LocationDeletionPolicy::Refuse,
            Some(raw::LocationDeletion::Cascade) => LocationDeletionPolicy::Cascade,
            None => LocationDeletionPolicy::default(),
        };
        let itinerary = Itinerary {
            ordering: OrderingSettings {
                slot_conflicts,
                concurrency,
            },
            location_deletion,
        };

        let raw::Content {
            base_language,
            placeholder_image_url,
        } = content.unwrap_or_default();

        let base_language = match base_language {
            Some(lang) => lang
                .parse::<LanguageCode>()
                .map_err(|_| anyhow!("Invalid base language '{lang}'"))?,
            None => LanguageCode::base(),
        };
        let content = ContentSettings {
            base_language,
            placeholder_image_url: placeholder_image_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE_URL.to_owned()),
        };

        let raw::Share { base_url } = share.unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(anyhow!("Missing base URL for share links"));
        }
        let share = Share { base_url };

        Ok(Self {
            db,
            itinerary,
            content,
            share,
        })
    }
}
