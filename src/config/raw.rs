use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("tourdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub itinerary: Option<Itinerary>,
    pub content: Option<Content>,
    pub share: Option<Share>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub connection_timeout: Option<Duration>,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Itinerary {
    pub slot_conflicts: Option<SlotConflicts>,
    pub concurrency: Option<Concurrency>,
    pub location_deletion: Option<LocationDeletion>,
}

impl Default for Itinerary {
    fn default() -> Self {
        Config::default()
            .itinerary
            .expect("Itinerary configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotConflicts {
    Allow,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Concurrency {
    LastWriterWins,
    Optimistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationDeletion {
    Refuse,
    Cascade,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Content {
    pub base_language: Option<String>,
    pub placeholder_image_url: Option<String>,
}

impl Default for Content {
    fn default() -> Self {
        Config::default().content.expect("Content configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Share {
    pub base_url: String,
}

impl Default for Share {
    fn default() -> Self {
        Config::default().share.expect("Share configuration")
    }
}
