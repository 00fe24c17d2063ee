use std::env;
use std::path::PathBuf;

use anyhow::{ensure, Context};

use crate::models::slot::SlotSeed;

pub const DEFAULT_SLOT_CAPACITY: i64 = 100;
pub const MAX_SLOT_CAPACITY: i64 = 1_000_000;
pub const DEFAULT_SLOT_NAMES: [&str; 6] = ["第1回", "第2回", "第3回", "第4回", "第5回", "第6回"];

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Comma-separated allowed CORS origins. If empty or "*", allows all origins.
    pub cors_origins: String,
    pub static_dir: PathBuf,
    /// Default slots seeded at startup, all with the same capacity.
    pub slots: Vec<SlotSeed>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let capacity = match env::var("SLOT_CAPACITY") {
            Ok(raw) => parse_capacity(&raw)?,
            Err(_) => DEFAULT_SLOT_CAPACITY,
        };

        let names = match env::var("SLOT_NAMES") {
            Ok(raw) => parse_slot_names(&raw),
            Err(_) => DEFAULT_SLOT_NAMES.iter().map(|s| s.to_string()).collect(),
        };
        ensure!(!names.is_empty(), "SLOT_NAMES must name at least one slot");

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://slots.db".to_string()),
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            cors_origins: env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
            slots: names
                .into_iter()
                .map(|name| SlotSeed::new(name, capacity))
                .collect(),
        })
    }
}

fn parse_capacity(raw: &str) -> anyhow::Result<i64> {
    let capacity = raw
        .trim()
        .parse::<i64>()
        .with_context(|| format!("SLOT_CAPACITY is not an integer: {raw:?}"))?;
    ensure!(
        (1..=MAX_SLOT_CAPACITY).contains(&capacity),
        "SLOT_CAPACITY must be between 1 and {MAX_SLOT_CAPACITY}, got {capacity}"
    );
    Ok(capacity)
}

/// Split a comma-separated list, dropping blanks and repeated names.
fn parse_slot_names(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
