use anyhow::{Context, Result};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Logging {
    pub debug: bool,
}

#[derive(Debug, Deserialize)]
pub struct Query {
    pub source: u32,
    pub target: u32,
    pub queue: String,
}

#[derive(Debug, Deserialize)]
pub struct Stress {
    pub initial_nodes: u32,
    pub iterations: u32,
    pub report_every: u32,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: Logging,
    pub query: Query,
    pub stress: Stress,
}

impl Settings {
    pub fn with_file(config_file: Option<&Path>) -> Result<Self> {
        // Use the included default configuration
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("default-settings.toml"),
            FileFormat::Toml,
        ));

        if let Some(config_file) = config_file {
            builder = builder.add_source(File::new(
                &config_file.to_string_lossy(),
                FileFormat::Toml,
            ));
        }
        let config = builder
            .build()
            .with_context(|| match config_file {
                Some(f) => format!("could not load settings file {}", f.display()),
                None => "invalid default settings".to_string(),
            })?;
        let settings = config.try_deserialize()?;
        Ok(settings)
    }
}
