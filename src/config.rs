use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub mod db;
pub mod migrations;

/// Company identity printed on exported estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSettings {
    #[serde(default = "default_company_name")]
    pub company_name: String,
    /// Usually a `data:` URL produced by `upload::file_to_data_url`
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
}

fn default_company_name() -> String {
    "DesignValley LTD".to_string()
}

fn default_primary_color() -> String {
    "#6366F1".to_string()
}

fn default_secondary_color() -> String {
    "#4F46E5".to_string()
}

impl Default for BrandSettings {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            company_logo: None,
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
        }
    }
}

impl BrandSettings {
    pub const NAMES: [&'static str; 3] = ["company-name", "primary-color", "secondary-color"];

    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "company-name" => {
                if value.trim().is_empty() {
                    anyhow::bail!("company-name cannot be empty");
                }
                self.company_name = value.to_string();
            }
            "primary-color" => self.primary_color = parse_color(name, value)?,
            "secondary-color" => self.secondary_color = parse_color(name, value)?,
            _ => anyhow::bail!("Unknown brand setting: {}", name),
        }
        Ok(())
    }
}

fn parse_color(name: &str, value: &str) -> Result<String> {
    let hex = value.trim().trim_start_matches('#');
    if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("Invalid value for {}: '{}'. Expected a hex color such as #6366F1.", name, value);
    }
    Ok(format!("#{}", hex.to_uppercase()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    #[serde(default = "default_estimate_valid_days")]
    pub estimate_valid_days: u32,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Overrides `<config dir>/calculators.db`
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

fn default_share_base_url() -> String {
    "http://cost-calculator-app.vercel.app".to_string()
}

fn default_estimate_valid_days() -> u32 {
    15
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            estimate_valid_days: default_estimate_valid_days(),
            currency_symbol: default_currency_symbol(),
            database_path: None,
        }
    }
}

impl Settings {
    pub const NAMES: [&'static str; 4] = [
        "share-base-url",
        "estimate-valid-days",
        "currency-symbol",
        "database-path",
    ];

    pub fn get(&self, name: &str) -> Result<String> {
        let value = match name {
            "share-base-url" => self.share_base_url.clone(),
            "estimate-valid-days" => self.estimate_valid_days.to_string(),
            "currency-symbol" => self.currency_symbol.clone(),
            "database-path" => self
                .database_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => anyhow::bail!("Unknown setting: {}", name),
        };
        Ok(value)
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "share-base-url" => {
                let url = value.trim().trim_end_matches('/');
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    anyhow::bail!("Invalid value for share-base-url: '{}'. Must start with http:// or https://.", value);
                }
                self.share_base_url = url.to_string();
            }
            "estimate-valid-days" => {
                let days: u32 = value.trim().parse().map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid value for estimate-valid-days: '{}'. Must be a positive integer.",
                        value
                    )
                })?;
                if days == 0 {
                    anyhow::bail!("estimate-valid-days must be greater than 0");
                }
                self.estimate_valid_days = days;
            }
            "currency-symbol" => self.currency_symbol = value.to_string(),
            "database-path" => {
                self.database_path = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }

    /// Put one setting back to its default
    pub fn reset(&mut self, name: &str) -> Result<()> {
        let defaults = Settings::default();
        match name {
            "share-base-url" => self.share_base_url = defaults.share_base_url,
            "estimate-valid-days" => self.estimate_valid_days = defaults.estimate_valid_days,
            "currency-symbol" => self.currency_symbol = defaults.currency_symbol,
            "database-path" => self.database_path = defaults.database_path,
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub brand: BrandSettings,
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("calc-builder")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".calc-builder")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config TOML")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Location of the calculator database
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.settings.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::get_config_dir()?.join("calculators.db")),
        }
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn update_setting(&mut self, name: &str, value: &str) -> Result<()> {
        info!("Updating setting {} to: {}", name, value);
        self.settings.set(name, value)?;
        self.save()
    }

    pub fn update_brand(&mut self, name: &str, value: &str) -> Result<()> {
        info!("Updating brand {} to: {}", name, value);
        self.brand.set(name, value)?;
        self.save()
    }

    pub fn set_company_logo(&mut self, logo: Option<String>) -> Result<()> {
        info!("Updating company logo ({})", if logo.is_some() { "set" } else { "cleared" });
        self.brand.company_logo = logo;
        self.save()
    }
}
