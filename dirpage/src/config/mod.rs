use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConfigErrorKind, DirpageError, Result};
use crate::utils::color::{colorize_key, colorize_path, colorize_value};

pub const CONFIG_ENV: &str = "DIRPAGE_CONFIG";
pub const FORMATS: [&str; 4] = ["dropdown", "links", "json", "page"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub default_extensions: Vec<String>,
    pub default_format: String,
    pub field_name: String,
    pub page_title: String,
}

#[derive(Debug, Clone)]
pub enum ConfigAction {
    View,
    Set(String, String),
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;
        config.default_extensions = normalize_extensions(&config.default_extensions);
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// `$DIRPAGE_CONFIG` if set, otherwise `~/.config/dirpage/config.toml`.
    pub fn get_config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("dirpage").join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if !FORMATS.contains(&self.default_format.as_str()) {
            return Err(DirpageError::Config(ConfigErrorKind::InvalidValue(
                "default_format".to_string(),
                format!("expected one of {}", FORMATS.join(", ")),
            )));
        }
        if self.field_name.is_empty() {
            return Err(DirpageError::Config(ConfigErrorKind::InvalidValue(
                "field_name".to_string(),
                "must not be empty".to_string(),
            )));
        }
        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "default_extensions" => {
                let listed: Vec<&str> = value.split(',').collect();
                updated.default_extensions = normalize_extensions(&listed);
            }
            "default_format" => updated.default_format = value.to_string(),
            "field_name" => updated.field_name = value.to_string(),
            "page_title" => updated.page_title = value.to_string(),
            _ => {
                return Err(DirpageError::Config(ConfigErrorKind::UnknownKey(
                    key.to_string(),
                )))
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_extensions: vec![String::from("html"), String::from("md")],
            default_format: String::from("links"),
            field_name: String::from("file"),
            page_title: String::from("Project Files"),
        }
    }
}

/// Trims whitespace and a leading dot from each extension, dropping blanks.
pub fn normalize_extensions<S: AsRef<str>>(extensions: &[S]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

pub fn initialize_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(DirpageError::Other(format!(
            "config file already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    let config = Config::default();
    config.save(path)?;

    println!("Config file initialized at {}", colorize_path(path));
    print_config(&config);
    Ok(())
}

pub fn handle_config_command(action: &ConfigAction, path: &Path) -> Result<()> {
    let mut config = match Config::load(path) {
        Ok(config) => config,
        Err(DirpageError::Io(err)) if err.kind() == io::ErrorKind::NotFound => Config::default(),
        Err(err) => return Err(err),
    };

    match action {
        ConfigAction::View => {
            println!("Config file: {}", colorize_path(path));
            print_config(&config);
        }
        ConfigAction::Set(key, value) => {
            config.set_value(key, value)?;
            config.save(path)?;
            println!("Updated {} = {}", colorize_key(key), colorize_value(value));
        }
    }
    Ok(())
}

fn print_config(config: &Config) {
    println!(
        "{} = {}",
        colorize_key("default_extensions"),
        colorize_value(&config.default_extensions.join(","))
    );
    println!(
        "{} = {}",
        colorize_key("default_format"),
        colorize_value(&config.default_format)
    );
    println!(
        "{} = {}",
        colorize_key("field_name"),
        colorize_value(&config.field_name)
    );
    println!(
        "{} = {}",
        colorize_key("page_title"),
        colorize_value(&config.page_title)
    );
}
