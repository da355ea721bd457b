use serde::Deserialize;
use std::{env, error::Error, fs};

use crate::steamladder::DEFAULT_BASE_URL;

const API_KEY_VAR: &str = "STEAMLADDER_API_KEY";
const BASE_URL_VAR: &str = "STEAMLADDER_BASE_URL";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Settings {
    pub fn new(api_key: &str) -> Settings {
        Settings {
            api_key: api_key.to_string(),
            base_url: default_base_url(),
        }
    }

    /// Reads `STEAMLADDER_API_KEY` and, if set, `STEAMLADDER_BASE_URL`
    pub fn from_env() -> Result<Settings, Box<dyn Error>> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| format!("{} must be set", API_KEY_VAR))?;
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| default_base_url());

        Ok(Settings { api_key, base_url })
    }

    pub fn from_profile(path: &str) -> Result<Settings, Box<dyn Error>> {
        let file_content = fs::read_to_string(path)?;
        let settings = serde_json::from_str::<Settings>(&file_content)?;
        Ok(settings)
    }
}
