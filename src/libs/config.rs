//! Configuration management for dailyrep.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! resolved by [`DataStorage`]. Every section is optional; a missing file or a
//! missing section falls back to defaults, so the tool works without any setup
//! as long as a credential is available in the environment.
//!
//! ## Sections
//!
//! - **api**: base URL, bearer credential and request timeout
//! - **estimation**: per-booking amounts used when series are derived from reservations
//! - **palette**: colours used by the PDF renderer
//!
//! ## Environment
//!
//! `DAILYREP_API_URL` and `DAILYREP_API_TOKEN` override the saved API values.
//! A `.env` file in the working directory is loaded at startup.
//!
//! ```rust,no_run
//! use dailyrep::libs::config::Config;
//!
//! let config = Config::read()?;
//! let api = config.api_config();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::series::EstimationPolicy;
use crate::api::report_api::ReportApiConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// 8-bit RGB colour, serialized as `[r, g, b]`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    /// Components scaled to `0.0..=1.0`.
    pub fn unit(&self) -> (f32, f32, f32) {
        (self.0 as f32 / 255.0, self.1 as f32 / 255.0, self.2 as f32 / 255.0)
    }

    /// Halfway towards white.
    pub fn lighten(&self) -> Rgb8 {
        Rgb8(self.0 / 2 + 128, self.1 / 2 + 128, self.2 / 2 + 128)
    }
}

/// Colours used by the PDF renderer.
///
/// Passed by reference into the renderer; nothing reads it globally.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Palette {
    pub bar_fill: Rgb8,
    pub bar_edge: Rgb8,
    pub area_fill: Rgb8,
    pub area_edge: Rgb8,
    pub grid: Rgb8,
    pub text: Rgb8,
    pub table_header_fill: Rgb8,
    pub table_header_text: Rgb8,
    pub table_body_fill: Rgb8,
    pub table_border: Rgb8,
    /// Cycled through for flow diagram nodes and bands.
    pub flow: Vec<Rgb8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bar_fill: Rgb8(135, 206, 235),
            bar_edge: Rgb8(0, 0, 128),
            area_fill: Rgb8(144, 238, 144),
            area_edge: Rgb8(0, 100, 0),
            grid: Rgb8(220, 220, 220),
            text: Rgb8(0, 0, 0),
            table_header_fill: Rgb8(128, 128, 128),
            table_header_text: Rgb8(245, 245, 245),
            table_body_fill: Rgb8(245, 245, 220),
            table_border: Rgb8(0, 0, 0),
            flow: vec![
                Rgb8(31, 119, 180),
                Rgb8(255, 127, 14),
                Rgb8(44, 160, 44),
                Rgb8(214, 39, 40),
                Rgb8(148, 103, 189),
                Rgb8(140, 86, 75),
                Rgb8(227, 119, 194),
                Rgb8(127, 127, 127),
            ],
        }
    }
}

impl Palette {
    /// Colour for the `index`-th flow node, cycling through the list.
    pub fn flow_color(&self, index: usize) -> Rgb8 {
        if self.flow.is_empty() {
            return self.bar_fill;
        }
        self.flow[index % self.flow.len()]
    }
}

/// Root configuration. Unset sections are omitted from the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ReportApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimation: Option<EstimationPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

impl Config {
    /// Loads the saved configuration, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the saved configuration file. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// API settings with environment overrides applied.
    pub fn api_config(&self) -> ReportApiConfig {
        self.api.clone().unwrap_or_default().with_env_overrides()
    }

    pub fn estimation_policy(&self) -> EstimationPolicy {
        self.estimation.unwrap_or_default()
    }

    pub fn palette(&self) -> Palette {
        self.palette.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ReportApiConfig::module(),
            ConfigModule {
                key: "estimation".to_string(),
                name: "Estimation".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => config.api = Some(ReportApiConfig::init(&config.api)?),
                "estimation" => {
                    let default = config.estimation.unwrap_or_default();
                    msg_print!(Message::ConfigModuleEstimation);
                    config.estimation = Some(EstimationPolicy {
                        gmv_per_booking: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptGmvPerBooking.to_string())
                            .default(default.gmv_per_booking)
                            .interact_text()?,
                        gross_per_booking: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptGrossPerBooking.to_string())
                            .default(default.gross_per_booking)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
