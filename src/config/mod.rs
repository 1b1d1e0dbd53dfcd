use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PaginatorError, PaginatorResult};
use crate::paginator::options::{parse_page_size_options, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::paginator::RangeLabel;

/// Paginator configuration.
///
/// Numbers are signed on purpose: the host may hand over anything, and the
/// paginator clamps instead of rejecting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Total number of rows
    pub total_items: i64,

    /// Rows per page
    pub page_size: i64,

    /// Zero-based page to start on
    pub page_index: i64,

    /// Page buttons around the current page (normalized to an odd number)
    pub window_size: i64,

    /// Page sizes offered to the user
    pub page_size_options: Vec<usize>,

    /// Whether to offer first/last buttons
    pub show_first_last_buttons: bool,

    /// Wording of the range label
    pub range_label: RangeLabel,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            total_items: 0,
            page_size: 10,
            page_index: 0,
            window_size: 5,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            show_first_last_buttons: false,
            range_label: RangeLabel::default(),
        }
    }
}

impl PaginatorConfig {
    /// Initialize configuration from the environment and config files
    pub fn init() -> PaginatorResult<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();
        config.load_from_env();

        if let Some(file_config) = Self::load_from_file()? {
            config.merge_with(file_config);
        }

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let number = |key: &str| var(key).and_then(|value| value.trim().parse::<i64>().ok());

        if let Some(total_items) = number("PAGE_WINDOW_TOTAL_ITEMS") {
            self.total_items = total_items;
        }
        if let Some(page_size) = number("PAGE_WINDOW_PAGE_SIZE") {
            self.page_size = page_size;
        }
        if let Some(page_index) = number("PAGE_WINDOW_PAGE_INDEX") {
            self.page_index = page_index;
        }
        if let Some(window_size) = number("PAGE_WINDOW_WINDOW_SIZE") {
            self.window_size = window_size;
        }
        if let Some(options) = var("PAGE_WINDOW_PAGE_SIZE_OPTIONS") {
            self.page_size_options = parse_page_size_options(&options);
        }
    }

    /// Load the first configuration file found, if any
    pub fn load_from_file() -> PaginatorResult<Option<Self>> {
        // Priority:
        // 1. ./.page-window.json
        // 2. ./page-window.json
        // 3. $CONFIG_DIR/page-window/config.json
        let mut config_paths = vec![
            PathBuf::from("./.page-window.json"),
            PathBuf::from("./page-window.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("page-window").join("config.json"));
        }

        for path in config_paths {
            if path.exists() {
                return Self::read(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Read a configuration file
    pub fn read(path: &Path) -> PaginatorResult<Self> {
        debug!("Loading configuration from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Merge another configuration into this one. Fields still at their
    /// defaults in `other` do not override.
    pub fn merge_with(&mut self, other: Self) {
        let defaults = Self::default();
        if other.total_items != defaults.total_items {
            self.total_items = other.total_items;
        }
        if other.page_size != defaults.page_size {
            self.page_size = other.page_size;
        }
        if other.page_index != defaults.page_index {
            self.page_index = other.page_index;
        }
        if other.window_size != defaults.window_size {
            self.window_size = other.window_size;
        }
        if other.page_size_options != defaults.page_size_options {
            self.page_size_options = other.page_size_options;
        }
        if other.show_first_last_buttons {
            self.show_first_last_buttons = true;
        }
        if other.range_label != defaults.range_label {
            self.range_label = other.range_label;
        }
    }

    /// Validate the presentation settings. Pagination numbers are never
    /// rejected; they are clamped when applied.
    pub fn validate(&self) -> PaginatorResult<()> {
        if self.range_label.prefix.trim().is_empty() {
            return Err(PaginatorError::ConfigError(
                "range_label.prefix must not be empty".to_string(),
            ));
        }

        if !self.page_size_options.iter().any(|size| *size > 0) {
            return Err(PaginatorError::ConfigError(
                "page_size_options needs at least one positive size".to_string(),
            ));
        }

        Ok(())
    }
}
