use serde::Deserialize;

/// Base address of the film registration directory
pub const DEFAULT_BASE_URL: &str = "https://www.chinafilm.gov.cn/xxgk/gsxx/dybalx/";

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:138.0) Gecko/20100101 Firefox/138.0";

/// Main configuration structure for filmreg
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base address the index, listing, and detail paths are joined against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// User agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Extraction tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of characters of the label prefix (e.g. `简介: `) stripped from
    /// the synopsis cell, counted in characters rather than bytes
    #[serde(rename = "description-prefix-chars")]
    pub description_prefix_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            description_prefix_chars: 4,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the exported xlsx workbook
    #[serde(rename = "workbook-path")]
    pub workbook_path: String,

    /// Directory holding the durable description cache
    #[serde(rename = "cache-dir")]
    pub cache_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            workbook_path: "films.xlsx".to_string(),
            cache_dir: "temp".to_string(),
        }
    }
}
