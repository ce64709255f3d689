use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use clap::ValueEnum;
use homedir::my_home;
use serde::{Deserialize, Serialize};

use crate::highlight::MarkStyle;

const CONFIG_FILE: &str = "config.yaml";

/// Block count from which filtering runs on the rayon pool
const PARALLEL_THRESHOLD: usize = 256;

/// Line prefix that starts a new section in sectioned input
const HEADING_PREFIX: &str = "# ";

/// Which terms get highlighted in a matched block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HighlightTerms {
    /// Every term of the query, whether it took part in the match or not
    #[default]
    All,
    /// Only the terms that made the block match
    Matched,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(flatten)]
    pub style: MarkStyle,
    #[serde(default)]
    pub terms: HighlightTerms,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default = "heading_prefix")]
    pub heading_prefix: String,
    #[serde(default = "parallel_threshold")]
    pub parallel_threshold: usize,

    #[serde(skip_serializing, skip_deserializing)]
    base_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight: HighlightConfig::default(),
            heading_prefix: heading_prefix(),
            parallel_threshold: parallel_threshold(),
            base_path: PathBuf::new(),
        }
    }
}

fn heading_prefix() -> String {
    HEADING_PREFIX.to_string()
}

fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD
}

/// `$BOOLMARK_BASE_PATH`, else `~/.config/boolmark`.
pub fn default_base_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var("BOOLMARK_BASE_PATH") {
        return Ok(PathBuf::from(path));
    }
    let home = my_home()
        .map_err(|e| anyhow!("couldnt look up home dir: {e:?}"))?
        .context("couldnt find home dir")?;
    Ok(home.join(".config").join("boolmark"))
}

impl Config {
    fn validate(&mut self) -> anyhow::Result<()> {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = 1;
        }

        if self.heading_prefix.trim().is_empty() {
            bail!("heading_prefix must not be blank");
        }

        let style = &self.highlight.style;
        if style.open.is_empty() && style.close.is_empty() {
            bail!("highlight.open and highlight.close must not both be empty");
        }

        Ok(())
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(&default_base_path()?)
    }

    /// Load `config.yaml` from `base_path`, writing the defaults first if
    /// the file does not exist yet.
    pub fn load_with(base_path: &Path) -> anyhow::Result<Self> {
        let config_path = base_path.join(CONFIG_FILE);

        if !config_path.exists() {
            log::info!("creating default config at {}", config_path.display());
            let mut config = Self::default();
            config.base_path = base_path.to_path_buf();
            config.save()?;
            return Ok(config);
        }

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("couldnt read {}", config_path.display()))?;
        let mut config: Self = serde_yml::from_str(&config_str)
            .with_context(|| format!("config {} is malformed", config_path.display()))?;

        config.base_path = base_path.to_path_buf();
        config.validate()?;

        // resave in case defaults were filled in or values normalized
        if config_str != serde_yml::to_string(&config)? {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.base_path)
            .with_context(|| format!("couldnt create {}", self.base_path.display()))?;

        let config_str = serde_yml::to_string(&self)?;
        let config_path = self.base_path.join(CONFIG_FILE);
        let temp_path = self
            .base_path
            .join(format!("{}-{CONFIG_FILE}", std::process::id()));

        std::fs::write(&temp_path, config_str.as_bytes())
            .with_context(|| format!("couldnt write {}", temp_path.display()))?;
        std::fs::rename(&temp_path, &config_path)
            .with_context(|| format!("couldnt write {}", config_path.display()))?;
        Ok(())
    }
}
