use serde::Deserialize;

use recast_api::Culture;

use crate::error::EngineError;
use crate::registry::{ConverterRegistry, RegistryBuilder};

/// Root configuration, parsed from TOML.
///
/// ```toml
/// culture = "de-DE"
///
/// [registry]
/// standard = true
/// exclude = ["string->bool"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecastConfig {
    /// Culture name. Unset means the process culture.
    #[serde(default)]
    pub culture: Option<String>,

    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Start from the standard converter table.
    #[serde(default = "default_standard")]
    pub standard: bool,

    /// Converter names to drop, e.g. `"f64->i32"`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_standard() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            standard: default_standard(),
            exclude: Vec::new(),
        }
    }
}

impl RecastConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, EngineError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EngineError::Config(format!("{path}: {e}")))?;
        Self::parse(&content).map_err(|e| e.with_context(path))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))
    }

    pub fn culture(&self) -> Result<Culture, EngineError> {
        match &self.culture {
            None => Ok(Culture::current()),
            Some(name) => Culture::lookup(name)
                .ok_or_else(|| EngineError::Config(format!("unknown culture '{name}'"))),
        }
    }

    pub fn build_registry(&self) -> Result<ConverterRegistry, EngineError> {
        let mut builder = if self.registry.standard {
            RegistryBuilder::standard()
        } else {
            RegistryBuilder::empty()
        };
        for name in &self.registry.exclude {
            builder = builder.exclude(name).map_err(|e| e.with_context("registry.exclude"))?;
        }
        let registry = builder.build();
        tracing::info!(converters = registry.len(), excluded = self.registry.exclude.len(), "converter registry configured");
        Ok(registry)
    }
}
