pub mod converters;
pub mod convert;
pub mod cultures;

use recast_engine::RecastConfig;

use crate::error::CliError;

pub(crate) fn load_config(path: Option<&str>) -> Result<RecastConfig, CliError> {
    let Some(path) = path else {
        return Ok(RecastConfig::default());
    };
    let config = RecastConfig::load(path)?;
    tracing::info!(config = %path, "loaded config");
    Ok(config)
}
