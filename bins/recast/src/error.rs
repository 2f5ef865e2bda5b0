use recast_api::{ConversionError, TypeTag};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("unknown culture '{0}'")]
    UnknownCulture(String),

    #[error("{what} '{text}' is not a valid {target}")]
    NotConvertible {
        what: &'static str,
        text: String,
        target: TypeTag,
    },

    #[error("{0}")]
    Engine(#[from] recast_engine::EngineError),

    #[error("{0}")]
    Conversion(#[from] ConversionError),
}
