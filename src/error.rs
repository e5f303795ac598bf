use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ChalkboardError {
    #[error("{value}! is outside the supported range (0 to {max})")]
    #[diagnostic(
        code(chalkboard::domain_error),
        help("Pick a value between 0 and the documented maximum")
    )]
    DomainError { value: u64, max: u64 },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(chalkboard::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(chalkboard::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(chalkboard::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
