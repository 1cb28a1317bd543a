use std::backtrace::Backtrace;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Mistakes made while wiring a problem up to an engine.
///
/// These are programmer errors in the problem definition, detected before
/// any search work begins. They are distinct from a search that finds no
/// solution, which is an ordinary `None` return, never an error.
///
/// Variables are client-defined generic types, so they appear here in their
/// `Debug` rendering.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("variable {variable} has no domain")]
    MissingDomain { variable: String },

    #[error("constraint {constraint} references unknown variable {variable}")]
    UnknownVariable {
        constraint: String,
        variable: String,
    },

    #[error("initial assignment binds unknown variable {variable}")]
    UnknownSeedVariable { variable: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<ConfigError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<ConfigError> for Error {
    fn from(inner: ConfigError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl Error {
    /// The configuration mistake behind this error.
    pub fn config_error(&self) -> &ConfigError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}
