use thiserror::Error;

/// Failure while wiring a binding to the page or resolving its endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElementKind { id: String, expected: &'static str },

    #[error("cannot listen for {event} on #{id}: {message}")]
    Listener {
        id: String,
        event: &'static str,
        message: String,
    },

    #[error("no value for path parameter #{0}")]
    MissingParam(String),

    #[error("invalid API base address '{0}'")]
    InvalidBase(String),
}

/// Failure of a single action between sending the request and rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("response (HTTP {status}) is not valid JSON: {message}")]
    Decode { status: u16, message: String },

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error(transparent)]
    Binding(#[from] BindingError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Binding(#[from] BindingError),
}
