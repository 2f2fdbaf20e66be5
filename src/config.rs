/// # Server Configuration
///
/// Listening configuration resolved once at startup from the process
/// environment.
///
/// ## Fields
/// - `port`: TCP port the server binds to on `0.0.0.0`
///
/// ## Resolution Rules
/// - `PORT` set and numeric: that value is used
/// - `PORT` unset, empty, or non-numeric: the default `3333` is used
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
}

/// Port used when `PORT` is absent or not a valid number.
pub const DEFAULT_PORT: u16 = 3333;

impl ServerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// This is the single point where the environment is consulted; the
    /// resulting struct is handed to the bootstrap code and never re-read.
    pub fn from_env() -> Self {
        Self::from_port_var(std::env::var("PORT").ok())
    }

    fn from_port_var(raw: Option<String>) -> Self {
        let port = raw
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { port }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
