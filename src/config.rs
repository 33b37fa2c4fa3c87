use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory the front-end assets are served from under /static.
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let port = env::var("ACTIVITY_BOARD_PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse::<u16>()
            .map_err(|e| format!("invalid ACTIVITY_BOARD_PORT: {e}"))?;

        Ok(Self {
            host: env::var("ACTIVITY_BOARD_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            static_dir: env::var("ACTIVITY_BOARD_STATIC_DIR").unwrap_or_else(|_| "static".into()),
        })
    }
}
