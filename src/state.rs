use crate::catalog::Catalog;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
        }
    }
}
