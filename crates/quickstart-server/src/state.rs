//! Shared application state.

use crate::config::Config;
use quickstart_core::{Authorizer, TokenRule};

/// Shared application state. Immutable once built.
pub struct AppState {
    pub authorizer: Authorizer<TokenRule>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let authorizer = Authorizer::new(config.authorizer.rule());

        Self { authorizer, config }
    }
}
