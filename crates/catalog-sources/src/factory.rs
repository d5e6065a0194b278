//! Gateway construction from configuration.
//!
//! Only one catalog backend exists today; the factory keeps the binary
//! independent of the concrete client type.

use anyhow::Result;
use catalog_config::Config;
use std::sync::Arc;

use crate::{ContentGateway, ZeldvorikClient};

pub fn create_gateway(config: &Config) -> Result<Arc<dyn ContentGateway>> {
    config.api.validate()?;
    Ok(Arc::new(ZeldvorikClient::from_config(&config.api)))
}
