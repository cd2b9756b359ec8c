use std::path::Path;

use alexa::{Capability, DisplayCategory, Endpoint};
use log::info;
use serde_json::Map;

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    endpoints: Vec<Endpoint>,
}

impl Catalog {
    pub fn new(endpoints: Vec<Endpoint>) -> Catalog {
        Catalog { endpoints }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
        let path = path.as_ref();
        let json = std::fs::read(path)?;
        let endpoints: Vec<Endpoint> = serde_json::from_slice(&json)?;

        if endpoints.is_empty() {
            return Err(Error::EmptyCatalog(path.to_path_buf()));
        }

        info!(
            "loaded {} endpoint(s) from {}",
            endpoints.len(),
            path.display()
        );

        Ok(Catalog { endpoints })
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(vec![pulse_edm_radio()])
    }
}

fn pulse_edm_radio() -> Endpoint {
    Endpoint {
        endpoint_id: "radio-pulse-edm".to_string(),
        description: "Pulse EDM Radio played from Raspberry Pi".to_string(),
        display_categories: vec![DisplayCategory::Switch],
        friendly_name: "Pulse EDM".to_string(),
        manufacturer_name: "x13".to_string(),
        cookie: Map::new(),
        capabilities: vec![
            Capability::endpoint_health().retrievable(),
            Capability::power_controller().retrievable(),
        ],
    }
}
