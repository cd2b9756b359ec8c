use std::net::SocketAddr;

use crate::{Catalog, Result};

const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug)]
pub struct Config {
    pub listen_address: SocketAddr,
    pub catalog: Catalog,
}

impl Config {
    /// Reads `LISTEN_ADDRESS` and `ALEXANDRA_ENDPOINTS`.
    pub fn from_env() -> Result<Config> {
        Config::from_vars(
            std::env::var("LISTEN_ADDRESS").ok(),
            std::env::var("ALEXANDRA_ENDPOINTS").ok(),
        )
    }

    fn from_vars(listen_address: Option<String>, endpoints_path: Option<String>) -> Result<Config> {
        let listen_address = listen_address
            .as_deref()
            .unwrap_or(DEFAULT_LISTEN_ADDRESS)
            .parse::<SocketAddr>()?;

        let catalog = match endpoints_path {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::default(),
        };

        Ok(Config {
            listen_address,
            catalog,
        })
    }
}
