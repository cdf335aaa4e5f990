use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::bind_err;
use crate::utils::serde::deserialize_score;

/// One row of the scores export.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScoredVulnerability {
    pub id: String,
    #[serde(deserialize_with = "deserialize_score")]
    pub combined_score: f64,
}

#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub listen_addr: SocketAddr,
    pub debug: bool,
}

impl DashboardConfig {
    pub fn new(data_path: &PathBuf, host: &str, port: u16, debug: bool) -> Result<Self> {
        let listen_addr = (host, port)
            .to_socket_addrs()
            .map_err(|e| bind_err!("Bad listen address '{host}:{port}': {e}"))?
            .next()
            .ok_or_else(|| bind_err!("Listen address '{host}:{port}' did not resolve"))?;
        Ok(Self { data_path: data_path.clone(), listen_addr, debug })
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.listen_addr)
    }
}
