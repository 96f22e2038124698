//! Network selection. Callers build a [`NetworkConfig`] once and pass it along, nothing in this
//! crate reads a global network setting.

use std::{fmt::Display, str::FromStr};

use enum_iterator::Sequence;
use serde::Serialize;
use thiserror::Error;

use crate::env::EnvConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Sequence, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
    Local,
}

use NetworkName::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseNetworkError {
    #[error("failed to parse network name {0}")]
    UnknownNetwork(String),
}

impl FromStr for NetworkName {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Mainnet),
            "testnet" => Ok(Testnet),
            "devnet" => Ok(Devnet),
            "local" => Ok(Local),
            unknown_network => Err(ParseNetworkError::UnknownNetwork(
                unknown_network.to_string(),
            )),
        }
    }
}

impl Display for NetworkName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mainnet => write!(f, "mainnet"),
            Testnet => write!(f, "testnet"),
            Devnet => write!(f, "devnet"),
            Local => write!(f, "local"),
        }
    }
}

impl NetworkName {
    pub fn all() -> impl Iterator<Item = NetworkName> {
        enum_iterator::all::<NetworkName>()
    }

    pub fn default_node_url(&self) -> &'static str {
        match self {
            Mainnet => "https://api.mainnet.aptoslabs.com/v1",
            Testnet => "https://api.testnet.aptoslabs.com/v1",
            Devnet => "https://api.devnet.aptoslabs.com/v1",
            Local => "http://127.0.0.1:8080/v1",
        }
    }

    pub fn default_indexer_url(&self) -> &'static str {
        match self {
            Mainnet => "https://api.mainnet.aptoslabs.com/v1/graphql",
            Testnet => "https://api.testnet.aptoslabs.com/v1/graphql",
            Devnet => "https://api.devnet.aptoslabs.com/v1/graphql",
            Local => "http://127.0.0.1:8090/v1/graphql",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub name: NetworkName,
    pub node_url: String,
    pub indexer_url: String,
}

impl NetworkConfig {
    pub fn for_network(name: NetworkName) -> Self {
        Self {
            name,
            node_url: name.default_node_url().to_string(),
            indexer_url: name.default_indexer_url().to_string(),
        }
    }

    /// The configured network, with URL overrides from the environment applied.
    pub fn from_env(env_config: &EnvConfig) -> Self {
        let defaults = Self::for_network(env_config.network);
        Self {
            node_url: env_config
                .node_url
                .clone()
                .unwrap_or(defaults.node_url),
            indexer_url: env_config
                .indexer_url
                .clone()
                .unwrap_or(defaults.indexer_url),
            ..defaults
        }
    }
}
