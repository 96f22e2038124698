//! Fns to read variables from the environment more conveniently.

use std::env;

use tracing::debug;

use crate::network::{NetworkName, ParseNetworkError};

const SECRET_LOG_BLACKLIST: [&str; 1] = ["INDEXER_API_KEY"];

fn obfuscate_if_secret(blacklist: &[&str], key: &str, value: &str) -> String {
    if blacklist.contains(&key) {
        let mut last_four = value.to_string();
        last_four.drain(0..value.len().saturating_sub(4));
        format!("****{last_four}")
    } else {
        value.to_string()
    }
}

/// Get an environment variable, encoding found or missing as Option, and panic otherwise.
pub fn get_env_var(key: &str) -> Option<String> {
    let var = match env::var(key) {
        Err(env::VarError::NotPresent) => None,
        Err(e) => panic!("{e}"),
        Ok(var) => Some(var),
    };

    if let Some(ref existing_var) = var {
        let output = obfuscate_if_secret(&SECRET_LOG_BLACKLIST, key, existing_var);
        debug!("env var {key}: {output}");
    } else {
        debug!("env var {key} requested but not found")
    };

    var
}

pub fn get_env_bool(key: &str) -> Option<bool> {
    get_env_var(key).map(|var| match var.to_lowercase().as_str() {
        "true" => true,
        "false" => false,
        "t" => true,
        "f" => false,
        "1" => true,
        "0" => false,
        str => panic!("invalid bool value {str} for {key}"),
    })
}

pub struct EnvConfig {
    pub network: NetworkName,
    // Overrides for the network's default endpoints, e.g. a private full node.
    pub node_url: Option<String>,
    pub indexer_url: Option<String>,
    pub indexer_api_key: Option<String>,
    pub log_json: bool,
    pub log_perf: bool,
}

impl EnvConfig {
    /// The indexer API key, safe to print or log.
    pub fn obfuscated_indexer_api_key(&self) -> Option<String> {
        self.indexer_api_key
            .as_deref()
            .map(|key| obfuscate_if_secret(&SECRET_LOG_BLACKLIST, "INDEXER_API_KEY", key))
    }
}

pub fn get_env_config() -> Result<EnvConfig, ParseNetworkError> {
    let network = get_env_var("NETWORK")
        .map(|network| network.parse::<NetworkName>())
        .transpose()?
        .unwrap_or_default();

    Ok(EnvConfig {
        network,
        node_url: get_env_var("NODE_URL"),
        indexer_url: get_env_var("INDEXER_URL"),
        indexer_api_key: get_env_var("INDEXER_API_KEY"),
        log_json: get_env_bool("LOG_JSON").unwrap_or(false),
        log_perf: get_env_bool("LOG_PERF").unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_var_safe_some() {
        let test_key = "TEST_KEY_SAFE_SOME";
        let test_value = "my-env-value";
        std::env::set_var(test_key, test_value);
        assert_eq!(get_env_var(test_key), Some(test_value.to_string()));
    }

    #[test]
    fn test_get_env_var_safe_none() {
        let key = get_env_var("DOESNT_EXIST");
        assert!(key.is_none());
    }

    #[test]
    fn test_get_env_bool_not_there() {
        let flag = get_env_bool("DOESNT_EXIST");
        assert_eq!(flag, None);
    }

    #[test]
    fn test_get_env_bool_true_upper() {
        let test_key = "TEST_KEY_BOOL_TRUE";
        std::env::set_var(test_key, "TRUE");
        assert_eq!(get_env_bool(test_key), Some(true));
    }

    #[test]
    fn test_get_env_bool_zero() {
        let test_key = "TEST_KEY_BOOL_ZERO";
        std::env::set_var(test_key, "0");
        assert_eq!(get_env_bool(test_key), Some(false));
    }

    #[test]
    #[should_panic]
    fn test_get_env_bool_invalid_panics() {
        let test_key = "TEST_KEY_BOOL_INVALID";
        std::env::set_var(test_key, "maybe");
        get_env_bool(test_key);
    }

    #[test]
    fn test_obfuscated_indexer_api_key() {
        let env_config = EnvConfig {
            network: NetworkName::Mainnet,
            node_url: None,
            indexer_url: None,
            indexer_api_key: Some("aptoslabs_secret_k3y9".to_string()),
            log_json: false,
            log_perf: false,
        };
        assert_eq!(
            env_config.obfuscated_indexer_api_key(),
            Some("****k3y9".to_string())
        );

        let without_key = EnvConfig {
            indexer_api_key: None,
            ..env_config
        };
        assert_eq!(without_key.obfuscated_indexer_api_key(), None);
    }

    #[test]
    fn test_obfuscate_if_secret() {
        let secret_key = "SECRET_KEY";
        let blacklist = vec![secret_key];
        assert_eq!(
            obfuscate_if_secret(&blacklist, secret_key, "my_secret_value"),
            "****alue"
        );

        let normal_key = "NORMAL_KEY";
        assert_eq!(
            obfuscate_if_secret(&blacklist, normal_key, "my_normal_value"),
            "my_normal_value"
        );
    }
}
