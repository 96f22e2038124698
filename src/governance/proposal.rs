use serde::{Deserialize, Serialize};

use crate::json_codecs::{
    from_move_option_u128_string, from_u128_string, from_u64_string,
    to_move_option_u128_string, to_u128_string, to_u64_string,
};

/// A snapshot of a `0x1::voting::Proposal` as returned by the node API.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Proposal {
    #[serde(deserialize_with = "from_u64_string", serialize_with = "to_u64_string")]
    pub proposal_id: u64,
    pub proposer: String,
    #[serde(
        deserialize_with = "from_u128_string",
        serialize_with = "to_u128_string"
    )]
    pub yes_votes: u128,
    #[serde(
        deserialize_with = "from_u128_string",
        serialize_with = "to_u128_string"
    )]
    pub no_votes: u128,
    #[serde(
        deserialize_with = "from_u128_string",
        serialize_with = "to_u128_string"
    )]
    pub min_vote_threshold: u128,
    #[serde(
        default,
        deserialize_with = "from_move_option_u128_string",
        serialize_with = "to_move_option_u128_string"
    )]
    pub early_resolution_vote_threshold: Option<u128>,
    #[serde(deserialize_with = "from_u64_string", serialize_with = "to_u64_string")]
    pub expiration_secs: u64,
    #[serde(deserialize_with = "from_u64_string", serialize_with = "to_u64_string")]
    pub creation_time_secs: u64,
    #[serde(default)]
    pub is_resolved: bool,
    #[serde(default)]
    pub execution_hash: String,
}

impl Proposal {
    pub fn total_votes(&self) -> u128 {
        self.yes_votes.saturating_add(self.no_votes)
    }
}
