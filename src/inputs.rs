//! Loads explorer data saved to disk, e.g. an indexer response or a proposal fetched with curl.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::{governance::Proposal, staking::StakeActivityEvent};

#[derive(Deserialize)]
struct StakeActivitiesData {
    delegated_staking_activities: Vec<StakeActivityEvent>,
}

#[derive(Deserialize)]
struct StakeActivitiesEnvelope {
    data: StakeActivitiesData,
}

// Accept both a bare list of rows and the GraphQL response as the indexer returns it.
#[derive(Deserialize)]
#[serde(untagged)]
enum StakeActivitiesInput {
    Rows(Vec<StakeActivityEvent>),
    Envelope(StakeActivitiesEnvelope),
}

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn parse_stake_activities(json: &str) -> Result<Vec<StakeActivityEvent>> {
    let input = serde_json::from_str::<StakeActivitiesInput>(json)
        .context("failed to parse stake activities")?;

    let events = match input {
        StakeActivitiesInput::Rows(events) => events,
        StakeActivitiesInput::Envelope(envelope) => envelope.data.delegated_staking_activities,
    };

    debug!(event_count = events.len(), "parsed stake activities");

    Ok(events)
}

pub fn read_stake_activities(path: &Path) -> Result<Vec<StakeActivityEvent>> {
    let json = read_source(path)?;
    parse_stake_activities(&json).with_context(|| format!("in {}", path.display()))
}

pub fn read_proposal(path: &Path) -> Result<Proposal> {
    let json = read_source(path)?;
    serde_json::from_str::<Proposal>(&json)
        .with_context(|| format!("failed to parse proposal in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::units::OctaNewtype;

    const ROW: &str = r#"{
        "amount": 100,
        "delegator_address": "0xd1",
        "event_index": 0,
        "event_type": "0x1::delegation_pool::AddStakeEvent",
        "pool_address": "0xa11",
        "transaction_version": 12
    }"#;

    #[test]
    fn parses_bare_rows_test() {
        let events = parse_stake_activities(&format!("[{ROW}]")).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].amount, OctaNewtype(100));
    }

    #[test]
    fn parses_graphql_envelope_test() {
        let json = format!(r#"{{ "data": {{ "delegated_staking_activities": [{ROW}, {ROW}] }} }}"#);
        let events = parse_stake_activities(&json).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn rejects_garbage_test() {
        assert!(parse_stake_activities(r#"{ "errors": [] }"#).is_err());
    }

    #[test]
    fn reads_proposal_file_test() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "creation_time_secs": "0",
                "early_resolution_vote_threshold": {{ "vec": [] }},
                "expiration_secs": "10",
                "min_vote_threshold": "50",
                "no_votes": "40",
                "proposal_id": "7",
                "proposer": "0x1",
                "yes_votes": "60"
            }}"#
        )
        .unwrap();

        let proposal = read_proposal(file.path()).unwrap();
        assert_eq!(proposal.proposal_id, 7);
        assert_eq!(proposal.yes_votes, 60);
    }

    #[test]
    fn missing_file_test() {
        let error = read_source(Path::new("/does/not/exist.move")).unwrap_err();
        assert!(error.to_string().contains("/does/not/exist.move"));
    }
}
