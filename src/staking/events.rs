use serde::{Deserialize, Serialize};

use crate::units::OctaNewtype;

/// The stake operations of `0x1::delegation_pool`, parsed from the fully qualified event type,
/// e.g. `0x1::delegation_pool::AddStakeEvent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StakeEventKind {
    Add,
    Unlock,
    Reactivate,
    Withdraw,
    Unknown(String),
}

impl StakeEventKind {
    pub fn parse(event_type: &str) -> Self {
        match event_type.split("::").nth(2) {
            Some("AddStakeEvent") => Self::Add,
            Some("UnlockStakeEvent") => Self::Unlock,
            Some("ReactivateStakeEvent") => Self::Reactivate,
            Some("WithdrawStakeEvent") => Self::Withdraw,
            _ => Self::Unknown(event_type.to_string()),
        }
    }
}

/// A row of the indexer's `delegated_staking_activities` table.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StakeActivityEvent {
    pub event_type: String,
    pub amount: OctaNewtype,
    pub transaction_version: u64,
    #[serde(default)]
    pub event_index: u64,
    pub delegator_address: String,
    pub pool_address: String,
}

impl StakeActivityEvent {
    pub fn kind(&self) -> StakeEventKind {
        StakeEventKind::parse(&self.event_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_kinds_test() {
        assert_eq!(
            StakeEventKind::parse("0x1::delegation_pool::AddStakeEvent"),
            StakeEventKind::Add
        );
        assert_eq!(
            StakeEventKind::parse("0x1::delegation_pool::UnlockStakeEvent"),
            StakeEventKind::Unlock
        );
        assert_eq!(
            StakeEventKind::parse("0x1::delegation_pool::ReactivateStakeEvent"),
            StakeEventKind::Reactivate
        );
        assert_eq!(
            StakeEventKind::parse("0x1::delegation_pool::WithdrawStakeEvent"),
            StakeEventKind::Withdraw
        );
    }

    #[test]
    fn parse_unknown_kind_test() {
        let event_type = "0x1::delegation_pool::DistributeCommissionEvent";
        assert_eq!(
            StakeEventKind::parse(event_type),
            StakeEventKind::Unknown(event_type.to_string())
        );
    }

    #[test]
    fn parse_short_type_is_unknown_test() {
        assert_eq!(
            StakeEventKind::parse("AddStakeEvent"),
            StakeEventKind::Unknown("AddStakeEvent".to_string())
        );
    }

    #[test]
    fn deserializes_indexer_row_test() {
        let json = r#"{
            "amount": 1100000000,
            "delegator_address": "0xd1",
            "event_index": 3,
            "event_type": "0x1::delegation_pool::AddStakeEvent",
            "pool_address": "0xp00l",
            "transaction_version": 381944418
        }"#;

        let event = serde_json::from_str::<StakeActivityEvent>(json).unwrap();

        assert_eq!(
            event,
            StakeActivityEvent {
                event_type: "0x1::delegation_pool::AddStakeEvent".to_string(),
                amount: OctaNewtype(1_100_000_000),
                transaction_version: 381944418,
                event_index: 3,
                delegator_address: "0xd1".to_string(),
                pool_address: "0xp00l".to_string(),
            }
        );
        assert_eq!(event.kind(), StakeEventKind::Add);
    }

    #[test]
    fn deserializes_row_without_event_index_test() {
        let json = r#"{
            "amount": "5",
            "delegator_address": "0xd1",
            "event_type": "0x1::delegation_pool::WithdrawStakeEvent",
            "pool_address": "0xa",
            "transaction_version": 1
        }"#;

        let event = serde_json::from_str::<StakeActivityEvent>(json).unwrap();
        assert_eq!(event.event_index, 0);
        assert_eq!(event.amount, OctaNewtype(5));
    }
}
