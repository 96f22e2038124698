use serde::Serialize;
use tracing::debug;

use super::{StakeActivityEvent, StakeEventKind};
use crate::{address::addresses_equal, fetch_state::FetchState, units::OctaNewtype};

/// What a delegator put into a pool, as opposed to what the stake grew to through rewards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakePrincipals {
    pub active_principals: OctaNewtype,
    pub pending_inactive_principals: OctaNewtype,
}

impl StakePrincipals {
    /// Rewards accrued on top of the principals, given the delegator's current stake.
    pub fn rewards_earned(
        &self,
        active_stake: OctaNewtype,
        pending_inactive_stake: OctaNewtype,
    ) -> OctaNewtype {
        active_stake
            .saturating_sub(self.active_principals)
            .saturating_add(pending_inactive_stake.saturating_sub(self.pending_inactive_principals))
    }
}

/// Replays stake activity in (transaction version, event index) order. Both running totals are
/// clamped at zero after every event, so history that starts mid-way, e.g. an unlock without the
/// add that preceded it, never goes negative.
pub fn reconstruct_principals(events: &[StakeActivityEvent]) -> StakePrincipals {
    let mut ordered: Vec<&StakeActivityEvent> = events.iter().collect();
    ordered.sort_by_key(|event| (event.transaction_version, event.event_index));

    let mut active = OctaNewtype::ZERO;
    let mut pending_inactive = OctaNewtype::ZERO;

    for event in ordered {
        let amount = event.amount;
        match event.kind() {
            StakeEventKind::Add => {
                active = active.saturating_add(amount);
            }
            StakeEventKind::Unlock => {
                active = active.saturating_sub(amount);
                pending_inactive = pending_inactive.saturating_add(amount);
            }
            StakeEventKind::Reactivate => {
                active = active.saturating_add(amount);
                pending_inactive = pending_inactive.saturating_sub(amount);
            }
            StakeEventKind::Withdraw => {
                pending_inactive = pending_inactive.saturating_sub(amount);
            }
            StakeEventKind::Unknown(event_type) => {
                debug!(
                    %event_type,
                    transaction_version = event.transaction_version,
                    "skipping unknown stake event"
                );
            }
        }
    }

    StakePrincipals {
        active_principals: active,
        pending_inactive_principals: pending_inactive,
    }
}

/// Replays only the activity of one delegator in one pool.
pub fn reconstruct_principals_for(
    events: &[StakeActivityEvent],
    delegator_address: &str,
    pool_address: &str,
) -> StakePrincipals {
    let matching: Vec<StakeActivityEvent> = events
        .iter()
        .filter(|event| {
            addresses_equal(&event.delegator_address, delegator_address)
                && addresses_equal(&event.pool_address, pool_address)
        })
        .cloned()
        .collect();

    debug!(
        delegator_address,
        pool_address,
        event_count = matching.len(),
        "reconstructing stake principals"
    );

    reconstruct_principals(&matching)
}

pub fn principals_from_state(
    events: &FetchState<Vec<StakeActivityEvent>>,
) -> FetchState<StakePrincipals> {
    events
        .as_ref()
        .map(|events| reconstruct_principals(events))
}
