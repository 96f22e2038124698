//! Delegation pool staking. The chain only exposes a delegator's current stake, so the principal
//! (what was put in) is recovered by replaying the delegator's stake activity from the indexer.

mod events;
mod principals;

pub use events::{StakeActivityEvent, StakeEventKind};
pub use principals::{
    principals_from_state, reconstruct_principals, reconstruct_principals_for, StakePrincipals,
};
