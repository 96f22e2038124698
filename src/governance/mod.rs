//! On-chain governance proposals and the voting state shown on the proposal pages. The state is
//! derived the same way `0x1::voting` derives it on chain.

mod proposal;
mod voting;

pub use proposal::Proposal;
pub use voting::{
    can_resolve_early, get_voting_state, is_voting_closed, vote_percentages,
    voting_time_remaining, ProposalVotingState,
};
