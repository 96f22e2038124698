use std::fmt::Display;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::Proposal;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalVotingState {
    Pending,
    Passed,
    Failed,
    Rejected,
}

impl Display for ProposalVotingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Passed => write!(f, "Passed"),
            Self::Failed => write!(f, "Failed"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

fn millis_until_expiration(proposal: &Proposal, now: &DateTime<Utc>) -> i128 {
    i128::from(proposal.expiration_secs) * 1000 - i128::from(now.timestamp_millis())
}

/// A proposal resolves before expiring once either side reaches the early resolution threshold.
pub fn can_resolve_early(proposal: &Proposal) -> bool {
    match proposal.early_resolution_vote_threshold {
        Some(threshold) => proposal.yes_votes >= threshold || proposal.no_votes >= threshold,
        None => false,
    }
}

pub fn is_voting_closed(proposal: &Proposal, now: &DateTime<Utc>) -> bool {
    can_resolve_early(proposal) || millis_until_expiration(proposal, now) <= 0
}

/// Mirrors `0x1::voting::get_proposal_state`. Quorum is inclusive and a tie counts as rejected.
pub fn get_voting_state(proposal: &Proposal, now: &DateTime<Utc>) -> ProposalVotingState {
    if !is_voting_closed(proposal, now) {
        return ProposalVotingState::Pending;
    }

    let yes_votes = proposal.yes_votes;
    let no_votes = proposal.no_votes;
    let enough_votes = proposal.total_votes() >= proposal.min_vote_threshold;

    if yes_votes <= no_votes && enough_votes {
        ProposalVotingState::Rejected
    } else if yes_votes > no_votes && enough_votes {
        ProposalVotingState::Passed
    } else {
        ProposalVotingState::Failed
    }
}

/// Time left until the voting period expires, `None` once it has.
pub fn voting_time_remaining(proposal: &Proposal, now: &DateTime<Utc>) -> Option<Duration> {
    let remaining = millis_until_expiration(proposal, now);
    if remaining <= 0 {
        None
    } else {
        i64::try_from(remaining).ok().map(Duration::milliseconds)
    }
}

/// Yes and no shares of the votes cast, in percent.
pub fn vote_percentages(proposal: &Proposal) -> (f64, f64) {
    let total = proposal.total_votes();
    if total == 0 {
        return (0.0, 0.0);
    }

    let total = total as f64;
    (
        proposal.yes_votes as f64 / total * 100.0,
        proposal.no_votes as f64 / total * 100.0,
    )
}
