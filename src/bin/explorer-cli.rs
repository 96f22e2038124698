use std::path::PathBuf;

use anyhow::Context;
use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

use aptos_explorer::{
    address::{normalize_address, truncate_address},
    balance::format_balance,
    env::get_env_config,
    governance::{get_voting_state, vote_percentages, voting_time_remaining},
    inputs::{read_proposal, read_source, read_stake_activities},
    log,
    move_source::locate_function_line,
    network::{NetworkConfig, NetworkName},
    staking::{reconstruct_principals, reconstruct_principals_for},
    units::APT_DECIMALS,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Format a balance in base units as a decimal amount.
    FormatBalance {
        /// Balance in the asset's smallest unit, e.g. octas.
        balance: String,
        #[clap(long, default_value_t = APT_DECIMALS)]
        decimals: u32,
        /// Cut off fractional digits past this many.
        #[clap(long)]
        fixed_decimal_places: Option<usize>,
    },
    /// Print the standardized long form of an address.
    NormalizeAddress { address: String },
    /// Replay delegated stake activity into principals.
    Principals {
        /// JSON file holding indexer delegated_staking_activities rows.
        #[clap(long)]
        events: PathBuf,
        /// Only replay this delegator's activity, requires --pool.
        #[clap(long, requires = "pool")]
        delegator: Option<String>,
        #[clap(long, requires = "delegator")]
        pool: Option<String>,
    },
    /// Derive the voting state of a governance proposal.
    ProposalState {
        /// JSON file holding a proposal as returned by the node API.
        #[clap(long)]
        proposal: PathBuf,
        /// Unix timestamp to evaluate at, defaults to now.
        #[clap(long)]
        now: Option<i64>,
    },
    /// Find the line declaring a public or entry function in Move source.
    LocateFunction {
        #[clap(long)]
        source: PathBuf,
        #[clap(long)]
        function: String,
    },
    /// List the known networks and their endpoints.
    Networks {},
}

fn main() -> anyhow::Result<()> {
    let env_config = get_env_config()?;
    log::init(&env_config);

    let cli = Cli::parse();

    match cli.command {
        Commands::FormatBalance {
            balance,
            decimals,
            fixed_decimal_places,
        } => {
            println!(
                "{}",
                format_balance(&balance, decimals, fixed_decimal_places)?
            );
        }
        Commands::NormalizeAddress { address } => {
            let normalized = normalize_address(&address)?;
            info!(short = %truncate_address(&normalized), "normalized address");
            println!("{normalized}");
        }
        Commands::Principals {
            events,
            delegator,
            pool,
        } => {
            let events = read_stake_activities(&events)?;
            let principals = match (delegator, pool) {
                (Some(delegator), Some(pool)) => {
                    reconstruct_principals_for(&events, &delegator, &pool)
                }
                _ => reconstruct_principals(&events),
            };
            let output = json!({
                "activePrincipals": principals.active_principals.to_apt_string(),
                "pendingInactivePrincipals": principals.pending_inactive_principals.to_apt_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::ProposalState { proposal, now } => {
            let proposal = read_proposal(&proposal)?;
            let now = match now {
                Some(timestamp) => Utc
                    .timestamp_opt(timestamp, 0)
                    .single()
                    .context("--now is out of range")?,
                None => Utc::now(),
            };
            let (yes_percentage, no_percentage) = vote_percentages(&proposal);
            let output = json!({
                "proposalId": proposal.proposal_id.to_string(),
                "state": get_voting_state(&proposal, &now),
                "secondsRemaining": voting_time_remaining(&proposal, &now)
                    .map(|remaining| remaining.num_seconds()),
                "yesPercentage": yes_percentage,
                "noPercentage": no_percentage,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::LocateFunction { source, function } => {
            let source = read_source(&source)?;
            println!("{}", locate_function_line(&source, &function));
        }
        Commands::Networks {} => {
            let selected = NetworkConfig::from_env(&env_config);
            for network in NetworkName::all() {
                let config = if network == selected.name {
                    selected.clone()
                } else {
                    NetworkConfig::for_network(network)
                };
                println!("{}", serde_json::to_string(&config)?);
            }
            if let Some(api_key) = env_config.obfuscated_indexer_api_key() {
                println!("indexer api key: {api_key}");
            }
        }
    }

    Ok(())
}
