pub mod address;
pub mod balance;
pub mod env;
pub mod fetch_state;
pub mod governance;
pub mod inputs;
mod json_codecs;
pub mod log;
pub mod move_source;
pub mod network;
pub mod staking;
pub mod units;

pub use address::{normalize_address, truncate_apt_suffix, try_normalize_address};
pub use balance::format_balance;
pub use governance::get_voting_state;
pub use move_source::locate_function_line;
pub use staking::reconstruct_principals;
