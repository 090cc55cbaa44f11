//! Smart contract built for the [Solana](https://solana.com/) blockchain that
//! escrows goal-based crowdfunding campaigns.
//!
//! A proposer opens a contract with a funding goal, a lifespan and a refund
//! bonus backed by a bond posted at creation. Contributors deposit lamports
//! into the contract bank while the funding window is open. Once the window
//! is settled, either the proposer withdraws the raised funds (goal reached)
//! or each contributor reclaims their deposit together with a pro-rata share
//! of the refund bonus (goal missed).
mod entrypoint;
mod error;

/// Checks and assertions validating accounts and escrow balances.
pub mod assertions;
/// Instructions of the smart contract that may be called externally.
pub mod instruction;
/// Program Derived Addresses owned and modified only by this contract.
pub mod pda;
/// Processor modules dispatching and executing the incoming instructions.
pub mod processor;
/// Data structures persisted in the contract's program-owned accounts.
pub mod state;
/// Checked arithmetic and account allocation utilities.
pub mod utils;

pub use error::SeacliffContractError;
pub use solana_program;

use solana_program::clock::UnixTimestamp;

solana_program::declare_id!("4mBgVuZGzbLQ5SQVU8KVoqmv19Aq9HzDXgovdKyzzrsy");

/// Minimum length of a contract's funding window in seconds.
pub const MIN_CONTRACT_LIFESPAN: UnixTimestamp = 60; // one minute
/// Maximum length of a contract's funding window in seconds.
pub const MAX_CONTRACT_LIFESPAN: UnixTimestamp = 31_557_600; // one year
/// The recommended number of contribution records that can be safely swept
/// via a single `ArchiveContract` call without exceeding the allotted
/// compute units.
pub const RECOMMENDED_CONTRIBUTIONS_SWEPT_PER_CALL: u64 = 30;
