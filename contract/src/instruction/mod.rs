#[cfg(feature = "client")]
pub mod factory;

use crate::state::ContractId;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::clock::UnixTimestamp;

/// The closed set of operations understood by the contract, together with
/// their wire payloads.
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, Debug)]
pub enum SeacliffInstruction {
    /// One-time program setup, creates the contract pool.
    InitializeProgram { initial_contract_pool_len: u32 },
    /// Opens a new crowdfunding contract and posts the proposer's bond.
    CreateContract {
        id: ContractId,
        goal: u64,
        lifespan: UnixTimestamp,
        refund_bonus: u64,
        bond: u64,
    },
    /// Deposits lamports into an active contract's escrow.
    Contribute { id: ContractId, amount: u64 },
    /// Settles the funding window into `Succeeded` or `Failed`.
    Finalize { id: ContractId },
    /// Pays a successful campaign out to its proposer.
    WithdrawFunds { id: ContractId },
    /// Pays one contributor's claim on a failed campaign.
    Refund { id: ContractId },
    /// Reclaims the accounts of a closed contract.
    ArchiveContract { id: ContractId },
}
