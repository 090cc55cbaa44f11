mod archive_contract;
mod contribute;
mod create_contract;
mod finalize;
mod initialize_program;
mod refund;
mod withdraw_funds;

pub use archive_contract::*;
pub use contribute::*;
pub use create_contract::*;
pub use finalize::*;
pub use initialize_program::*;
pub use refund::*;
pub use withdraw_funds::*;

use super::SeacliffInstruction;
use crate::pda::factory::*;
use crate::state::ContractId;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_program::clock::UnixTimestamp;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_program::system_program::ID as SYS_ID;
