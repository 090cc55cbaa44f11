mod archive_contract;
mod contribute;
mod create_contract;
mod finalize;
mod initialize_program;
mod refund;
mod withdraw_funds;

use crate::assertions::*;
use crate::error::SeacliffContractError;
use crate::instruction::SeacliffInstruction;
use crate::pda::*;
use crate::state::*;
use crate::utils::*;

use solana_program::account_info::{next_account_info, AccountInfo};
use solana_program::clock::Clock;
use solana_program::entrypoint::ProgramResult;
use solana_program::msg;
use solana_program::program::invoke;
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;
use solana_program::rent::Rent;
use solana_program::system_instruction;
use solana_program::sysvar::Sysvar;

use agsol_common::{AccountState, MaxSerializedLen, SignerPda};

use borsh::BorshDeserialize;

pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = SeacliffInstruction::try_from_slice(instruction_data)
        .map_err(|_| SeacliffContractError::InvalidInstruction)?;
    match instruction {
        SeacliffInstruction::InitializeProgram {
            initial_contract_pool_len,
        } => initialize_program::initialize_program(program_id, accounts, initial_contract_pool_len),
        SeacliffInstruction::CreateContract {
            id,
            goal,
            lifespan,
            refund_bonus,
            bond,
        } => create_contract::process_create_contract(
            program_id,
            accounts,
            id,
            goal,
            lifespan,
            refund_bonus,
            bond,
        ),
        SeacliffInstruction::Contribute { id, amount } => {
            contribute::process_contribution(program_id, accounts, id, amount)
        }
        SeacliffInstruction::Finalize { id } => {
            finalize::process_finalize(program_id, accounts, id)
        }
        SeacliffInstruction::WithdrawFunds { id } => {
            withdraw_funds::process_withdraw_funds(program_id, accounts, id)
        }
        SeacliffInstruction::Refund { id } => refund::process_refund(program_id, accounts, id),
        SeacliffInstruction::ArchiveContract { id } => {
            archive_contract::process_archive_contract(program_id, accounts, id)
        }
    }
}
