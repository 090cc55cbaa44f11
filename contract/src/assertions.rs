use solana_program::account_info::AccountInfo;
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;
use solana_program::system_program::ID as SYS_ID;

use crate::state::ContractRootState;
use crate::utils::try_add;
use crate::SeacliffContractError;

// ************************ Accounts assertions ************************ //

pub fn assert_system_program(account_pubkey: &Pubkey) -> Result<(), ProgramError> {
    if *account_pubkey != SYS_ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

// ************************ Arithmetic checks ************************ //

pub fn checked_credit_account(
    account: &AccountInfo,
    amount: u64,
) -> Result<(), SeacliffContractError> {
    // The lamports need to be cloned otherwise the transaction fails with ProgramFailedToComplete
    let account_current_lamports = **account.lamports.borrow();
    if let Some(lamports) = account_current_lamports.checked_add(amount) {
        **account.lamports.borrow_mut() = lamports;
        Ok(())
    } else {
        Err(SeacliffContractError::ArithmeticOverflow)
    }
}

pub fn checked_debit_account(
    account: &AccountInfo,
    amount: u64,
) -> Result<(), SeacliffContractError> {
    // The lamports need to be cloned otherwise the transaction fails with ProgramFailedToComplete
    let account_current_lamports = **account.lamports.borrow();
    if let Some(lamports) = account_current_lamports.checked_sub(amount) {
        **account.lamports.borrow_mut() = lamports;
        Ok(())
    } else {
        Err(SeacliffContractError::ArithmeticOverflow)
    }
}

// ************************ Contract business logic checks ************************ //

/// Verifies that the lamports held by a contract's bank cover exactly the
/// obligations recorded in its root state.
///
/// Run after every instruction that moves funds; a mismatch aborts the
/// transaction before the inconsistent state could be committed.
pub fn reconcile_escrow_balance(
    bank_lamports: u64,
    rent_floor: u64,
    root_state: &ContractRootState,
) -> Result<(), SeacliffContractError> {
    let obligations = try_add(root_state.total_raised, root_state.bond_posted)?;
    if bank_lamports != try_add(rent_floor, obligations)? {
        return Err(SeacliffContractError::EscrowOutOfBalance);
    }
    Ok(())
}
