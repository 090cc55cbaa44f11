use crate::SeacliffContractError;

use solana_program::account_info::AccountInfo;
use solana_program::entrypoint::ProgramResult;
use solana_program::program::invoke_signed;
use solana_program::pubkey::Pubkey;
use solana_program::rent::Rent;
use solana_program::system_instruction;
use solana_program::sysvar::Sysvar;

// ************************ Arithmetic guard ************************ //

// Every lamport amount handled by the contract goes through these helpers,
// raw arithmetic on balances is not allowed anywhere else.

#[inline]
pub fn try_add(a: u64, b: u64) -> Result<u64, SeacliffContractError> {
    a.checked_add(b)
        .ok_or(SeacliffContractError::ArithmeticOverflow)
}

#[inline]
pub fn try_sub(a: u64, b: u64) -> Result<u64, SeacliffContractError> {
    a.checked_sub(b)
        .ok_or(SeacliffContractError::ArithmeticOverflow)
}

#[inline]
pub fn try_mul(a: u64, b: u64) -> Result<u64, SeacliffContractError> {
    a.checked_mul(b)
        .ok_or(SeacliffContractError::ArithmeticOverflow)
}

#[inline]
pub fn try_div(a: u64, b: u64) -> Result<u64, SeacliffContractError> {
    a.checked_div(b)
        .ok_or(SeacliffContractError::ArithmeticOverflow)
}

/// Floor of `total * share / denominator`, widened to 128 bits so the
/// intermediate product cannot overflow.
///
/// The division remainder is not paid out by this function; it stays with
/// the source balance and is settled when that balance is drained.
pub fn proportional_share(
    total: u64,
    share: u64,
    denominator: u64,
) -> Result<u64, SeacliffContractError> {
    if denominator == 0 {
        return Err(SeacliffContractError::ArithmeticOverflow);
    }
    let widened = (total as u128) * (share as u128);
    u64::try_from(widened / (denominator as u128))
        .map_err(|_| SeacliffContractError::ArithmeticOverflow)
}

// ************************ Account utilities ************************ //

/// Creates a rent-exempt account of `account_size` bytes at a program
/// derived address, funded by `payer_account`.
pub fn create_state_account<'a>(
    payer_account: &AccountInfo<'a>,
    state_account: &AccountInfo<'a>,
    signer_seeds: Vec<&[u8]>,
    program_id: &Pubkey,
    system_program: &AccountInfo<'a>,
    account_size: usize,
) -> ProgramResult {
    let rent = Rent::get()?.minimum_balance(account_size);
    let create_account_ix = system_instruction::create_account(
        payer_account.key,
        state_account.key,
        rent,
        account_size as u64,
        program_id,
    );
    invoke_signed(
        &create_account_ix,
        &[
            payer_account.clone(),
            state_account.clone(),
            system_program.clone(),
        ],
        &[signer_seeds.as_slice()],
    )
}

/// Drains all lamports from a program-owned account, releasing it to the
/// runtime's garbage collection at the end of the transaction.
#[inline(always)]
pub fn deallocate_state<'a>(
    from: &'a AccountInfo,
    to: &'a AccountInfo,
) -> Result<(), SeacliffContractError> {
    let lamports_to_release = **from.lamports.borrow();
    crate::assertions::checked_debit_account(from, lamports_to_release)?;
    crate::assertions::checked_credit_account(to, lamports_to_release)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn checked_lamport_arithmetic() {
        assert_eq!(try_add(1, 2), Ok(3));
        assert_eq!(
            try_add(u64::MAX, 1),
            Err(SeacliffContractError::ArithmeticOverflow)
        );
        assert_eq!(try_sub(5, 5), Ok(0));
        assert_eq!(
            try_sub(4, 5),
            Err(SeacliffContractError::ArithmeticOverflow)
        );
        assert_eq!(try_mul(300, 7), Ok(2100));
        assert_eq!(
            try_mul(u64::MAX, 2),
            Err(SeacliffContractError::ArithmeticOverflow)
        );
        assert_eq!(try_div(10, 3), Ok(3));
        assert_eq!(
            try_div(10, 0),
            Err(SeacliffContractError::ArithmeticOverflow)
        );
    }

    #[test]
    fn proportional_share_floors() {
        // shares are rounded down, the remainder stays unpaid
        assert_eq!(proportional_share(10_000, 60_000, 90_000), Ok(6666));
        assert_eq!(proportional_share(10_000, 30_000, 90_000), Ok(3333));
        assert_eq!(proportional_share(10, 1, 3), Ok(3));
        assert_eq!(proportional_share(0, 1, 3), Ok(0));
        // full share pays out the whole total
        assert_eq!(proportional_share(10_000, 90_000, 90_000), Ok(10_000));
    }

    #[test]
    fn proportional_share_guards() {
        assert_eq!(
            proportional_share(10, 1, 0),
            Err(SeacliffContractError::ArithmeticOverflow)
        );
        // the widened intermediate product does not overflow
        assert_eq!(
            proportional_share(u64::MAX, u64::MAX, u64::MAX),
            Ok(u64::MAX)
        );
        // results exceeding the lamport domain are rejected
        assert_eq!(
            proportional_share(u64::MAX, 4, 2),
            Err(SeacliffContractError::ArithmeticOverflow)
        );
    }
}
