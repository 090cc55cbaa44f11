use super::*;

pub fn process_finalize(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    contract_id: ContractId,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    // Anyone may settle an elapsed funding window
    let payer_account = next_account_info(account_info_iter)?; // 1
    let contract_root_state_account = next_account_info(account_info_iter)?; // 2
    let contract_bank_account = next_account_info(account_info_iter)?; // 3
    let proposer_account = next_account_info(account_info_iter)?; // 4

    if !payer_account.is_signer {
        msg!("payer signature is missing");
        return Err(ProgramError::MissingRequiredSignature);
    }

    // Check pda addresses
    SignerPda::check_owner(
        &contract_root_state_seeds(&contract_id),
        program_id,
        program_id,
        contract_root_state_account,
    )?;
    SignerPda::check_owner(
        &contract_bank_seeds(&contract_id),
        program_id,
        program_id,
        contract_bank_account,
    )?;

    let mut contract_root_state = ContractRootState::read(contract_root_state_account)?;
    if proposer_account.key != &contract_root_state.proposer {
        return Err(SeacliffContractError::ProposerAccountMismatch.into());
    }

    let clock = Clock::get()?;
    let outcome = contract_root_state.finalize(clock.unix_timestamp)?;

    // A failed contract without claimants settles its bond immediately
    if outcome.bond_remainder > 0 {
        checked_debit_account(contract_bank_account, outcome.bond_remainder)?;
        checked_credit_account(proposer_account, outcome.bond_remainder)?;
    }

    contract_root_state.write(contract_root_state_account)?;

    let rent_floor = Rent::get()?.minimum_balance(0);
    reconcile_escrow_balance(
        contract_bank_account.lamports(),
        rent_floor,
        &contract_root_state,
    )?;

    Ok(())
}
