use super::*;

pub fn process_withdraw_funds(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    contract_id: ContractId,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let proposer_account = next_account_info(account_info_iter)?; // 1
    let contract_root_state_account = next_account_info(account_info_iter)?; // 2
    let contract_bank_account = next_account_info(account_info_iter)?; // 3

    if !proposer_account.is_signer {
        msg!("proposer signature is missing");
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
        return Err(SeacliffContractError::Unauthorized.into());
    }

    // The raised funds and the recovered bond leave escrow exactly once
    let payout = contract_root_state.settle_withdraw()?;
    checked_debit_account(contract_bank_account, payout)?;
    checked_credit_account(proposer_account, payout)?;

    contract_root_state.write(contract_root_state_account)?;

    let rent_floor = Rent::get()?.minimum_balance(0);
    reconcile_escrow_balance(
        contract_bank_account.lamports(),
        rent_floor,
        &contract_root_state,
    )?;

    Ok(())
}
