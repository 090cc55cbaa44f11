use super::*;

pub fn process_refund(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    contract_id: ContractId,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let contributor_account = next_account_info(account_info_iter)?; // 1
    let proposer_account = next_account_info(account_info_iter)?; // 2
    let contract_root_state_account = next_account_info(account_info_iter)?; // 3
    let contract_bank_account = next_account_info(account_info_iter)?; // 4
    let contribution_state_account = next_account_info(account_info_iter)?; // 5

    if !contributor_account.is_signer {
        msg!("contributor signature is missing");
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

    // A record only exists for contributors with an outstanding deposit
    let mut contribution_amount = 0;
    if !contribution_state_account.data_is_empty() {
        SignerPda::check_owner(
            &contribution_seeds(&contract_id, contributor_account.key),
            program_id,
            program_id,
            contribution_state_account,
        )?;
        let contribution_state = ContributionState::read(contribution_state_account)?;
        if &contribution_state.contributor != contributor_account.key {
            return Err(SeacliffContractError::ContributorAccountMismatch.into());
        }
        contribution_amount = contribution_state.amount;
    }

    let settlement = contract_root_state.settle_refund(contribution_amount)?;

    // Pay the claim and release the spent record's rent to the contributor
    checked_debit_account(contract_bank_account, settlement.payout)?;
    checked_credit_account(contributor_account, settlement.payout)?;
    deallocate_state(contribution_state_account, contributor_account)?;

    // The last claim releases the bond remainder to the proposer
    if settlement.bond_remainder > 0 {
        checked_debit_account(contract_bank_account, settlement.bond_remainder)?;
        checked_credit_account(proposer_account, settlement.bond_remainder)?;
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
