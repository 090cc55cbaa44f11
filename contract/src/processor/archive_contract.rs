use super::*;

pub fn process_archive_contract(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    contract_id: ContractId,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let proposer_account = next_account_info(account_info_iter)?; // 1
    let contract_pool_account = next_account_info(account_info_iter)?; // 2
    let contract_root_state_account = next_account_info(account_info_iter)?; // 3
    let contract_bank_account = next_account_info(account_info_iter)?; // 4

    if !proposer_account.is_signer {
        msg!("proposer signature is missing");
        return Err(ProgramError::MissingRequiredSignature);
    }

    // Check pda addresses
    SignerPda::check_owner(
        &contract_pool_seeds(),
        program_id,
        program_id,
        contract_pool_account,
    )?;
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

    let contract_root_state = ContractRootState::read(contract_root_state_account)?;
    if proposer_account.key != &contract_root_state.proposer {
        return Err(SeacliffContractError::Unauthorized.into());
    }
    if contract_root_state.status != ContractStatus::Closed {
        return Err(SeacliffContractError::InvalidState.into());
    }

    // Sweep leftover contribution records, releasing each record's rent to
    // the contributor who funded it. Passed in
    // (contribution record, contributor) pairs.
    let record_num = account_info_iter.len() / 2; // 5+
    for _ in 0..record_num {
        let contribution_state_account = next_account_info(account_info_iter)?;
        let contributor_account = next_account_info(account_info_iter)?;

        SignerPda::check_owner(
            &contribution_seeds(&contract_id, contributor_account.key),
            program_id,
            program_id,
            contribution_state_account,
        )?;

        if contribution_state_account.data_is_empty() {
            continue;
        }
        let contribution_state = ContributionState::read(contribution_state_account)?;
        if &contribution_state.contributor != contributor_account.key {
            return Err(SeacliffContractError::ContributorAccountMismatch.into());
        }
        deallocate_state(contribution_state_account, contributor_account)?;
    }

    // Drain the bank and the root state back to the proposer
    deallocate_state(contract_bank_account, proposer_account)?;
    deallocate_state(contract_root_state_account, proposer_account)?;

    // Unregister the contract
    let mut contract_pool = ContractPool::read(contract_pool_account)?;
    contract_pool.remove(&contract_id);
    contract_pool.write(contract_pool_account)?;

    Ok(())
}
