use super::*;

pub fn process_contribution(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    contract_id: ContractId,
    amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let contributor_account = next_account_info(account_info_iter)?; // 1
    let contract_root_state_account = next_account_info(account_info_iter)?; // 2
    let contract_bank_account = next_account_info(account_info_iter)?; // 3
    let contribution_state_account = next_account_info(account_info_iter)?; // 4
    let system_program = next_account_info(account_info_iter)?; // 5

    if !contributor_account.is_signer {
        msg!("contributor signature is missing");
        return Err(ProgramError::MissingRequiredSignature);
    }

    // Check cross-program invocation addresses
    assert_system_program(system_program.key)?;

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

    let contribution_seeds = contribution_seeds(&contract_id, contributor_account.key);
    let contribution_pda =
        SignerPda::new_checked(&contribution_seeds, program_id, contribution_state_account)?;

    let mut contract_root_state = ContractRootState::read(contract_root_state_account)?;

    // All window and amount guards run before anything is mutated
    let clock = Clock::get()?;
    let first_deposit = contribution_state_account.data_is_empty();
    contract_root_state.register_contribution(amount, clock.unix_timestamp, first_deposit)?;

    let mut contribution_state = if first_deposit {
        create_state_account(
            contributor_account,
            contribution_state_account,
            contribution_pda.signer_seeds(),
            program_id,
            system_program,
            ContributionState::MAX_SERIALIZED_LEN,
        )?;
        ContributionState {
            contributor: *contributor_account.key,
            amount: 0,
        }
    } else {
        ContributionState::read(contribution_state_account)?
    };
    if &contribution_state.contributor != contributor_account.key {
        return Err(SeacliffContractError::ContributorAccountMismatch.into());
    }
    contribution_state.register(amount)?;

    // Transfer the deposit into the bank
    let deposit_transfer_ix =
        system_instruction::transfer(contributor_account.key, contract_bank_account.key, amount);
    invoke(
        &deposit_transfer_ix,
        &[
            contributor_account.clone(),
            contract_bank_account.clone(),
            system_program.clone(),
        ],
    )?;

    contribution_state.write(contribution_state_account)?;
    contract_root_state.write(contract_root_state_account)?;

    let rent_floor = Rent::get()?.minimum_balance(0);
    reconcile_escrow_balance(
        contract_bank_account.lamports(),
        rent_floor,
        &contract_root_state,
    )?;

    Ok(())
}
