use super::*;

pub fn initialize_program(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    initial_contract_pool_len: u32,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let payer_account = next_account_info(account_info_iter)?; // 1
    let contract_pool_account = next_account_info(account_info_iter)?; // 2
    let system_program = next_account_info(account_info_iter)?; // 3

    if !payer_account.is_signer {
        msg!("payer signature is missing");
        return Err(ProgramError::MissingRequiredSignature);
    }

    // Check cross-program invocation addresses
    assert_system_program(system_program.key)?;

    // Check pda addresses
    let contract_pool_seeds = contract_pool_seeds();
    let contract_pool_pda =
        SignerPda::new_checked(&contract_pool_seeds, program_id, contract_pool_account)?;

    if !contract_pool_account.data_is_empty() {
        return Err(SeacliffContractError::ProgramAlreadyInitialized.into());
    }

    let pool_account_size = ContractPool::max_serialized_len(initial_contract_pool_len as usize)
        .ok_or(SeacliffContractError::ArithmeticOverflow)?;
    create_state_account(
        payer_account,
        contract_pool_account,
        contract_pool_pda.signer_seeds(),
        program_id,
        system_program,
        pool_account_size,
    )?;

    let contract_pool = ContractPool::new(initial_contract_pool_len);
    contract_pool.write(contract_pool_account)?;

    Ok(())
}
