use super::*;

use crate::{MAX_CONTRACT_LIFESPAN, MIN_CONTRACT_LIFESPAN};
use solana_program::clock::UnixTimestamp;

pub fn process_create_contract(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    contract_id: ContractId,
    goal: u64,
    lifespan: UnixTimestamp,
    refund_bonus: u64,
    bond: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    // User accounts
    let proposer_account = next_account_info(account_info_iter)?; // 1
    // Contract state accounts
    let contract_pool_account = next_account_info(account_info_iter)?; // 2
    let contract_root_state_account = next_account_info(account_info_iter)?; // 3
    let contract_bank_account = next_account_info(account_info_iter)?; // 4
    // Solana accounts
    let system_program = next_account_info(account_info_iter)?; // 5

    if !proposer_account.is_signer {
        msg!("proposer signature is missing");
        return Err(ProgramError::MissingRequiredSignature);
    }

    // Check cross-program invocation addresses
    assert_system_program(system_program.key)?;

    // Check contract parameters
    if goal == 0 || goal <= refund_bonus || bond < refund_bonus {
        return Err(SeacliffContractError::InvalidParameters.into());
    }
    if lifespan < MIN_CONTRACT_LIFESPAN || lifespan > MAX_CONTRACT_LIFESPAN {
        return Err(SeacliffContractError::InvalidParameters.into());
    }
    if !contract_id.is_ascii() {
        return Err(SeacliffContractError::ContractIdNotAscii.into());
    }

    // Check pda addresses
    SignerPda::check_owner(
        &contract_pool_seeds(),
        program_id,
        program_id,
        contract_pool_account,
    )?;

    let contract_root_state_seeds = contract_root_state_seeds(&contract_id);
    let contract_root_state_pda = SignerPda::new_checked(
        &contract_root_state_seeds,
        program_id,
        contract_root_state_account,
    )?;

    let contract_bank_seeds = contract_bank_seeds(&contract_id);
    let contract_bank_pda =
        SignerPda::new_checked(&contract_bank_seeds, program_id, contract_bank_account)?;

    // Register the new contract into the pool
    let mut contract_pool = ContractPool::read(contract_pool_account)?;
    contract_pool.try_insert_sorted(contract_id)?;
    contract_pool.write(contract_pool_account)?;

    if !contract_root_state_account.data_is_empty() {
        return Err(SeacliffContractError::ContractAlreadyInitialized.into());
    }

    // Create root state and bank accounts
    create_state_account(
        proposer_account,
        contract_root_state_account,
        contract_root_state_pda.signer_seeds(),
        program_id,
        system_program,
        ContractRootState::MAX_SERIALIZED_LEN,
    )?;
    create_state_account(
        proposer_account,
        contract_bank_account,
        contract_bank_pda.signer_seeds(),
        program_id,
        system_program,
        0,
    )?;

    // Post the bond into the bank
    let bond_transfer_ix =
        system_instruction::transfer(proposer_account.key, contract_bank_account.key, bond);
    invoke(
        &bond_transfer_ix,
        &[
            proposer_account.clone(),
            contract_bank_account.clone(),
            system_program.clone(),
        ],
    )?;

    let clock = Clock::get()?;
    let created_at = clock.unix_timestamp;
    // The deadline must stay representable
    created_at
        .checked_add(lifespan)
        .ok_or(SeacliffContractError::ArithmeticOverflow)?;

    let contract_root_state = ContractRootState {
        proposer: *proposer_account.key,
        goal,
        refund_bonus,
        created_at,
        lifespan,
        total_raised: 0,
        raised_at_finalize: 0,
        bond_posted: bond,
        open_contributions: 0,
        status: ContractStatus::Active,
    };
    contract_root_state.write(contract_root_state_account)?;

    // The bank now holds its rent floor plus the bond
    let rent_floor = Rent::get()?.minimum_balance(0);
    reconcile_escrow_balance(
        contract_bank_account.lamports(),
        rent_floor,
        &contract_root_state,
    )?;

    Ok(())
}
