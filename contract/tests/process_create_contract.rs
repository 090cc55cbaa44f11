#![cfg(feature = "test-bpf")]

use test_factory::*;

use agsol_common::MaxSerializedLen;
use agsol_testbench::tokio;
use seacliff_contract::state::{ContractRootState, ContractStatus};
use seacliff_contract::SeacliffContractError;
use solana_program::rent::Rent;
use solana_sdk::signer::Signer;

const GOAL: u64 = 100_000;
const LIFESPAN: i64 = 1000;
const REFUND_BONUS: u64 = 10_000;
const BOND: u64 = 10_000;

#[tokio::test]
async fn test_process_create_contract() {
    let (mut testbench, proposer) = testbench_setup().await.unwrap();

    let contract_id = [1; 32];
    let balance_change = create_contract_transaction(
        &mut testbench,
        &proposer.keypair,
        contract_id,
        GOAL,
        LIFESPAN,
        REFUND_BONUS,
        BOND,
    )
    .await
    .unwrap()
    .unwrap();

    // the proposer funded the bond, the two state accounts and the fee
    let rent = Rent::default();
    let expected_cost = BOND
        + rent.minimum_balance(ContractRootState::MAX_SERIALIZED_LEN)
        + rent.minimum_balance(0)
        + TRANSACTION_FEE;
    assert_eq!(-balance_change as u64, expected_cost);

    let root_state = get_root_state(&mut testbench, contract_id).await.unwrap();
    assert_eq!(root_state.proposer, proposer.keypair.pubkey());
    assert_eq!(root_state.goal, GOAL);
    assert_eq!(root_state.refund_bonus, REFUND_BONUS);
    assert_eq!(root_state.lifespan, LIFESPAN);
    assert_eq!(root_state.total_raised, 0);
    assert_eq!(root_state.bond_posted, BOND);
    assert_eq!(root_state.open_contributions, 0);
    assert_eq!(root_state.status, ContractStatus::Active);

    // the bank holds its rent floor plus the bond
    let bank_lamports = get_bank_lamports(&mut testbench, contract_id).await.unwrap();
    assert_eq!(bank_lamports, rent.minimum_balance(0) + BOND);

    // the contract is registered in the pool
    let contract_pool = get_contract_pool(&mut testbench).await.unwrap();
    assert_eq!(contract_pool.pool, vec![contract_id]);

    // Invalid use case
    // Creating a second contract under the same id
    let duplicate_id_error = create_contract_transaction(
        &mut testbench,
        &proposer.keypair,
        contract_id,
        GOAL,
        LIFESPAN,
        REFUND_BONUS,
        BOND,
    )
    .await
    .unwrap()
    .err()
    .unwrap();

    assert_eq!(
        duplicate_id_error,
        SeacliffContractError::ContractIdNotUnique
    );
}

#[tokio::test]
async fn test_create_contract_invalid_parameters() {
    let (mut testbench, proposer) = testbench_setup().await.unwrap();

    // Invalid use case
    // A contract without a goal
    let zero_goal_error = create_contract_transaction(
        &mut testbench,
        &proposer.keypair,
        [2; 32],
        0,
        LIFESPAN,
        REFUND_BONUS,
        BOND,
    )
    .await
    .unwrap()
    .err()
    .unwrap();
    assert_eq!(zero_goal_error, SeacliffContractError::InvalidParameters);

    // Invalid use case
    // A bond that cannot cover the refund bonus
    let low_bond_error = create_contract_transaction(
        &mut testbench,
        &proposer.keypair,
        [2; 32],
        GOAL,
        LIFESPAN,
        REFUND_BONUS,
        REFUND_BONUS - 1,
    )
    .await
    .unwrap()
    .err()
    .unwrap();
    assert_eq!(low_bond_error, SeacliffContractError::InvalidParameters);

    // Invalid use case
    // A goal the refund bonus alone would satisfy
    let self_sufficient_error = create_contract_transaction(
        &mut testbench,
        &proposer.keypair,
        [2; 32],
        REFUND_BONUS,
        LIFESPAN,
        REFUND_BONUS,
        BOND,
    )
    .await
    .unwrap()
    .err()
    .unwrap();
    assert_eq!(
        self_sufficient_error,
        SeacliffContractError::InvalidParameters
    );

    // Invalid use case
    // A funding window shorter than the allowed minimum
    let short_lifespan_error = create_contract_transaction(
        &mut testbench,
        &proposer.keypair,
        [2; 32],
        GOAL,
        10,
        REFUND_BONUS,
        BOND,
    )
    .await
    .unwrap()
    .err()
    .unwrap();
    assert_eq!(
        short_lifespan_error,
        SeacliffContractError::InvalidParameters
    );

    // Invalid use case
    // A contract id with non-ascii bytes
    let not_ascii_error = create_contract_transaction(
        &mut testbench,
        &proposer.keypair,
        [200; 32],
        GOAL,
        LIFESPAN,
        REFUND_BONUS,
        BOND,
    )
    .await
    .unwrap()
    .err()
    .unwrap();
    assert_eq!(not_ascii_error, SeacliffContractError::ContractIdNotAscii);

    // nothing was registered
    let contract_pool = get_contract_pool(&mut testbench).await.unwrap();
    assert!(contract_pool.pool.is_empty());
}
