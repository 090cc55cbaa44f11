#![cfg(feature = "test-bpf")]

use test_factory::*;

use agsol_common::MaxSerializedLen;
use agsol_testbench::tokio;
use seacliff_contract::state::{ContractStatus, ContributionState};
use seacliff_contract::SeacliffContractError;
use solana_program::rent::Rent;
use solana_sdk::signer::Signer;

const GOAL: u64 = 100_000;
const LIFESPAN: i64 = 1000;
const REFUND_BONUS: u64 = 10_000;
const BOND: u64 = 10_000;

#[tokio::test]
async fn test_process_refund_pro_rata() {
    let (mut testbench, proposer) = testbench_setup().await.unwrap();

    let contract_id = [1; 32];
    create_contract_transaction(
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

    let user_1 = TestUser::new(&mut testbench).await.unwrap();
    let user_2 = TestUser::new(&mut testbench).await.unwrap();

    contribute_transaction(&mut testbench, contract_id, &user_1.keypair, 60_000)
        .await
        .unwrap()
        .unwrap();
    contribute_transaction(&mut testbench, contract_id, &user_2.keypair, 30_000)
        .await
        .unwrap()
        .unwrap();

    // Invalid use case
    // Claiming a refund while the funding window is still open
    let open_window_error = refund_transaction(&mut testbench, contract_id, &user_1.keypair)
        .await
        .unwrap()
        .err()
        .unwrap();
    assert_eq!(open_window_error, SeacliffContractError::InvalidState);

    warp_past_deadline(&mut testbench, contract_id).await;
    finalize_transaction(&mut testbench, contract_id, &user_1.keypair)
        .await
        .unwrap()
        .unwrap();

    let root_state = get_root_state(&mut testbench, contract_id).await.unwrap();
    assert_eq!(root_state.status, ContractStatus::Failed);
    assert_eq!(root_state.raised_at_finalize, 90_000);

    // Invalid use case
    // A claim from someone who never contributed
    let stranger = TestUser::new(&mut testbench).await.unwrap();
    let stranger_error = refund_transaction(&mut testbench, contract_id, &stranger.keypair)
        .await
        .unwrap()
        .err()
        .unwrap();
    assert_eq!(stranger_error, SeacliffContractError::NothingToRefund);

    let contribution_rent =
        Rent::default().minimum_balance(ContributionState::MAX_SERIALIZED_LEN);

    // 60_000 + floor(10_000 * 60_000 / 90_000) plus the released record rent
    let balance_change = refund_transaction(&mut testbench, contract_id, &user_1.keypair)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        balance_change,
        (66_666 + contribution_rent - TRANSACTION_FEE) as i64
    );

    // the spent record is gone
    assert!(
        get_contribution_state(&mut testbench, contract_id, &user_1.keypair.pubkey())
            .await
            .is_err()
    );

    // Invalid use case
    // Claiming a second time
    let settled_error = refund_transaction(&mut testbench, contract_id, &user_1.keypair)
        .await
        .unwrap()
        .err()
        .unwrap();
    assert_eq!(settled_error, SeacliffContractError::NothingToRefund);

    // the last claim also releases the 1 lamport rounding remainder
    let proposer_balance_before = testbench
        .get_account_lamports(&proposer.keypair.pubkey())
        .await
        .unwrap();
    let balance_change = refund_transaction(&mut testbench, contract_id, &user_2.keypair)
        .await
        .unwrap()
        .unwrap();
    let proposer_balance_after = testbench
        .get_account_lamports(&proposer.keypair.pubkey())
        .await
        .unwrap();

    assert_eq!(
        balance_change,
        (33_333 + contribution_rent - TRANSACTION_FEE) as i64
    );
    assert_eq!(proposer_balance_after - proposer_balance_before, 1);

    let root_state = get_root_state(&mut testbench, contract_id).await.unwrap();
    assert_eq!(root_state.status, ContractStatus::Closed);
    assert_eq!(root_state.total_raised, 0);
    assert_eq!(root_state.bond_posted, 0);
    assert_eq!(root_state.open_contributions, 0);

    // everything but the rent floor has left escrow
    let bank_lamports = get_bank_lamports(&mut testbench, contract_id).await.unwrap();
    assert_eq!(bank_lamports, Rent::default().minimum_balance(0));

    // Invalid use case
    // Claiming against the closed contract
    let closed_error = refund_transaction(&mut testbench, contract_id, &user_2.keypair)
        .await
        .unwrap()
        .err()
        .unwrap();
    assert_eq!(closed_error, SeacliffContractError::InvalidState);
}

#[tokio::test]
async fn test_refund_returns_bond_excess() {
    let (mut testbench, proposer) = testbench_setup().await.unwrap();

    // the bond exceeds the refund bonus by 5000 lamports
    let contract_id = [1; 32];
    create_contract_transaction(
        &mut testbench,
        &proposer.keypair,
        contract_id,
        GOAL,
        LIFESPAN,
        REFUND_BONUS,
        REFUND_BONUS + 5000,
    )
    .await
    .unwrap()
    .unwrap();

    let user_1 = TestUser::new(&mut testbench).await.unwrap();
    contribute_transaction(&mut testbench, contract_id, &user_1.keypair, 40_000)
        .await
        .unwrap()
        .unwrap();

    warp_past_deadline(&mut testbench, contract_id).await;
    finalize_transaction(&mut testbench, contract_id, &user_1.keypair)
        .await
        .unwrap()
        .unwrap();

    // a sole contributor collects the full bonus, the proposer the excess
    let contribution_rent =
        Rent::default().minimum_balance(ContributionState::MAX_SERIALIZED_LEN);
    let proposer_balance_before = testbench
        .get_account_lamports(&proposer.keypair.pubkey())
        .await
        .unwrap();
    let balance_change = refund_transaction(&mut testbench, contract_id, &user_1.keypair)
        .await
        .unwrap()
        .unwrap();
    let proposer_balance_after = testbench
        .get_account_lamports(&proposer.keypair.pubkey())
        .await
        .unwrap();

    assert_eq!(
        balance_change,
        (40_000 + REFUND_BONUS + contribution_rent - TRANSACTION_FEE) as i64
    );
    assert_eq!(proposer_balance_after - proposer_balance_before, 5000);

    let root_state = get_root_state(&mut testbench, contract_id).await.unwrap();
    assert_eq!(root_state.status, ContractStatus::Closed);
}
