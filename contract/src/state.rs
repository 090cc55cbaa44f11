use crate::error::SeacliffContractError;
use crate::utils::{proportional_share, try_add, try_sub};

use agsol_common::{AccountState, MaxSerializedLen};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::clock::UnixTimestamp;
use solana_program::pubkey::Pubkey;

/// A unique identifier of a crowdfunding contract.
///
/// Chosen by the proposer, up to 32 ascii characters.
pub type ContractId = [u8; 32];

/// Lifecycle phase of a crowdfunding contract.
#[repr(C)]
#[derive(
    BorshDeserialize, BorshSerialize, MaxSerializedLen, Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ContractStatus {
    /// Accepting contributions until the deadline passes or the goal is
    /// reached.
    Active,
    /// The goal was reached, the proposer may withdraw the raised funds.
    Succeeded,
    /// The funding window expired below goal, contributors may claim
    /// refunds.
    Failed,
    /// Terminal state on both paths. All funds have left escrow and the
    /// accounts may be archived.
    Closed,
}

/// Outcome of settling the funding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeOutcome {
    pub status: ContractStatus,
    /// Bond lamports owed back to the proposer right away. Non-zero only
    /// when a contract fails without a single outstanding contribution.
    pub bond_remainder: u64,
}

/// Outcome of settling a single refund claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefundSettlement {
    /// Lamports owed to the contributor (deposit plus bonus share).
    pub payout: u64,
    /// Bond lamports owed to the proposer, non-zero only on the claim that
    /// releases the last outstanding contribution.
    pub bond_remainder: u64,
}

/// The main state of a crowdfunding contract.
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, MaxSerializedLen, AccountState, Debug, Clone)]
pub struct ContractRootState {
    /// The proposer of the contract (has withdraw and archive authority).
    pub proposer: Pubkey,
    /// The amount of lamports the contract aims to raise before its
    /// deadline.
    pub goal: u64,
    /// Lamports distributed pro-rata among contributors if the goal is not
    /// reached, funded from the proposer's bond.
    pub refund_bonus: u64,
    /// Timestamp of contract creation (in seconds).
    pub created_at: UnixTimestamp,
    /// Length of the funding window (in seconds).
    pub lifespan: UnixTimestamp,
    /// Sum of all outstanding contributions (in lamports).
    pub total_raised: u64,
    /// `total_raised` frozen at the moment the contract fails. Denominator
    /// of the pro-rata bonus shares, so that already-settled claims cannot
    /// change the share of the remaining ones.
    pub raised_at_finalize: u64,
    /// Lamports still locked from the proposer's bond.
    pub bond_posted: u64,
    /// Number of live contribution records.
    pub open_contributions: u64,
    /// Lifecycle phase of the contract.
    pub status: ContractStatus,
}

impl ContractRootState {
    pub fn deadline(&self) -> Result<UnixTimestamp, SeacliffContractError> {
        self.created_at
            .checked_add(self.lifespan)
            .ok_or(SeacliffContractError::ArithmeticOverflow)
    }

    pub fn has_expired(&self, now: UnixTimestamp) -> Result<bool, SeacliffContractError> {
        Ok(now >= self.deadline()?)
    }

    pub fn goal_reached(&self) -> bool {
        self.total_raised >= self.goal
    }

    /// Registers a deposit while the funding window is open.
    ///
    /// `first_deposit` marks that no contribution record existed for this
    /// contributor yet.
    pub fn register_contribution(
        &mut self,
        amount: u64,
        now: UnixTimestamp,
        first_deposit: bool,
    ) -> Result<(), SeacliffContractError> {
        if self.status != ContractStatus::Active {
            return Err(SeacliffContractError::InvalidState);
        }
        if self.has_expired(now)? {
            return Err(SeacliffContractError::ContractExpired);
        }
        if amount == 0 {
            return Err(SeacliffContractError::InvalidAmount);
        }
        self.total_raised = try_add(self.total_raised, amount)?;
        if first_deposit {
            self.open_contributions = try_add(self.open_contributions, 1)?;
        }
        Ok(())
    }

    /// Settles the funding window once the deadline has passed or the goal
    /// has been reached, whichever comes first.
    ///
    /// Calling it a second time has no further effect and is rejected.
    pub fn finalize(
        &mut self,
        now: UnixTimestamp,
    ) -> Result<FinalizeOutcome, SeacliffContractError> {
        if self.status != ContractStatus::Active {
            return Err(SeacliffContractError::AlreadyFinalized);
        }
        if !self.goal_reached() && !self.has_expired(now)? {
            return Err(SeacliffContractError::NotYetFinalizable);
        }

        let mut bond_remainder = 0;
        if self.goal_reached() {
            self.status = ContractStatus::Succeeded;
        } else {
            self.raised_at_finalize = self.total_raised;
            self.status = ContractStatus::Failed;
            if self.open_contributions == 0 {
                // nobody can ever claim a refund, settle the bond right away
                bond_remainder = self.bond_posted;
                self.bond_posted = 0;
                self.status = ContractStatus::Closed;
            }
        }

        Ok(FinalizeOutcome {
            status: self.status,
            bond_remainder,
        })
    }

    /// Pays out a successful campaign. Returns the lamports leaving escrow
    /// towards the proposer: the raised funds plus the recovered bond.
    pub fn settle_withdraw(&mut self) -> Result<u64, SeacliffContractError> {
        match self.status {
            ContractStatus::Succeeded => {}
            ContractStatus::Closed => return Err(SeacliffContractError::AlreadyFinalized),
            _ => return Err(SeacliffContractError::InvalidState),
        }
        let payout = try_add(self.total_raised, self.bond_posted)?;
        self.total_raised = 0;
        self.bond_posted = 0;
        self.status = ContractStatus::Closed;
        Ok(payout)
    }

    /// Settles one contributor's refund claim on a failed campaign.
    ///
    /// The bonus share is `refund_bonus * amount / raised_at_finalize`,
    /// rounded down. The claim releasing the last outstanding contribution
    /// also releases the bond remainder (division leftovers plus any bond
    /// excess) to the proposer and closes the contract.
    pub fn settle_refund(
        &mut self,
        contribution_amount: u64,
    ) -> Result<RefundSettlement, SeacliffContractError> {
        if self.status != ContractStatus::Failed {
            return Err(SeacliffContractError::InvalidState);
        }
        if contribution_amount == 0 {
            return Err(SeacliffContractError::NothingToRefund);
        }

        let bonus = proportional_share(
            self.refund_bonus,
            contribution_amount,
            self.raised_at_finalize,
        )?;
        let payout = try_add(contribution_amount, bonus)?;

        self.total_raised = try_sub(self.total_raised, contribution_amount)?;
        self.bond_posted = try_sub(self.bond_posted, bonus)?;
        self.open_contributions = try_sub(self.open_contributions, 1)?;

        let mut bond_remainder = 0;
        if self.open_contributions == 0 {
            bond_remainder = self.bond_posted;
            self.bond_posted = 0;
            self.status = ContractStatus::Closed;
        }

        Ok(RefundSettlement {
            payout,
            bond_remainder,
        })
    }
}

/// Record of one contributor's outstanding deposit against a contract.
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, MaxSerializedLen, AccountState, Debug, Clone)]
pub struct ContributionState {
    /// The depositor's account.
    pub contributor: Pubkey,
    /// Cumulative outstanding deposit (in lamports).
    pub amount: u64,
}

impl ContributionState {
    pub fn register(&mut self, amount: u64) -> Result<(), SeacliffContractError> {
        self.amount = try_add(self.amount, amount)?;
        Ok(())
    }
}

/// Registry containing the [`ContractId`] of every live contract.
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, AccountState, Debug, Clone)]
pub struct ContractPool {
    pub max_len: u32,
    pub pool: Vec<ContractId>,
}

impl ContractPool {
    pub fn max_serialized_len(n: usize) -> Option<usize> {
        let mul_result = ContractId::MAX_SERIALIZED_LEN.checked_mul(n);
        if let Some(res) = mul_result {
            res.checked_add(8)
        } else {
            None
        }
    }

    pub fn new(max_len: u32) -> Self {
        Self {
            max_len,
            pool: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.pool.len() == self.max_len as usize
    }

    pub fn try_insert_sorted(
        &mut self,
        contract_id: ContractId,
    ) -> Result<(), SeacliffContractError> {
        if self.is_full() {
            Err(SeacliffContractError::ContractPoolFull)
        } else {
            let search_result = self.pool.binary_search(&contract_id);
            match search_result {
                Ok(_) => Err(SeacliffContractError::ContractIdNotUnique),
                Err(index) => {
                    // not found in vec
                    self.pool.insert(index, contract_id);
                    Ok(())
                }
            }
        }
    }

    pub fn remove(&mut self, contract_id: &ContractId) {
        let search_result = self.pool.binary_search(contract_id);
        if let Ok(index) = search_result {
            self.pool.remove(index);
        } // else there's nothing to remove
    }
}
