pub mod factory;

use solana_program::pubkey::Pubkey;

pub fn contract_pool_seeds<'a>() -> [&'a [u8]; 1] {
    [b"seacliff_contract_pool"]
}

pub fn contract_root_state_seeds(contract_id: &[u8]) -> [&[u8]; 2] {
    [b"seacliff_contract_state", contract_id]
}

pub fn contract_bank_seeds(contract_id: &[u8]) -> [&[u8]; 2] {
    [b"seacliff_contract_bank", contract_id]
}

pub fn contribution_seeds<'a>(contract_id: &'a [u8], contributor: &'a Pubkey) -> [&'a [u8]; 3] {
    [b"seacliff_contribution", contract_id, contributor.as_ref()]
}
