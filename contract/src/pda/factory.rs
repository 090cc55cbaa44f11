use super::*;

pub fn contract_pool_pubkey(program_id: &Pubkey) -> Pubkey {
    let (contract_pool_pubkey, _) =
        Pubkey::find_program_address(&contract_pool_seeds(), program_id);
    contract_pool_pubkey
}

pub fn contract_root_state_pubkey(contract_id: &[u8], program_id: &Pubkey) -> Pubkey {
    let (contract_root_state_pubkey, _) =
        Pubkey::find_program_address(&contract_root_state_seeds(contract_id), program_id);
    contract_root_state_pubkey
}

pub fn contract_bank_pubkey(contract_id: &[u8], program_id: &Pubkey) -> Pubkey {
    let (contract_bank_pubkey, _) =
        Pubkey::find_program_address(&contract_bank_seeds(contract_id), program_id);
    contract_bank_pubkey
}

pub fn contribution_pubkey(
    contract_id: &[u8],
    contributor: &Pubkey,
    program_id: &Pubkey,
) -> Pubkey {
    let (contribution_pubkey, _) =
        Pubkey::find_program_address(&contribution_seeds(contract_id, contributor), program_id);
    contribution_pubkey
}
