use super::*;

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone)]
pub struct ArchiveContractArgs {
    pub proposer_pubkey: Pubkey,
    pub contract_id: ContractId,
    /// Contributors whose leftover contribution records should be swept in
    /// this call.
    pub contributor_pubkeys: Vec<Pubkey>,
}

pub fn archive_contract(args: &ArchiveContractArgs) -> Instruction {
    let contract_pool_pubkey = contract_pool_pubkey(&crate::ID);
    let contract_root_state_pubkey = contract_root_state_pubkey(&args.contract_id, &crate::ID);
    let contract_bank_pubkey = contract_bank_pubkey(&args.contract_id, &crate::ID);

    let mut accounts = vec![
        AccountMeta::new(args.proposer_pubkey, true),
        AccountMeta::new(contract_pool_pubkey, false),
        AccountMeta::new(contract_root_state_pubkey, false),
        AccountMeta::new(contract_bank_pubkey, false),
    ];

    for contributor_pubkey in args.contributor_pubkeys.iter() {
        let contribution_pubkey =
            contribution_pubkey(&args.contract_id, contributor_pubkey, &crate::ID);
        accounts.push(AccountMeta::new(contribution_pubkey, false));
        accounts.push(AccountMeta::new(*contributor_pubkey, false));
    }

    let instruction = SeacliffInstruction::ArchiveContract {
        id: args.contract_id,
    };

    Instruction {
        program_id: crate::ID,
        accounts,
        data: instruction.try_to_vec().unwrap(),
    }
}
