use super::*;

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone)]
pub struct ContributeArgs {
    pub contributor_pubkey: Pubkey,
    pub contract_id: ContractId,
    pub amount: u64,
}

pub fn contribute(args: &ContributeArgs) -> Instruction {
    let contract_root_state_pubkey = contract_root_state_pubkey(&args.contract_id, &crate::ID);
    let contract_bank_pubkey = contract_bank_pubkey(&args.contract_id, &crate::ID);
    let contribution_pubkey =
        contribution_pubkey(&args.contract_id, &args.contributor_pubkey, &crate::ID);

    let accounts = vec![
        AccountMeta::new(args.contributor_pubkey, true),
        AccountMeta::new(contract_root_state_pubkey, false),
        AccountMeta::new(contract_bank_pubkey, false),
        AccountMeta::new(contribution_pubkey, false),
        AccountMeta::new_readonly(SYS_ID, false),
    ];

    let instruction = SeacliffInstruction::Contribute {
        id: args.contract_id,
        amount: args.amount,
    };

    Instruction {
        program_id: crate::ID,
        accounts,
        data: instruction.try_to_vec().unwrap(),
    }
}
