use super::*;

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone)]
pub struct FinalizeArgs {
    pub payer_pubkey: Pubkey,
    pub proposer_pubkey: Pubkey,
    pub contract_id: ContractId,
}

pub fn finalize(args: &FinalizeArgs) -> Instruction {
    let contract_root_state_pubkey = contract_root_state_pubkey(&args.contract_id, &crate::ID);
    let contract_bank_pubkey = contract_bank_pubkey(&args.contract_id, &crate::ID);

    let accounts = vec![
        AccountMeta::new(args.payer_pubkey, true),
        AccountMeta::new(contract_root_state_pubkey, false),
        AccountMeta::new(contract_bank_pubkey, false),
        AccountMeta::new(args.proposer_pubkey, false),
    ];

    let instruction = SeacliffInstruction::Finalize {
        id: args.contract_id,
    };

    Instruction {
        program_id: crate::ID,
        accounts,
        data: instruction.try_to_vec().unwrap(),
    }
}
