use super::*;

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone)]
pub struct WithdrawFundsArgs {
    pub proposer_pubkey: Pubkey,
    pub contract_id: ContractId,
}

pub fn withdraw_funds(args: &WithdrawFundsArgs) -> Instruction {
    let contract_root_state_pubkey = contract_root_state_pubkey(&args.contract_id, &crate::ID);
    let contract_bank_pubkey = contract_bank_pubkey(&args.contract_id, &crate::ID);

    let accounts = vec![
        AccountMeta::new(args.proposer_pubkey, true),
        AccountMeta::new(contract_root_state_pubkey, false),
        AccountMeta::new(contract_bank_pubkey, false),
    ];

    let instruction = SeacliffInstruction::WithdrawFunds {
        id: args.contract_id,
    };

    Instruction {
        program_id: crate::ID,
        accounts,
        data: instruction.try_to_vec().unwrap(),
    }
}
