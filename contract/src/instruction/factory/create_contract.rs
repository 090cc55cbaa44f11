use super::*;

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone)]
pub struct CreateContractArgs {
    pub proposer_pubkey: Pubkey,
    pub contract_id: ContractId,
    pub goal: u64,
    pub lifespan: UnixTimestamp,
    pub refund_bonus: u64,
    pub bond: u64,
}

pub fn create_contract(args: &CreateContractArgs) -> Instruction {
    let contract_pool_pubkey = contract_pool_pubkey(&crate::ID);
    let contract_root_state_pubkey = contract_root_state_pubkey(&args.contract_id, &crate::ID);
    let contract_bank_pubkey = contract_bank_pubkey(&args.contract_id, &crate::ID);

    let accounts = vec![
        AccountMeta::new(args.proposer_pubkey, true),
        AccountMeta::new(contract_pool_pubkey, false),
        AccountMeta::new(contract_root_state_pubkey, false),
        AccountMeta::new(contract_bank_pubkey, false),
        AccountMeta::new_readonly(SYS_ID, false),
    ];

    let instruction = SeacliffInstruction::CreateContract {
        id: args.contract_id,
        goal: args.goal,
        lifespan: args.lifespan,
        refund_bonus: args.refund_bonus,
        bond: args.bond,
    };

    Instruction {
        program_id: crate::ID,
        accounts,
        data: instruction.try_to_vec().unwrap(),
    }
}
