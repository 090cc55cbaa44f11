use super::*;

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone)]
pub struct InitializeProgramArgs {
    pub payer_pubkey: Pubkey,
    pub initial_contract_pool_len: u32,
}

pub fn initialize_program(args: &InitializeProgramArgs) -> Instruction {
    let contract_pool_pubkey = contract_pool_pubkey(&crate::ID);

    let accounts = vec![
        AccountMeta::new(args.payer_pubkey, true),
        AccountMeta::new(contract_pool_pubkey, false),
        AccountMeta::new_readonly(SYS_ID, false),
    ];

    let instruction = SeacliffInstruction::InitializeProgram {
        initial_contract_pool_len: args.initial_contract_pool_len,
    };

    Instruction {
        program_id: crate::ID,
        accounts,
        data: instruction.try_to_vec().unwrap(),
    }
}
