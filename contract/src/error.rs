use agsol_common::SignerPdaError;
#[cfg(feature = "test-bpf")]
use num_derive::FromPrimitive;
use solana_program::program_error::ProgramError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "test-bpf", derive(FromPrimitive))]
pub enum SeacliffContractError {
    InvalidInstruction = 500,
    ProgramAlreadyInitialized = 501,
    ContractAlreadyInitialized = 502,
    ContractIdNotUnique = 503,
    ContractIdNotAscii = 504,
    ContractPoolFull = 505,
    InvalidParameters = 506,
    InvalidState = 507,
    ContractExpired = 508,
    NotYetFinalizable = 509,
    AlreadyFinalized = 510,
    Unauthorized = 511,
    InvalidAmount = 512,
    NothingToRefund = 513,
    ArithmeticOverflow = 514,
    EscrowOutOfBalance = 515,
    ProposerAccountMismatch = 516,
    ContributorAccountMismatch = 517,
    InvalidSeeds = 518,
}

impl From<SeacliffContractError> for ProgramError {
    fn from(e: SeacliffContractError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<SignerPdaError> for SeacliffContractError {
    fn from(_: SignerPdaError) -> Self {
        SeacliffContractError::InvalidSeeds
    }
}
