use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Supplied account does not match the derived address for its role")]
    AddressMismatch,
    #[msg("Vault is already initialized")]
    AlreadyInitialized,
    #[msg("Vault or depositor ledger is not initialized")]
    NotInitialized,
    #[msg("Withdrawal exceeds the depositor's available balance")]
    Overdraw,
    #[msg("Token account mint does not match the vault mint")]
    MintMismatch,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Vault owner cannot deposit into or withdraw from their own vault")]
    OwnerTransferNotAllowed,
}
