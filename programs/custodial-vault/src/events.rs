use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DepositMade {
    pub vault: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub vault_deposited: u64,
    pub user_deposited: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawMade {
    pub vault: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub vault_withdrawn: u64,
    pub user_withdrawn: u64,
    pub timestamp: i64,
}
