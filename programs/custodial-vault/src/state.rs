use anchor_lang::prelude::*;

use crate::errors::VaultError;

/// Canonical bumps fixed at initialization. Every later instruction
/// revalidates supplied accounts against these, never against a
/// caller-provided bump.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Debug, Default)]
pub struct VaultBumps {
    pub vault: u8,
    pub authority: u8,
    pub token_account: u8,
}

/// Aggregate accounting record, one per (owner, mint) pair
/// (PDA, seeds = [b"vault", owner, mint])
#[account]
#[derive(Debug, Default)]
pub struct Vault {
    /// Vault owner, fixed at initialization
    pub owner: Pubkey,
    /// SPL mint this vault escrows, fixed at initialization
    pub mint: Pubkey,
    pub initialized: bool,
    /// Lifetime deposits across all depositors
    pub deposited_amount: u64,
    /// Lifetime withdrawals across all depositors
    pub withdrawn_amount: u64,
    pub bumps: VaultBumps,
}

impl Vault {
    pub const LEN: usize = 8 // discriminator
        + 32 + 32             // owner, mint
        + 1                   // initialized
        + 8 + 8               // deposited_amount, withdrawn_amount
        + 3; // bumps

    /// One-shot transition from the zeroed state written at account creation.
    pub fn activate(&mut self, owner: Pubkey, mint: Pubkey, bumps: VaultBumps) -> Result<()> {
        require!(!self.initialized, VaultError::AlreadyInitialized);

        self.owner = owner;
        self.mint = mint;
        self.initialized = true;
        self.deposited_amount = 0;
        self.withdrawn_amount = 0;
        self.bumps = bumps;
        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.deposited_amount = self
            .deposited_amount
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;
        Ok(())
    }

    /// Aggregate guard: lifetime withdrawals can never exceed lifetime
    /// deposits, whatever the per-depositor ledgers say.
    pub fn record_withdraw(&mut self, amount: u64) -> Result<()> {
        let withdrawn = self
            .withdrawn_amount
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;
        require!(withdrawn <= self.deposited_amount, VaultError::Overdraw);
        self.withdrawn_amount = withdrawn;
        Ok(())
    }
}

/// Per-depositor ledger, created lazily on first deposit
/// (PDA, seeds = [b"user_transfers", vault, depositor])
#[account]
#[derive(Debug, Default)]
pub struct UserTransfers {
    /// Depositor, fixed at creation
    pub owner: Pubkey,
    /// Vault this ledger belongs to, fixed at creation
    pub vault: Pubkey,
    pub initialized: bool,
    pub deposited_amount: u64,
    pub withdrawn_amount: u64,
    pub bump: u8,
}

impl UserTransfers {
    pub const LEN: usize = 8 // discriminator
        + 32 + 32             // owner, vault
        + 1                   // initialized
        + 8 + 8               // deposited_amount, withdrawn_amount
        + 1; // bump

    pub fn activate(&mut self, owner: Pubkey, vault: Pubkey, bump: u8) {
        self.owner = owner;
        self.vault = vault;
        self.initialized = true;
        self.deposited_amount = 0;
        self.withdrawn_amount = 0;
        self.bump = bump;
    }

    /// Balance still withdrawable by this depositor.
    /// Invariant: withdrawn_amount <= deposited_amount.
    pub fn available(&self) -> u64 {
        self.deposited_amount.saturating_sub(self.withdrawn_amount)
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.deposited_amount = self
            .deposited_amount
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;
        Ok(())
    }

    pub fn record_withdraw(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.available(), VaultError::Overdraw);
        self.withdrawn_amount = self
            .withdrawn_amount
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;
        Ok(())
    }
}
