use crate::{
    constants::{AUTHORITY_SEED, TOKEN_ACCOUNT_SEED, USER_TRANSFERS_SEED, VAULT_SEED},
    errors::VaultError,
    state::{UserTransfers, Vault},
};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

/// Account set shared verbatim by `deposit` and `withdraw`.
///
/// Every derived account the caller supplies is re-derived here from the
/// seeds and the bumps fixed at initialization; a mismatch on any of them
/// rejects the instruction before the handler body runs.
#[derive(Accounts)]
pub struct TransferAccounts<'info> {
    /// The depositor. Custody and depositing are separate roles, so the
    /// vault owner is refused here.
    #[account(
        mut,
        constraint = user.key() != vault.owner @ VaultError::OwnerTransferNotAllowed,
    )]
    pub user: Signer<'info>,

    /// Depositor's own token account, source of deposits and destination
    /// of withdrawals
    #[account(
        mut,
        constraint = user_token_account.owner == user.key() @ VaultError::AddressMismatch,
        constraint = user_token_account.mint == vault.mint @ VaultError::MintMismatch,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        constraint = mint.is_initialized,
        constraint = mint.key() == vault.mint @ VaultError::MintMismatch,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref(), mint.key().as_ref()],
        bump = vault.bumps.vault,
        constraint = vault.initialized @ VaultError::NotInitialized,
    )]
    pub vault: Account<'info, Vault>,

    /// Depositor's ledger, created on first deposit. A fresh account
    /// deserializes with `initialized = false`; `withdraw` rejects it,
    /// `deposit` activates it.
    #[account(
        init_if_needed,
        payer = user,
        space = UserTransfers::LEN,
        seeds = [USER_TRANSFERS_SEED, vault.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_transfers: Account<'info, UserTransfers>,

    #[account(
        seeds = [AUTHORITY_SEED, vault.key().as_ref()],
        bump = vault.bumps.authority,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Escrow token account; its balance always equals
    /// vault.deposited_amount - vault.withdrawn_amount
    #[account(
        mut,
        seeds = [TOKEN_ACCOUNT_SEED, vault.key().as_ref()],
        bump = vault.bumps.token_account,
        constraint = vault_token_account.mint == vault.mint @ VaultError::MintMismatch,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::AddressMismatch,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> TransferAccounts<'info> {
    /// Escrow-bound transfer, signed by the depositor.
    ///
    /// Token-program failures (insufficient balance, frozen account)
    /// propagate unchanged, and no retry is ever attempted here.
    pub fn transfer_in(&self, amount: u64) -> Result<()> {
        let cpi_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.user_token_account.to_account_info(),
                to: self.vault_token_account.to_account_info(),
                authority: self.user.to_account_info(),
            },
        );
        token::transfer(cpi_ctx, amount)
    }

    /// Outbound transfer from escrow, signed by the program as the derived
    /// authority. The signer seeds are rebuilt from the stored bump; only
    /// code that passed the account validation above can reach this point.
    pub fn transfer_out(&self, amount: u64) -> Result<()> {
        let vault_key = self.vault.key();
        let seeds = &[AUTHORITY_SEED, vault_key.as_ref(), &[self.vault.bumps.authority]];
        let signer = &[&seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            Transfer {
                from: self.vault_token_account.to_account_info(),
                to: self.user_token_account.to_account_info(),
                authority: self.vault_authority.to_account_info(),
            },
            signer,
        );
        token::transfer(cpi_ctx, amount)
    }
}
