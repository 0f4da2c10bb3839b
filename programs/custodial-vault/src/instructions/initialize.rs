use crate::{
    constants::{AUTHORITY_SEED, TOKEN_ACCOUNT_SEED, VAULT_SEED},
    events::VaultInitialized,
    state::{Vault, VaultBumps},
};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(constraint = mint.is_initialized)]
    pub mint: Account<'info, Mint>,

    /// Vault record on its canonical PDA. `init` refuses an account that
    /// already exists, so a vault can never be re-created for the same
    /// (owner, mint) pair.
    #[account(
        init,
        payer = owner,
        space = Vault::LEN,
        seeds = [VAULT_SEED, owner.key().as_ref(), mint.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    /// Escrow transfer authority. A plain system account on a PDA: it holds
    /// no data and no key exists for it, only this program can sign as it.
    #[account(
        seeds = [AUTHORITY_SEED, vault.key().as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Escrow token account holding the vault balance, owned by the
    /// derived authority
    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = vault_authority,
        seeds = [TOKEN_ACCOUNT_SEED, vault.key().as_ref()],
        bump,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<InitializeVault>) -> Result<()> {
    let bumps = VaultBumps {
        vault: ctx.bumps.vault,
        authority: ctx.bumps.vault_authority,
        token_account: ctx.bumps.vault_token_account,
    };

    let vault = &mut ctx.accounts.vault;
    vault.activate(ctx.accounts.owner.key(), ctx.accounts.mint.key(), bumps)?;

    let clock = Clock::get()?;
    emit!(VaultInitialized {
        vault: vault.key(),
        owner: vault.owner,
        mint: vault.mint,
        timestamp: clock.unix_timestamp,
    });

    msg!("[vault] initialized owner={} mint={}", vault.owner, vault.mint);
    Ok(())
}
