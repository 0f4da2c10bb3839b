use crate::{errors::VaultError, events::DepositMade, instructions::shared::TransferAccounts};
use anchor_lang::prelude::*;

pub fn handler(ctx: Context<TransferAccounts>, amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::ZeroAmount);

    if !ctx.accounts.user_transfers.initialized {
        let depositor = ctx.accounts.user.key();
        let vault_key = ctx.accounts.vault.key();
        let bump = ctx.bumps.user_transfers;
        ctx.accounts.user_transfers.activate(depositor, vault_key, bump);
    }

    ctx.accounts.transfer_in(amount)?;

    let vault = &mut ctx.accounts.vault;
    vault.record_deposit(amount)?;
    let user_transfers = &mut ctx.accounts.user_transfers;
    user_transfers.record_deposit(amount)?;

    let clock = Clock::get()?;
    emit!(DepositMade {
        vault: ctx.accounts.vault.key(),
        depositor: ctx.accounts.user.key(),
        amount,
        vault_deposited: ctx.accounts.vault.deposited_amount,
        user_deposited: ctx.accounts.user_transfers.deposited_amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "[vault] deposit user={} amount={} total_deposited={}",
        ctx.accounts.user.key(),
        amount,
        ctx.accounts.vault.deposited_amount
    );
    Ok(())
}
