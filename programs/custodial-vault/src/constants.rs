//! PDA seed prefixes. Single source of truth for the account constraints in
//! `instructions/` and the derivation helpers in [`crate::pda`].

/// Seed for the vault record PDA, combined with owner and mint
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for the escrow transfer-authority PDA, combined with the vault
pub const AUTHORITY_SEED: &[u8] = b"authority";

/// Seed for the escrow token account PDA, combined with the vault
pub const TOKEN_ACCOUNT_SEED: &[u8] = b"tokens";

/// Seed for a depositor's ledger PDA, combined with vault and depositor
pub const USER_TRANSFERS_SEED: &[u8] = b"user_transfers";
