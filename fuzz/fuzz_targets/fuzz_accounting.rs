#![no_main]

use arbitrary::Arbitrary;
use custodial_vault::state::{UserTransfers, Vault};
use libfuzzer_sys::fuzz_target;

const LEDGERS: usize = 4;

#[derive(Arbitrary, Debug)]
struct LedgerOp {
    user: u8,
    deposit: u64,
    withdraw: u64,
}

// Drives random deposit/withdraw sequences through the real accounting
// transitions and checks the vault invariants after every step.
fuzz_target!(|ops: Vec<LedgerOp>| {
    let mut vault = Vault::default();
    vault.initialized = true;
    let mut ledgers: [UserTransfers; LEDGERS] = Default::default();

    for op in ops {
        let ledger = &mut ledgers[op.user as usize % LEDGERS];

        // Mirrors the deposit handler: both counters move or neither does.
        if op.deposit > 0
            && vault.deposited_amount.checked_add(op.deposit).is_some()
            && ledger.deposited_amount.checked_add(op.deposit).is_some()
        {
            vault.record_deposit(op.deposit).unwrap();
            ledger.record_deposit(op.deposit).unwrap();
        }

        // Mirrors the withdraw handler: the per-depositor guard decides,
        // the aggregate guard must then always accept.
        if op.withdraw > 0 && ledger.record_withdraw(op.withdraw).is_ok() {
            vault.record_withdraw(op.withdraw).unwrap();
        }

        assert!(vault.withdrawn_amount <= vault.deposited_amount);
        for ledger in &ledgers {
            assert!(ledger.withdrawn_amount <= ledger.deposited_amount);
        }
        assert_eq!(
            vault.deposited_amount,
            ledgers.iter().map(|l| l.deposited_amount).sum::<u64>()
        );
        assert_eq!(
            vault.withdrawn_amount,
            ledgers.iter().map(|l| l.withdrawn_amount).sum::<u64>()
        );
    }
});
