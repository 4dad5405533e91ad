use crate::account::{Account, TransactionResult};
use crate::clock::Clock;
use crate::history::{TransactionKind, TransactionRecord};
use crate::Money;

/// Transaction represents a requested change to an account's balance.
///
/// Applying it either changes the balance and appends exactly one record to the
/// account's history, or changes nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
}

impl Transaction {
    pub fn deposit(amount: Money) -> Self {
        Self::Deposit { amount }
    }

    pub fn withdrawal(amount: Money) -> Self {
        Self::Withdrawal { amount }
    }

    pub fn new(kind: TransactionKind, amount: Money) -> Self {
        match kind {
            TransactionKind::Deposit => Self::deposit(amount),
            TransactionKind::Withdrawal => Self::withdrawal(amount),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Deposit { .. } => TransactionKind::Deposit,
            Self::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Deposit { amount } | Self::Withdrawal { amount } => *amount,
        }
    }

    pub fn apply(&self, account: &mut Account, clock: &dyn Clock) -> TransactionResult {
        let now = clock.now();

        match *self {
            Self::Deposit { amount } => account.credit(amount)?,
            Self::Withdrawal { amount } => account.debit(amount, now)?,
        }

        account.record(TransactionRecord::new(self.kind(), self.amount(), now));

        Ok(())
    }
}
