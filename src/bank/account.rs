use crate::history::{History, TransactionKind, TransactionRecord};
use crate::ids::AccountNumber;
use crate::money::MoneyError;
use crate::Money;

use chrono::{DateTime, Local};

use thiserror::Error;

/// Every account is opened at the same branch
pub const DEFAULT_BRANCH_CODE: &str = "0001";

/// Business-rule rejections. None of these leave a mark on the account.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("invalid amount {0}, must be greater than zero")]
    InvalidAmount(Money),

    #[error("insufficient funds, requested {requested} but only {available} available")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("withdrawal limit of {limit} reached")]
    WithdrawalLimitExceeded { limit: u32 },

    #[error("balance out of range: {0}")]
    Overflow(#[from] MoneyError),

    #[error("account {0} does not belong to this customer")]
    AccountNotOwned(AccountNumber),
}

pub type TransactionResult<T = ()> = std::result::Result<T, TransactionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Overdraft limit must not be negative, found {0}")]
    NegativeOverdraftLimit(Money),
}

/// Which withdrawals count towards a checking account's limit
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalWindow {
    /// Withdrawals made on the same local calendar day as the attempt
    #[default]
    CalendarDay,

    /// Every withdrawal ever made on the account
    Lifetime,
}

impl WithdrawalWindow {
    fn withdrawals_made(&self, history: &History, now: DateTime<Local>) -> usize {
        match self {
            Self::CalendarDay => history.count_on(TransactionKind::Withdrawal, now.date_naive()),
            Self::Lifetime => history.count(TransactionKind::Withdrawal),
        }
    }
}

/// Withdrawal rules of a checking account. The overdraft limit is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    overdraft_limit: Money,
    max_daily_withdrawals: u32,
    window: WithdrawalWindow,
}

impl CheckingPolicy {
    pub fn new(
        overdraft_limit: Money,
        max_daily_withdrawals: u32,
        window: WithdrawalWindow,
    ) -> std::result::Result<Self, PolicyError> {
        if overdraft_limit.is_negative() {
            Err(PolicyError::NegativeOverdraftLimit(overdraft_limit))?
        }

        Ok(Self {
            overdraft_limit,
            max_daily_withdrawals,
            window,
        })
    }

    pub fn overdraft_limit(&self) -> Money {
        self.overdraft_limit
    }

    pub fn max_daily_withdrawals(&self) -> u32 {
        self.max_daily_withdrawals
    }

    pub fn window(&self) -> WithdrawalWindow {
        self.window
    }

    pub fn with_window(self, window: WithdrawalWindow) -> Self {
        Self { window, ..self }
    }
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self {
            overdraft_limit: Money::from_units(500),
            max_daily_withdrawals: 3,
            window: WithdrawalWindow::default(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// No overdraft, no withdrawal limit
    #[default]
    Basic,
    Checking(CheckingPolicy),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    branch_code: String,
    kind: AccountKind,
    balance: Money,
    history: History,
}

impl Account {
    pub fn new(number: AccountNumber, kind: AccountKind) -> Self {
        Self {
            number,
            branch_code: DEFAULT_BRANCH_CODE.to_string(),
            kind,
            balance: Money::ZERO,
            history: History::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Adds `amount` to the balance. Does not touch the history.
    pub fn credit(&mut self, amount: Money) -> TransactionResult {
        if !amount.is_positive() {
            Err(TransactionError::InvalidAmount(amount))?
        }

        let mut balance = self.balance;
        balance.add(&amount)?;

        log::debug!("Account {}: credited {amount}, balance {balance}", self.number);
        self.balance = balance;

        Ok(())
    }

    /// Takes `amount` off the balance if the account's withdrawal rules allow it.
    /// `now` places the attempt in time for day-scoped withdrawal limits. Does not
    /// touch the history.
    pub fn debit(&mut self, amount: Money, now: DateTime<Local>) -> TransactionResult {
        if !amount.is_positive() {
            Err(TransactionError::InvalidAmount(amount))?
        }

        let available = match &self.kind {
            AccountKind::Basic => self.balance,
            AccountKind::Checking(policy) => {
                let made = policy.window.withdrawals_made(&self.history, now);

                if made >= policy.max_daily_withdrawals as usize {
                    Err(TransactionError::WithdrawalLimitExceeded {
                        limit: policy.max_daily_withdrawals,
                    })?
                }

                // Saturating is exact here: the limit is non-negative and no amount exceeds MAX
                self.balance.saturating_add(&policy.overdraft_limit)
            }
        };

        if amount > available {
            Err(TransactionError::InsufficientFunds {
                requested: amount,
                available,
            })?
        }

        let mut balance = self.balance;
        balance.sub(&amount)?;

        log::debug!("Account {}: debited {amount}, balance {balance}", self.number);
        self.balance = balance;

        Ok(())
    }

    pub(crate) fn record(&mut self, record: TransactionRecord) {
        let index = self.history.append(record);
        log::debug!("Account {}: recorded history entry {index}", self.number);
    }
}
