pub mod account;
pub mod clock;
pub mod customer;
pub mod history;
pub mod ids;
pub mod input;
mod money;
pub mod report;
mod result;
pub mod scenario;
pub mod statement;
mod transaction;

pub use account::{
    Account, AccountKind, CheckingPolicy, PolicyError, TransactionError, WithdrawalWindow,
};
pub use customer::{Customer, Person};
pub use history::{History, TransactionKind, TransactionRecord};
pub use money::{Money, MoneyError};
pub use result::Result;
pub use statement::Statement;
pub use transaction::Transaction;
