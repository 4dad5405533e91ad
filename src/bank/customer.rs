use crate::account::{Account, AccountKind, TransactionError, TransactionResult};
use crate::clock::Clock;
use crate::ids::{AccountNumber, TaxId};
use crate::Transaction;

use chrono::NaiveDate;

/// Identity of a customer who is a physical person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub tax_id: TaxId,
    pub birth_date: NaiveDate,
}

/// A customer and the accounts it owns.
///
/// Accounts are only reachable through their owner, so every transaction a
/// customer performs lands on one of its own accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    address: String,
    person: Option<Person>,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            person: None,
            accounts: Vec::new(),
        }
    }

    pub fn individual(person: Person, address: impl Into<String>) -> Self {
        Self {
            person: Some(person),
            ..Self::new(address)
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn person(&self) -> Option<&Person> {
        self.person.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.person.as_ref().map(|person| person.name.as_str())
    }

    /// Opens an empty account under `number` and registers it with this customer.
    /// The caller is responsible for `number` being unique, see `AccountNumbers`.
    pub fn open_account(&mut self, number: AccountNumber, kind: AccountKind) -> &mut Account {
        self.register_account(Account::new(number, kind))
    }

    pub fn register_account(&mut self, account: Account) -> &mut Account {
        log::debug!("Registering account {} ({:?})", account.number(), account.kind());

        let index = self.accounts.len();
        self.accounts.push(account);

        &mut self.accounts[index]
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn perform_transaction(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
        clock: &dyn Clock,
    ) -> TransactionResult {
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or(TransactionError::AccountNotOwned(number))?;

        transaction.apply(account, clock)
    }
}
