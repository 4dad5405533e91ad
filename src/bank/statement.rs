use crate::account::Account;
use crate::customer::Customer;

use std::fmt;

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Account summary followed by the account's transaction log, oldest first
#[derive(Debug, Clone, Copy)]
pub struct Statement<'a> {
    customer: &'a Customer,
    account: &'a Account,
}

impl<'a> Statement<'a> {
    pub fn new(customer: &'a Customer, account: &'a Account) -> Self {
        Self { customer, account }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Account statement:")?;

        if let Some(person) = self.customer.person() {
            writeln!(f, "Customer: {}", person.name)?;
            writeln!(f, "Tax ID: {}", person.tax_id)?;
        }

        writeln!(f, "Address: {}", self.customer.address())?;
        writeln!(f, "Account number: {}", self.account.number())?;
        writeln!(f, "Branch: {}", self.account.branch_code())?;
        writeln!(f, "Current balance: R${}", self.account.balance())?;
        writeln!(f)?;
        write!(f, "Transaction history:")?;

        if self.account.history().is_empty() {
            write!(f, "\nNo transactions recorded.")?;
        }

        for record in self.account.history() {
            write!(
                f,
                "\n{} - {}: R${}",
                record.timestamp().format(TIMESTAMP_FORMAT),
                record.kind(),
                record.amount()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::account::AccountKind;
    use crate::clock::FixedClock;
    use crate::customer::Person;
    use crate::ids::{AccountNumber, TaxId};
    use crate::{Money, Transaction};

    use chrono::{Duration, Local, NaiveDate, TimeZone};

    use super::*;

    const SOME_NUMBER: AccountNumber = AccountNumber(1001);

    #[test]
    fn display() {
        let clock = FixedClock::new(Local.with_ymd_and_hms(2026, 10, 16, 10, 0, 0).unwrap());

        let mut customer = Customer::individual(
            Person {
                name: "Ana Souza".to_string(),
                tax_id: TaxId("987.654.321-00".to_string()),
                birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            },
            "Rua A, 1",
        );
        customer.open_account(SOME_NUMBER, AccountKind::Basic);

        let deposit = Transaction::deposit(Money::from_units(80));
        let withdrawal = Transaction::withdrawal(Money::from_cents(1250));

        customer
            .perform_transaction(SOME_NUMBER, &deposit, &clock)
            .unwrap();
        clock.advance(Duration::seconds(61));
        customer
            .perform_transaction(SOME_NUMBER, &withdrawal, &clock)
            .unwrap();

        let account = customer.account(SOME_NUMBER).unwrap();

        assert_eq!(
            Statement::new(&customer, account).to_string(),
            [
                "Account statement:",
                "Customer: Ana Souza",
                "Tax ID: 987.654.321-00",
                "Address: Rua A, 1",
                "Account number: 1001",
                "Branch: 0001",
                "Current balance: R$67.50",
                "",
                "Transaction history:",
                "16/10/2026 10:00:00 - Deposit: R$80.00",
                "16/10/2026 10:01:01 - Withdrawal: R$12.50",
            ]
            .join("\n")
        );
    }

    #[test]
    fn display_empty_history() {
        let mut customer = Customer::new("Rua B, 2");
        customer.open_account(SOME_NUMBER, AccountKind::Basic);

        let account = customer.account(SOME_NUMBER).unwrap();
        let statement = Statement::new(&customer, account).to_string();

        assert!(!statement.contains("Customer:"));
        assert!(statement.ends_with("Transaction history:\nNo transactions recorded."));
    }
}
