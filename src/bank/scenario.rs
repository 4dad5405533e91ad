use crate::account::{AccountKind, CheckingPolicy};
use crate::clock::{Clock, FixedClock};
use crate::customer::{Customer, Person};
use crate::ids::{AccountNumber, TaxId};
use crate::report::{self, Reporter};
use crate::{Money, Result, Transaction};

use chrono::{DateTime, Local, NaiveDate};

pub const REFERENCE_ACCOUNT_NUMBER: AccountNumber = AccountNumber(1001);

pub fn reference_customer() -> Result<Customer> {
    let birth_date = NaiveDate::from_ymd_opt(2000, 1, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid reference birth date"))?;

    let person = Person {
        name: "José Mateus".to_string(),
        tax_id: TaxId("123.456.789-00".to_string()),
        birth_date,
    };

    Ok(Customer::individual(person, "Rua das Palmeiras, 123"))
}

/// Opens the checking account every scripted run operates on
pub fn open_reference_account(
    customer: &mut Customer,
    number: AccountNumber,
    policy: CheckingPolicy,
) {
    customer.open_account(number, AccountKind::Checking(policy));
}

/// Deposit, two withdrawals, one beyond the overdraft limit, one reaching the
/// withdrawal limit and one past it.
pub fn reference_transactions() -> Vec<Transaction> {
    vec![
        Transaction::deposit(Money::from_units(1000)),
        Transaction::withdrawal(Money::from_units(200)),
        Transaction::withdrawal(Money::from_units(100)),
        Transaction::withdrawal(Money::from_units(2000)),
        Transaction::withdrawal(Money::from_units(50)),
        Transaction::withdrawal(Money::from_units(30)),
    ]
}

/// Performs each transaction in order on the customer's account `number`,
/// reporting one line per attempt. Returns how many succeeded.
pub fn replay(
    customer: &mut Customer,
    number: AccountNumber,
    transactions: impl IntoIterator<Item = Transaction>,
    clock: &dyn Clock,
    reporter: &mut dyn Reporter,
) -> usize {
    let mut succeeded = 0;

    for transaction in transactions {
        log::debug!("Performing {transaction:?} on account {number}");

        let outcome = customer.perform_transaction(number, &transaction, clock);

        match &outcome {
            Ok(()) => succeeded += 1,
            Err(e) => log::warn!("Rejected {transaction:?} on account {number}: {e}"),
        }

        reporter.report(&report::attempt_line(&transaction, &outcome));
    }

    succeeded
}

/// Like `replay`, with every transaction stamped at `now`. A scripted run then
/// stays within one calendar day however long it takes.
pub fn replay_at(
    customer: &mut Customer,
    number: AccountNumber,
    transactions: impl IntoIterator<Item = Transaction>,
    now: DateTime<Local>,
    reporter: &mut dyn Reporter,
) -> usize {
    replay(customer, number, transactions, &FixedClock::new(now), reporter)
}
