mod args;
mod config;
mod reader;

use bank::clock::{Clock, SystemClock};
use bank::ids::{AccountNumber, AccountNumbers};
use bank::input::ScriptEvent;
use bank::report::{Reporter, StdoutReporter};
use bank::{scenario, Customer, Result, Statement, Transaction};

use std::path::PathBuf;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let policy = config::checking_policy()?;

    let transactions = match args::parse_script_arg()? {
        Some(path) => read_script(path)?,
        None => scenario::reference_transactions(),
    };

    let mut numbers = AccountNumbers::starting_at(scenario::REFERENCE_ACCOUNT_NUMBER);
    let number = numbers
        .next()
        .ok_or_else(|| anyhow::anyhow!("No account numbers left to allocate"))?;

    let mut customer = scenario::reference_customer()?;
    scenario::open_reference_account(&mut customer, number, policy);

    let mut reporter = StdoutReporter;
    reporter.report("Welcome to the banking system!");
    reporter.report("");

    let succeeded = scenario::replay_at(
        &mut customer,
        number,
        transactions,
        SystemClock.now(),
        &mut reporter,
    );

    log::debug!("{succeeded} transactions succeeded. Beginning statement...");

    report_statement(&customer, number, &mut reporter)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Reads a transaction script, skipping rows that can't be understood
fn read_script(path: PathBuf) -> Result<Vec<Transaction>> {
    log::debug!("Found filepath as input arg: {path:?}");

    let mut rdr = reader::build_script_reader(path)?;
    let mut transactions = vec![];

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<ScriptEvent>() {
        log::debug!("Parsing record into ScriptEvent: {record:?}");
        let event = match record {
            Ok(event) => event,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        match event.parse_transaction() {
            Ok(tx) => transactions.push(tx),
            Err(e) => log::warn!("{e}"),
        }
    }

    Ok(transactions)
}

fn report_statement(
    customer: &Customer,
    number: AccountNumber,
    reporter: &mut dyn Reporter,
) -> Result {
    let account = customer
        .account(number)
        .ok_or_else(|| anyhow::anyhow!("Account {number} was never opened"))?;

    reporter.report("");
    reporter.report(&Statement::new(customer, account).to_string());

    Ok(())
}
