use crate::account::TransactionResult;
use crate::Transaction;

/// Where human-readable status lines go
pub trait Reporter {
    fn report(&mut self, line: &str);
}

/// Writes each line to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Keeps every line, mostly useful for tests
impl Reporter for Vec<String> {
    fn report(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// One line describing how a transaction attempt went
pub fn attempt_line(transaction: &Transaction, outcome: &TransactionResult) -> String {
    let kind = transaction.kind();
    let amount = transaction.amount();

    match outcome {
        Ok(()) => format!("{kind} of R${amount} succeeded."),
        Err(e) => format!("{kind} of R${amount} failed: {e}."),
    }
}

#[cfg(test)]
mod tests {
    use crate::account::TransactionError;
    use crate::Money;

    use super::*;

    #[test]
    fn attempt_line_success() {
        let tx = Transaction::deposit(Money::from_units(1000));

        assert_eq!(attempt_line(&tx, &Ok(())), "Deposit of R$1000.00 succeeded.");
    }

    #[test]
    fn attempt_line_failure() {
        let tx = Transaction::withdrawal(Money::from_units(30));
        let outcome = Err(TransactionError::WithdrawalLimitExceeded { limit: 3 });

        assert_eq!(
            attempt_line(&tx, &outcome),
            "Withdrawal of R$30.00 failed: withdrawal limit of 3 reached."
        );
    }

    #[test]
    fn vec_reporter_keeps_lines() {
        let mut lines: Vec<String> = vec![];

        lines.report("first");
        lines.report("second");

        assert_eq!(lines, vec!["first", "second"]);
    }
}
