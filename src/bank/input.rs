use crate::history::TransactionKind;
use crate::Money;
use crate::Result;
use crate::Transaction;

use serde::Deserialize;

use thiserror::Error;

/// One row of a transaction script, e.g. `withdrawal, 200.00`
#[derive(Deserialize, Debug, Clone)]
pub struct ScriptEvent {
    #[serde(rename = "type")]
    pub typ: TransactionKind,

    pub amount: Option<String>,
}

#[derive(Error, Debug)]
pub enum ScriptParseError {
    #[error("Error parsing script event: amount value missing from {0:?}")]
    NoAmount(ScriptEvent),
}

impl ScriptEvent {
    /// Amounts are only parsed here. Whether they are acceptable is up to the account.
    pub fn parse_transaction(self) -> Result<Transaction> {
        let amount = self
            .amount
            .clone()
            .ok_or_else(|| ScriptParseError::NoAmount(self.clone()))?;

        let amount = Money::parse(&amount)?;

        Ok(Transaction::new(self.typ, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_transaction() {
        let event = ScriptEvent {
            typ: TransactionKind::Withdrawal,
            amount: Some("200.5".to_string()),
        };

        assert_eq!(
            event.parse_transaction().unwrap(),
            Transaction::withdrawal(Money::from_cents(20050))
        );
    }

    #[test]
    fn negative_amounts_reach_the_account() {
        let event = ScriptEvent {
            typ: TransactionKind::Deposit,
            amount: Some("-3".to_string()),
        };

        assert_eq!(
            event.parse_transaction().unwrap(),
            Transaction::deposit(Money::from_units(-3))
        );
    }

    #[test]
    fn fail_to_parse_transaction() {
        let event = ScriptEvent {
            typ: TransactionKind::Deposit,
            amount: None,
        };
        assert!(event.parse_transaction().is_err());

        let event = ScriptEvent {
            typ: TransactionKind::Deposit,
            amount: Some("ten".to_string()),
        };
        assert!(event.parse_transaction().is_err());
    }
}
