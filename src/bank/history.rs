use crate::Money;

use std::fmt;

use chrono::{DateTime, Local, NaiveDate};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        };

        return write!(f, "{name}");
    }
}

/// A completed transaction. Fields are only readable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Money,
    timestamp: DateTime<Local>,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Money, timestamp: DateTime<Local>) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Append-only log of the transactions completed on one account, oldest first
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: TransactionRecord) -> usize {
        let index = self.records.len();

        self.records.push(record);

        index
    }

    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransactionRecord> {
        self.records.last()
    }

    pub fn count(&self, kind: TransactionKind) -> usize {
        self.iter().filter(|record| record.kind == kind).count()
    }

    /// Counts records of `kind` stamped on the given local calendar day
    pub fn count_on(&self, kind: TransactionKind, date: NaiveDate) -> usize {
        self.iter()
            .filter(|record| record.kind == kind && record.timestamp.date_naive() == date)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
