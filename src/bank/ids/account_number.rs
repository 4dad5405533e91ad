use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(pub u32);

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

/// Hands out account numbers, never the same one twice.
///
/// Uniqueness only holds for numbers drawn from the same allocator, so a
/// program should keep exactly one of these around.
#[derive(Debug)]
pub struct AccountNumbers {
    next: Option<u32>,
}

impl AccountNumbers {
    pub fn starting_at(first: AccountNumber) -> Self {
        Self {
            next: Some(first.0),
        }
    }
}

/// Ends once the number space is exhausted
impl Iterator for AccountNumbers {
    type Item = AccountNumber;

    fn next(&mut self) -> Option<AccountNumber> {
        let number = self.next?;
        self.next = number.checked_add(1);

        Some(AccountNumber(number))
    }
}
