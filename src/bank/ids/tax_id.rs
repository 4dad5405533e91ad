use std::fmt;

/// Taxpayer registration number of an individual, kept as written (e.g. `123.456.789-00`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(pub String);

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
