mod account_number;
mod tax_id;

pub use account_number::{AccountNumber, AccountNumbers};
pub use tax_id::TaxId;
