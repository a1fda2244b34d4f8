//! In-memory bank accounts and a bank that can move funds between them.
//!
//! Balances are exact decimals. A withdrawal that would take a balance below
//! zero fails with [`Error::InsufficientFunds`] and changes nothing, which is
//! also what keeps a failed [`Bank::transfer`] from touching either account.
//!
//! ```
//! use bank_accounts::{Account, Bank};
//! use rust_decimal::Decimal;
//!
//! let mut source = Account::new("Eduardo", Decimal::from(100_000)).unwrap();
//! let mut destination = Account::new("Ricardo", Decimal::from(1_000)).unwrap();
//!
//! let bank = Bank::new("BBVA");
//! bank.transfer(&mut source, &mut destination, Decimal::from(5_000)).unwrap();
//!
//! assert_eq!(source.balance(), Decimal::from(95_000));
//! assert_eq!(destination.balance(), Decimal::from(6_000));
//! ```

mod account;
mod bank;
mod error;

pub use account::Account;
pub use bank::{Bank, BankId};
pub use error::Error;
