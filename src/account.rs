use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::bank::BankId;
use crate::error::Error;

/**
 * A single owner's balance. The bank handle is only a lookup key,
 * the bank owns its accounts and never the other way around.
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DeserializedAccount")]
pub struct Account {
    owner: String,
    balance: Decimal,
    bank: Option<BankId>,
}

impl Account {
    /// No sign check on `balance`, only withdrawals look at it.
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Result<Self, Error> {
        let owner = owner.into();
        if owner.is_empty() {
            return Err(Error::EmptyOwner);
        }
        Ok(Account {
            owner,
            balance,
            bank: None,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The bank this account was last added to, if any.
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub(crate) fn attach_to(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// A negative `amount` raises the balance and always passes the funds check.
    ///
    /// # Panics
    ///
    /// If `balance - amount` overflows the range of [`Decimal`].
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        let remaining = self.balance - amount;
        if remaining < Decimal::ZERO {
            return Err(Error::InsufficientFunds);
        }
        trace!(owner = %self.owner, %amount, balance = %remaining, "withdrawal committed");
        self.balance = remaining;
        Ok(())
    }

    /// Negative amounts are accepted and skip the insufficient funds check.
    ///
    /// # Panics
    ///
    /// If `balance + amount` overflows the range of [`Decimal`].
    pub fn deposit(&mut self, amount: Decimal) {
        self.balance += amount;
        trace!(owner = %self.owner, %amount, balance = %self.balance, "deposit committed");
    }
}

/// A stored bank handle is dropped, only `Bank::add_account` sets one.
#[derive(Deserialize)]
struct DeserializedAccount {
    owner: String,
    balance: Decimal,
}

impl TryFrom<DeserializedAccount> for Account {
    type Error = Error;
    fn try_from(deserialized: DeserializedAccount) -> Result<Self, Self::Error> {
        Account::new(deserialized.owner, deserialized.balance)
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}
