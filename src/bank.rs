use std::{
    borrow::Cow,
    fmt::Display,
    sync::atomic::{AtomicU64, Ordering},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::account::Account;
use crate::error::Error;

static NEXT_BANK_ID: AtomicU64 = AtomicU64::new(0);

/// Handle an account keeps to the bank it was added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BankId(u64);

impl BankId {
    fn next() -> Self {
        BankId(NEXT_BANK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/**
 * Deserializing never trusts a stored id: the bank gets a fresh one and
 * every account is re-added so its handle points at it.
 */
#[derive(Debug, Serialize, Deserialize)]
#[serde(from = "DeserializedBank")]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

#[derive(Deserialize)]
struct DeserializedBank {
    name: String,
    accounts: Vec<Account>,
}

impl From<DeserializedBank> for Bank {
    fn from(deserialized: DeserializedBank) -> Self {
        let mut bank = Bank::new(deserialized.name);
        for account in deserialized.accounts {
            bank.add_account(account);
        }
        bank
    }
}

/// Owners containing a comma, quote or line break are quoted, quotes doubled.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

impl Display for Bank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "owner,balance\n")?;
        for account in self.accounts.iter() {
            write!(f, "{},{}\n", csv_field(account.owner()), account.balance())?;
        }
        Ok(())
    }
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Bank {
            id: BankId::next(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Accounts in the order they were added.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn account_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    pub fn find_account(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.owner() == owner)
    }

    /**
     * Takes ownership of the account and points it back at this bank,
     * replacing whatever bank it pointed at before. Duplicates are not
     * checked for. Returns the position of the new entry.
     */
    pub fn add_account(&mut self, mut account: Account) -> usize {
        account.attach_to(self.id);
        debug!(bank = %self.name, owner = %account.owner(), "account added");
        self.accounts.push(account);
        self.accounts.len() - 1
    }

    /**
     * Withdraws from `source` and only then deposits into `destination`,
     * so an insufficient funds error leaves both accounts as they were.
     * Neither account has to belong to this bank.
     */
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: Decimal,
    ) -> Result<(), Error> {
        source.withdraw(amount)?;
        destination.deposit(amount);
        Ok(())
    }

    /// Same as [`Bank::transfer`] for two accounts held by this bank.
    pub fn transfer_between(&mut self, from: usize, to: usize, amount: Decimal) -> Result<(), Error> {
        for index in [from, to] {
            if index >= self.accounts.len() {
                return Err(Error::UnknownAccount { index });
            }
        }
        self.accounts[from].withdraw(amount)?;
        self.accounts[to].deposit(amount);
        Ok(())
    }
}
