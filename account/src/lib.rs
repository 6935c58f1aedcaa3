//! A minimal balance-holding account.

use std::fmt;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AccountError {
    #[error("{0} is less than 0")]
    Negative(f64),
    #[error("amount must be a finite number, got {0}")]
    NotFinite(f64),
    #[error("insufficient funds to withdraw {requested} (balance {balance})")]
    InsufficientFunds { requested: f64, balance: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    name: String,
    number: u64,
    balance: f64,
}

impl Account {
    /// Open an account holding `balance`, which must be finite and non-negative.
    pub fn open(name: impl Into<String>, number: u64, balance: f64) -> Result<Self, AccountError> {
        check_amount(balance)?;
        Ok(Self {
            name: name.into(),
            number,
            balance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        check_amount(amount)?;
        self.balance += amount;
        info!(account = self.number, amount, balance = self.balance, "deposit");
        Ok(())
    }

    /// Withdrawing the entire balance is allowed; anything more is not.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        check_amount(amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        info!(account = self.number, amount, balance = self.balance, "withdrawal");
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your current balance is {}.", self.balance)
    }
}

fn check_amount(amount: f64) -> Result<(), AccountError> {
    if !amount.is_finite() {
        return Err(AccountError::NotFinite(amount));
    }
    if amount < 0.0 {
        return Err(AccountError::Negative(amount));
    }
    Ok(())
}
