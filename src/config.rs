use bank::{CheckingPolicy, Money, Result, WithdrawalWindow};

use std::env;

use anyhow::Context;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use thiserror::Error;

const OVERDRAFT_LIMIT_VAR: &str = "BANK_OVERDRAFT_LIMIT";
const MAX_DAILY_WITHDRAWALS_VAR: &str = "BANK_MAX_DAILY_WITHDRAWALS";
const WITHDRAWAL_WINDOW_VAR: &str = "BANK_WITHDRAWAL_WINDOW";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
}

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

/// Checking account policy, with any `BANK_*` environment overrides applied
pub fn checking_policy() -> Result<CheckingPolicy> {
    let policy = policy_from(|name| env::var(name).ok())?;
    log::debug!("Using checking policy: {policy:?}");

    Ok(policy)
}

fn policy_from(lookup: impl Fn(&str) -> Option<String>) -> Result<CheckingPolicy> {
    let defaults = CheckingPolicy::default();

    let mut overdraft_limit = defaults.overdraft_limit();
    let mut max_daily_withdrawals = defaults.max_daily_withdrawals();
    let mut window = defaults.window();

    if let Some(value) = lookup(OVERDRAFT_LIMIT_VAR) {
        overdraft_limit = Money::parse(&value)
            .with_context(|| ConfigError::InvalidValue(OVERDRAFT_LIMIT_VAR, value.clone()))?;
    }

    if let Some(value) = lookup(MAX_DAILY_WITHDRAWALS_VAR) {
        max_daily_withdrawals = value
            .trim()
            .parse::<u32>()
            .with_context(|| ConfigError::InvalidValue(MAX_DAILY_WITHDRAWALS_VAR, value.clone()))?;
    }

    if let Some(value) = lookup(WITHDRAWAL_WINDOW_VAR) {
        window = match value.trim().to_ascii_lowercase().as_str() {
            "day" => WithdrawalWindow::CalendarDay,
            "lifetime" => WithdrawalWindow::Lifetime,
            _ => Err(ConfigError::InvalidValue(WITHDRAWAL_WINDOW_VAR, value))?,
        };
    }

    let policy = CheckingPolicy::new(overdraft_limit, max_daily_withdrawals, window)
        .context(ConfigError::InvalidValue(OVERDRAFT_LIMIT_VAR, overdraft_limit.to_string()))?;

    Ok(policy)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let policy = policy_from(lookup_in(&[])).unwrap();

        assert_eq!(policy, CheckingPolicy::default());
    }

    #[test]
    fn overrides() {
        let policy = policy_from(lookup_in(&[
            (OVERDRAFT_LIMIT_VAR, "250.50"),
            (MAX_DAILY_WITHDRAWALS_VAR, " 5 "),
            (WITHDRAWAL_WINDOW_VAR, "Lifetime"),
        ]))
        .unwrap();

        assert_eq!(
            policy,
            CheckingPolicy::new(Money::from_cents(25050), 5, WithdrawalWindow::Lifetime).unwrap()
        );
    }

    #[test]
    fn fail_on_invalid_values() {
        assert!(policy_from(lookup_in(&[(OVERDRAFT_LIMIT_VAR, "-1")])).is_err());
        assert!(policy_from(lookup_in(&[(OVERDRAFT_LIMIT_VAR, "lots")])).is_err());
        assert!(policy_from(lookup_in(&[(MAX_DAILY_WITHDRAWALS_VAR, "-3")])).is_err());
        assert!(policy_from(lookup_in(&[(WITHDRAWAL_WINDOW_VAR, "weekly")])).is_err());
    }
}
