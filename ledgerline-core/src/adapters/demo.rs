//! Demo adapters - the simulated backend
//!
//! Generates the mock dataset (once, from a fixed seed so runs are
//! reproducible) and serves it through the repository ports after an
//! artificial delay, mimicking a network round trip. Nothing here persists
//! or mutates anything.

use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::{
    Account, AccountKind, Credentials, Currency, Role, Transaction, TransactionStatus, User,
};
use crate::ports::{AccountRepository, AuthBackend, TransactionRepository};

/// The single demo login
pub const DEMO_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_USER_ID: &str = "u_123";
pub const DEMO_USER_NAME: &str = "Test User";

/// Transactions in the generated dataset
pub const DEMO_TRANSACTION_COUNT: usize = 5000;

/// Seed for the dataset generator
pub const DEMO_SEED: u64 = 42;

const LOGIN_DELAY_MS: u64 = 800;
const FETCH_DELAY_MS: u64 = 600;

const CONCEPTS: [&str; 10] = [
    "Amazon Purchase",
    "Netflix Subscription",
    "Uber Ride",
    "Salary Deposit",
    "Grocery Store",
    "Electric Bill",
    "Gym Membership",
    "Coffee Shop",
    "Freelance Payment",
    "Restaurant Dinner",
];

/// The user the demo credentials authenticate
pub fn demo_user() -> User {
    User {
        id: DEMO_USER_ID.to_string(),
        email: DEMO_EMAIL.to_string(),
        name: DEMO_USER_NAME.to_string(),
        role: Role::User,
    }
}

/// Generate the demo account catalog
pub fn generate_demo_accounts(now: DateTime<Utc>) -> Vec<Account> {
    vec![
        Account {
            id: "acc_1".to_string(),
            name: "Main Savings".to_string(),
            number: "**** 4589".to_string(),
            balance: Decimal::new(2_450_050, 2), // $24,500.50
            currency: Currency::Usd,
            kind: AccountKind::Savings,
            last_updated: now,
        },
        Account {
            id: "acc_2".to_string(),
            name: "Daily Expenses".to_string(),
            number: "**** 1234".to_string(),
            balance: Decimal::new(120_000, 2), // $1,200.00
            currency: Currency::Usd,
            kind: AccountKind::Checking,
            last_updated: now - Duration::hours(1),
        },
        Account {
            id: "acc_3".to_string(),
            name: "Investment".to_string(),
            number: "**** 9999".to_string(),
            balance: Decimal::new(5_000_000, 2), // €50,000.00
            currency: Currency::Eur,
            kind: AccountKind::Savings,
            last_updated: now - Duration::days(1),
        },
        Account {
            id: "acc_4".to_string(),
            name: "Travel Credit".to_string(),
            number: "**** 3077".to_string(),
            balance: Decimal::new(-125_030_000, 2), // -COL$1,250,300.00 owed
            currency: Currency::Cop,
            kind: AccountKind::Credit,
            last_updated: now - Duration::hours(6),
        },
    ]
}

/// Generate `count` mock transactions spread over the 365 days before `anchor`
///
/// Fixed `seed` + fixed `anchor` reproduce the dataset exactly. Roughly 70%
/// of amounts are debits, matching the original generator's mix. The result
/// comes back date-descending, the dataset's natural presentation order.
pub fn generate_demo_transactions(
    count: usize,
    seed: u64,
    anchor: DateTime<Utc>,
) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut transactions = Vec::with_capacity(count);

    for i in 0..count {
        let days_ago: i64 = rng.gen_range(0..365);
        let seconds: i64 = rng.gen_range(0..86_400);
        let date = anchor - Duration::days(days_ago) - Duration::seconds(seconds);

        let cents: i64 = rng.gen_range(1..=50_000);
        let sign = if rng.gen_bool(0.7) { -1 } else { 1 };

        let status = match rng.gen_range(0..3) {
            0 => TransactionStatus::Pending,
            1 => TransactionStatus::Confirmed,
            _ => TransactionStatus::Failed,
        };

        transactions.push(Transaction {
            id: format!("txn_{}", i + 1),
            date,
            concept: CONCEPTS[rng.gen_range(0..CONCEPTS.len())].to_string(),
            amount: Decimal::new(sign * cents, 2),
            status,
            merchant: format!("Merchant {}", rng.gen_range(0..100)),
            category: "General".to_string(),
        });
    }

    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions
}

/// Artificial delay applied to simulated backend calls
///
/// Disabled, it awaits nothing, which keeps tests instant.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDelay {
    enabled: bool,
}

impl SimulatedDelay {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn off() -> Self {
        Self { enabled: false }
    }

    async fn wait(&self, millis: u64) {
        if self.enabled {
            tokio::time::sleep(StdDuration::from_millis(millis)).await;
        }
    }
}

/// In-memory account and transaction source
///
/// Stands in for `GET /accounts` and `GET /transactions`.
pub struct DemoLedger {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    delay: SimulatedDelay,
}

impl DemoLedger {
    /// The standard demo dataset: 5000 seeded transactions, 4 accounts
    pub fn new(delay: SimulatedDelay) -> Self {
        let now = Utc::now();
        Self::with_data(
            generate_demo_accounts(now),
            generate_demo_transactions(DEMO_TRANSACTION_COUNT, DEMO_SEED, now),
            delay,
        )
    }

    /// Build over explicit data, mainly for tests
    pub fn with_data(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        delay: SimulatedDelay,
    ) -> Self {
        Self {
            accounts,
            transactions,
            delay,
        }
    }
}

#[async_trait]
impl AccountRepository for DemoLedger {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.delay.wait(FETCH_DELAY_MS).await;
        Ok(self.accounts.clone())
    }

    async fn get_account(&self, id: &str) -> Result<Option<Account>> {
        self.delay.wait(FETCH_DELAY_MS).await;
        Ok(self.accounts.iter().find(|a| a.id == id).cloned())
    }
}

#[async_trait]
impl TransactionRepository for DemoLedger {
    async fn all_transactions(&self) -> Result<Vec<Transaction>> {
        self.delay.wait(FETCH_DELAY_MS).await;
        Ok(self.transactions.clone())
    }
}

/// Simulated credential check against the single demo account
///
/// Stands in for `POST /auth/login`.
pub struct DemoAuthBackend {
    delay: SimulatedDelay,
}

impl DemoAuthBackend {
    pub fn new(delay: SimulatedDelay) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AuthBackend for DemoAuthBackend {
    async fn authenticate(&self, credentials: &Credentials) -> Result<User> {
        self.delay.wait(LOGIN_DELAY_MS).await;

        if credentials.email != DEMO_EMAIL || credentials.password != DEMO_PASSWORD {
            tracing::debug!(email = %credentials.email, "login rejected");
            return Err(Error::InvalidCredentials);
        }
        Ok(demo_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let anchor = Utc::now();
        let a = generate_demo_transactions(100, DEMO_SEED, anchor);
        let b = generate_demo_transactions(100, DEMO_SEED, anchor);
        assert_eq!(a, b);

        let c = generate_demo_transactions(100, DEMO_SEED + 1, anchor);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generated_dataset_shape() {
        let anchor = Utc::now();
        let txs = generate_demo_transactions(DEMO_TRANSACTION_COUNT, DEMO_SEED, anchor);
        assert_eq!(txs.len(), DEMO_TRANSACTION_COUNT);

        // Initial order is date-descending
        assert!(txs.windows(2).all(|w| w[0].date >= w[1].date));

        // All dates within the last 365 days (plus the intra-day offset)
        assert!(txs.iter().all(|tx| tx.date <= anchor));
        assert!(txs.iter().all(|tx| anchor - tx.date <= Duration::days(366)));

        // Ids are unique
        let mut ids: Vec<&str> = txs.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DEMO_TRANSACTION_COUNT);
    }

    #[test]
    fn test_catalog_covers_kinds_and_currencies() {
        let accounts = generate_demo_accounts(Utc::now());
        assert!(accounts.iter().any(|a| a.kind == AccountKind::Checking));
        assert!(accounts.iter().any(|a| a.kind == AccountKind::Savings));
        assert!(accounts.iter().any(|a| a.kind == AccountKind::Credit));
        assert!(accounts.iter().any(|a| a.currency != Currency::Usd));
        for account in &accounts {
            assert!(account.validate().is_ok());
        }
    }

    #[tokio::test]
    async fn test_auth_backend_accepts_only_demo_account() {
        let backend = DemoAuthBackend::new(SimulatedDelay::off());

        let user = backend
            .authenticate(&Credentials::new(DEMO_EMAIL, DEMO_PASSWORD))
            .await
            .unwrap();
        assert_eq!(user, demo_user());

        let err = backend
            .authenticate(&Credentials::new(DEMO_EMAIL, "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }
}
