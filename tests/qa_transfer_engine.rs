use account_transfer::{Account, TransferEngine, TransferError};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Helper to create the two accounts used by most scenarios
fn pair(from_balance: i64, to_balance: i64) -> (Account, Account) {
    (
        Account::new("A", Decimal::from(from_balance)),
        Account::new("B", Decimal::from(to_balance)),
    )
}

#[test]
fn qa_tc_transfer_30_of_100_to_50() {
    let engine = TransferEngine::new();
    let (mut from, mut to) = pair(100, 50);

    let result = engine
        .execute(&mut from, &mut to, Decimal::from(30))
        .expect("valid transfer must apply");

    assert_eq!(from.balance(), Decimal::from(70));
    assert_eq!(to.balance(), Decimal::from(80));
    assert_eq!(result.from.balance(), Decimal::from(70));
    assert_eq!(result.to.balance(), Decimal::from(80));
    assert_eq!(result.record.amount, Decimal::from(30));
}

#[test]
fn qa_tc_transfer_150_of_100_is_insufficient() {
    let engine = TransferEngine::new();
    let (mut from, mut to) = pair(100, 50);

    let err = engine
        .execute(&mut from, &mut to, Decimal::from(150))
        .unwrap_err();

    assert_eq!(err, TransferError::InsufficientFunds);
    assert_eq!(from.balance(), Decimal::from(100));
    assert_eq!(to.balance(), Decimal::from(50));
}

#[test]
fn qa_tc_non_positive_amount_mutates_nothing() {
    let engine = TransferEngine::new();
    let (mut from, mut to) = pair(100, 50);

    assert_eq!(
        engine.execute(&mut from, &mut to, Decimal::ZERO),
        Err(TransferError::InvalidAmount)
    );
    assert_eq!(
        engine.execute(&mut from, &mut to, Decimal::from(-30)),
        Err(TransferError::InvalidAmount)
    );
    assert_eq!(
        engine.execute_f64(&mut from, &mut to, f64::NAN),
        Err(TransferError::InvalidAmount)
    );

    assert_eq!(from.balance(), Decimal::from(100));
    assert_eq!(to.balance(), Decimal::from(50));
    assert_eq!(from.version(), 0);
    assert_eq!(to.version(), 0);
}

#[test]
fn qa_tc_same_id_mutates_nothing() {
    let engine = TransferEngine::new();
    // Two distinct values that name the same account
    let mut from = Account::new("A", Decimal::from(100));
    let mut to = Account::new("A", Decimal::from(100));

    assert_eq!(
        engine.execute(&mut from, &mut to, Decimal::from(10)),
        Err(TransferError::SameAccount)
    );
    assert_eq!(from.balance(), Decimal::from(100));
    assert_eq!(to.balance(), Decimal::from(100));
}

#[test]
fn qa_tc_repeated_call_applies_twice() {
    let engine = TransferEngine::new();
    let (mut from, mut to) = pair(100, 50);

    engine.execute(&mut from, &mut to, Decimal::from(30)).unwrap();
    engine.execute(&mut from, &mut to, Decimal::from(30)).unwrap();

    // No deduplication: the second identical call moves funds again
    assert_eq!(from.balance(), Decimal::from(40));
    assert_eq!(to.balance(), Decimal::from(110));
    assert_eq!(from.version(), 2);
    assert_eq!(to.version(), 2);
}

#[test]
fn qa_tc_record_timestamp_within_call() {
    let engine = TransferEngine::new();
    let (mut from, mut to) = pair(100, 50);

    let before = chrono::Utc::now();
    let result = engine.execute(&mut from, &mut to, Decimal::ONE).unwrap();
    let after = chrono::Utc::now();

    assert!(result.record.timestamp >= before);
    assert!(result.record.timestamp <= after);
}

proptest! {
    /// Conservation: a valid transfer moves exactly `amount` and the sum of
    /// both balances is unchanged. An invalid one changes nothing.
    #[test]
    fn qa_prop_conservation(
        from_cents in 0i64..10_000_000,
        to_cents in 0i64..10_000_000,
        amount_cents in -1_000i64..20_000_000,
    ) {
        let engine = TransferEngine::new();
        let from_start = Decimal::new(from_cents, 2);
        let to_start = Decimal::new(to_cents, 2);
        let amount = Decimal::new(amount_cents, 2);
        let mut from = Account::new("A", from_start);
        let mut to = Account::new("B", to_start);

        let outcome = engine.execute(&mut from, &mut to, amount);

        prop_assert_eq!(from.balance() + to.balance(), from_start + to_start);
        if amount > Decimal::ZERO && amount <= from_start {
            prop_assert!(outcome.is_ok());
            prop_assert_eq!(from.balance(), from_start - amount);
            prop_assert_eq!(to.balance(), to_start + amount);
        } else {
            prop_assert!(outcome.is_err());
            prop_assert_eq!(from.balance(), from_start);
            prop_assert_eq!(to.balance(), to_start);
        }
    }
}
