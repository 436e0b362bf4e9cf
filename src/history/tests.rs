use super::{Category, Direction, Lcg, generate_history, generate_history_on};

use std::thread;

use chrono::{Datelike, Duration, NaiveDate, Utc};

fn fixture_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

#[test]
fn test_lcg_zero_seed_does_not_collapse() {
    let mut zero_seeded = Lcg::new(0);
    let mut one_seeded = Lcg::new(1);

    let draws: Vec<f64> = (0..8).map(|_| zero_seeded.next()).collect();
    let expected: Vec<f64> = (0..8).map(|_| one_seeded.next()).collect();

    assert_eq!(draws, expected);
    assert!(draws.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn test_lcg_draws_stay_in_unit_interval() {
    let mut rng = Lcg::from_identity("user-42");

    for _ in 0..10_000 {
        let draw = rng.next();
        assert!((0.0..1.0).contains(&draw));
    }
}

#[test]
fn test_identity_seed_is_the_character_code_sum() {
    // "user-42" sums to 594.
    let mut from_identity = Lcg::from_identity("user-42");
    let mut from_seed = Lcg::new(594);

    for _ in 0..4 {
        assert_eq!(from_identity.next(), from_seed.next());
    }
}

#[test]
fn test_same_identity_yields_identical_histories() {
    let first = generate_history_on("user-42", fixture_day());
    let second = generate_history_on("user-42", fixture_day());

    assert_eq!(first, second);
}

#[test]
fn test_concurrent_generation_shares_no_state() {
    let histories = thread::scope(|scope| {
        let first = scope.spawn(|| generate_history_on("user-42", fixture_day()));
        let second = scope.spawn(|| generate_history_on("user-42", fixture_day()));
        (
            first.join().expect("generator thread panicked"),
            second.join().expect("generator thread panicked"),
        )
    });

    assert_eq!(histories.0, histories.1);
}

#[test]
fn test_distinct_identities_diverge() {
    let first = generate_history_on("user-42", fixture_day());
    let second = generate_history_on("user-43", fixture_day());

    assert_ne!(first.transactions, second.transactions);
}

#[test]
fn test_fixture_history_for_user_42() {
    let history = generate_history_on("user-42", fixture_day());

    assert_eq!(history.identity, "user-42");
    assert_eq!(history.account_mask, "****r-42");
    assert_eq!(history.currency, "USD");
    assert_eq!(history.transactions.len(), 130);
    assert_eq!(history.balance, 1488);

    let newest = &history.transactions[0];
    assert_eq!(newest.id, "tx-exp-1");
    assert_eq!(newest.date, NaiveDate::from_ymd_opt(2025, 6, 29).unwrap());
    assert_eq!(newest.amount, -45);
    assert_eq!(newest.category, Category::General);
    assert_eq!(newest.description, "Grocery Store");
    assert_eq!(newest.direction, Direction::Debit);

    let second = &history.transactions[1];
    assert_eq!(second.id, "tx-inc-2");
    assert_eq!(second.date, NaiveDate::from_ymd_opt(2025, 6, 28).unwrap());
    assert_eq!(second.amount, 1849);
    assert_eq!(second.category, Category::Income);
    assert_eq!(second.direction, Direction::Credit);

    let oldest = history.transactions.last().unwrap();
    assert_eq!(oldest.id, "tx-rent-180");
    assert_eq!(oldest.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(oldest.amount, -1200);

    let incomes: Vec<_> = history
        .transactions
        .iter()
        .filter(|t| t.category == Category::Income)
        .collect();
    assert_eq!(incomes.len(), 10);
    assert_eq!(incomes.iter().map(|t| t.amount).sum::<i64>(), 13374);

    let housing_count = history
        .transactions
        .iter()
        .filter(|t| t.category == Category::Housing)
        .count();
    assert_eq!(housing_count, 6);
}

#[test]
fn test_fixture_history_for_empty_identity() {
    let history = generate_history_on("", fixture_day());

    assert_eq!(history.account_mask, "****9999");
    assert_eq!(history.transactions.len(), 125);
    assert_eq!(history.balance, -5289);

    let newest = &history.transactions[0];
    assert_eq!(newest.id, "tx-inc-2");
    assert_eq!(newest.amount, 701);
    assert_eq!(newest.direction, Direction::Credit);
}

#[test]
fn test_balance_is_baseline_plus_amount_sum() {
    for identity in ["alice", "bob@example.com", "user-42", "x"] {
        let history = generate_history_on(identity, fixture_day());
        let sum: i64 = history.transactions.iter().map(|t| t.amount).sum();

        assert_eq!(history.balance, 1000 + sum);
    }
}

#[test]
fn test_every_transaction_falls_inside_the_window() {
    for identity in ["alice", "bob@example.com", "user-42"] {
        let today = fixture_day();
        let history = generate_history_on(identity, today);
        let window_start = today - Duration::days(180);

        for transaction in &history.transactions {
            assert!(transaction.date >= window_start && transaction.date <= today);
        }
    }
}

#[test]
fn test_housing_is_fixed_rent_on_the_first_of_the_month() {
    for identity in ["alice", "bob@example.com", "user-42"] {
        let history = generate_history_on(identity, fixture_day());

        for transaction in &history.transactions {
            if transaction.category == Category::Housing {
                assert_eq!(transaction.amount, -1200);
                assert_eq!(transaction.date.day(), 1);
                assert_eq!(transaction.direction, Direction::Debit);
            }
        }
    }
}

#[test]
fn test_amount_ranges_per_category() {
    let history = generate_history_on("user-42", fixture_day());

    for transaction in &history.transactions {
        match transaction.category {
            // floor(draw * 1500) + 500
            Category::Income => {
                assert!((500..2000).contains(&transaction.amount));
                assert_eq!(transaction.direction, Direction::Credit);
            }
            Category::Housing => assert_eq!(transaction.amount, -1200),
            // -(floor(draw * 80) + 5)
            Category::General => {
                assert!((-84..=-5).contains(&transaction.amount));
                assert_eq!(transaction.direction, Direction::Debit);
            }
        }
    }
}

#[test]
fn test_history_is_sorted_newest_first() {
    let history = generate_history_on("user-42", fixture_day());

    for pair in history.transactions.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
}

#[test]
fn test_live_window_ends_today() {
    let before = Utc::now().date_naive();
    let history = generate_history("user-42");
    let after = Utc::now().date_naive();

    for transaction in &history.transactions {
        assert!(transaction.date >= before - Duration::days(180));
        assert!(transaction.date <= after);
    }
}
