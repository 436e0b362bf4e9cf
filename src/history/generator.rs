use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::history::{AccountHistory, Category, Direction, Lcg, SyntheticTransaction};

const WINDOW_DAYS: i64 = 180;
const BASELINE_BALANCE: i64 = 1000;
const HOUSING_AMOUNT: i64 = -1200;

const INCOME_DESCRIPTION: &str = "Freelance Payout / Gig Settlement";
const HOUSING_DESCRIPTION: &str = "Monthly Rent Payment";
const GROCERY_DESCRIPTION: &str = "Grocery Store";
const DINING_DESCRIPTION: &str = "Coffee / Dining";

/// Generates the synthetic 181-day history for an identity, ending on the
/// current UTC calendar date.
///
/// Pure and total: the same identity always yields the same history (for a
/// given day), nothing is persisted, and no external randomness is consumed.
pub fn generate_history(identity: &str) -> AccountHistory {
    generate_history_on(identity, Utc::now().date_naive())
}

/// Same as [`generate_history`] with the end of the window pinned, which is
/// what every fixture test uses.
///
/// The per-day draw order below is fixed; each `rng.next()` call advances
/// the generator state, so reordering the branches rewrites every history.
pub fn generate_history_on(identity: &str, today: NaiveDate) -> AccountHistory {
    let mut rng = Lcg::from_identity(identity);
    let mut transactions = Vec::new();

    for days_ago in (0..=WINDOW_DAYS).rev() {
        let date = today - Duration::days(days_ago);

        // Irregular income lumps, landing roughly three times a month.
        if rng.next() > 0.95 {
            let amount = (rng.next() * 1500.0).floor() as i64 + 500;
            transactions.push(SyntheticTransaction {
                id: format!("tx-inc-{days_ago}"),
                date,
                amount,
                category: Category::Income,
                description: INCOME_DESCRIPTION,
                direction: Direction::Credit,
            });
        }

        // Rent on the first of the month; date-driven, consumes no draw.
        if date.day() == 1 {
            transactions.push(SyntheticTransaction {
                id: format!("tx-rent-{days_ago}"),
                date,
                amount: HOUSING_AMOUNT,
                category: Category::Housing,
                description: HOUSING_DESCRIPTION,
                direction: Direction::Debit,
            });
        }

        // Variable daily spend on most days.
        if rng.next() > 0.4 {
            let amount = -((rng.next() * 80.0).floor() as i64 + 5);
            let description = if rng.next() > 0.5 {
                GROCERY_DESCRIPTION
            } else {
                DINING_DESCRIPTION
            };
            transactions.push(SyntheticTransaction {
                id: format!("tx-exp-{days_ago}"),
                date,
                amount,
                category: Category::General,
                description,
                direction: Direction::Debit,
            });
        }
    }

    // Newest first; the stable sort keeps per-day emission order intact.
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    let balance = BASELINE_BALANCE + transactions.iter().map(|t| t.amount).sum::<i64>();

    AccountHistory {
        identity: identity.to_string(),
        account_mask: mask_identity(identity),
        currency: "USD",
        balance,
        transactions,
    }
}

/// `****` plus the last four characters of the identity, with a fixed
/// placeholder tail for an empty identity.
fn mask_identity(identity: &str) -> String {
    if identity.is_empty() {
        return "****9999".to_string();
    }

    let chars: Vec<char> = identity.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();

    format!("****{tail}")
}
