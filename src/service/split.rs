use crate::db::models::{Expense, PayerTotal};
use std::collections::BTreeMap;

/// Owed share per payer, keyed and iterated in payer order.
pub type SplitShares = BTreeMap<String, f64>;

/// Divide each payer's total by the number of comma-separated tokens in
/// their `split_with`.
///
/// `"".split(',')` yields one empty token, so an empty participant list
/// divides by one.
pub fn compute_split(totals: &[PayerTotal]) -> SplitShares {
    totals.iter().fold(SplitShares::new(), |mut shares, row| {
        let participants = row.split_with.split(',').count();
        *shares.entry(row.payer.clone()).or_insert(0.0) += row.total_amount / participants as f64;
        shares
    })
}

/// Sum of `amount` across all expenses; positive zero when there are none.
pub fn total_amount(expenses: &[Expense]) -> f64 {
    // f64's Sum starts at -0.0, which formats as "-0.00"
    expenses.iter().fold(0.0, |acc, e| acc + e.amount)
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, amount: f64) -> Expense {
        Expense {
            id,
            description: format!("expense {id}"),
            amount,
            payer: "alice".to_string(),
            split_with: "bob".to_string(),
        }
    }

    #[test]
    fn splits_evenly_between_listed_participants() {
        let shares = compute_split(&[PayerTotal::new("alice", "bob,carol", 30.0)]);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares["alice"], 15.0);
    }

    #[test]
    fn empty_split_with_counts_as_one_participant() {
        let shares = compute_split(&[PayerTotal::new("alice", "", 10.0)]);
        assert_eq!(shares["alice"], 10.0);
    }

    #[test]
    fn each_payer_gets_its_own_share() {
        let shares = compute_split(&[
            PayerTotal::new("alice", "bob", 20.0),
            PayerTotal::new("carol", "dave,erin", 30.0),
        ]);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares["alice"], 20.0);
        assert_eq!(shares["carol"], 15.0);
    }

    #[test]
    fn repeated_payer_rows_accumulate() {
        let shares = compute_split(&[
            PayerTotal::new("alice", "bob,carol", 30.0),
            PayerTotal::new("alice", "dave", 5.0),
        ]);
        assert_eq!(shares["alice"], 20.0);
    }

    #[test]
    fn payer_token_is_counted_like_any_other() {
        let shares = compute_split(&[PayerTotal::new("alice", "alice,bob,carol,dave", 40.0)]);
        assert_eq!(shares["alice"], 10.0);
    }

    #[test]
    fn no_rows_no_shares() {
        assert!(compute_split(&[]).is_empty());
    }

    #[test]
    fn total_of_nothing_is_zero() {
        let total = total_amount(&[]);
        assert_eq!(total.to_bits(), 0.0f64.to_bits());
        assert_eq!(format!("{:.2}", round_cents(total)), "0.00");
    }

    #[test]
    fn total_sums_every_amount() {
        let expenses = [expense(1, 12.5), expense(2, 7.25), expense(3, -2.0)];
        assert_eq!(total_amount(&expenses), 17.75);
    }

    #[test]
    fn round_cents_keeps_two_decimals() {
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_cents(10.0 / 3.0), 3.33);
        assert_eq!(round_cents(2.675_1), 2.68);
    }
}
