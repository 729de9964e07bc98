use std::collections::BTreeMap;

use proptest::prelude::*;
use splitly::ledger::{
    compute_balances, compute_settlements, BalanceMap, ExpenseRecord, SettlementRecord,
};
use splitly::models::{Amount, MemberId};
use uuid::Uuid;

fn member(index: usize) -> MemberId {
    MemberId::from_uuid(Uuid::from_u128(index as u128 + 1))
}

fn split_of(mask: usize, member_count: usize) -> Vec<MemberId> {
    (0..member_count)
        .filter(|idx| mask & (1 << idx) != 0)
        .map(member)
        .collect()
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        expenses in prop::collection::vec((1u64..=100_000, 0usize..6, 1usize..64), 0..30),
        settlements in prop::collection::vec((1u64..=50_000, 0usize..6, 0usize..6), 0..10),
    ) {
        let records: Vec<ExpenseRecord> = expenses
            .iter()
            .map(|&(cents, payer, mask)| {
                let mask = mask % (1 << member_count);
                let mask = if mask == 0 { 1 } else { mask };
                ExpenseRecord::new(
                    Amount::new(cents as f64 / 100.0),
                    member(payer % member_count),
                    split_of(mask, member_count),
                )
            })
            .collect();

        let payments: Vec<SettlementRecord> = settlements
            .iter()
            .filter(|&&(_, from, to)| from % member_count != to % member_count)
            .map(|&(cents, from, to)| {
                SettlementRecord::new(
                    member(from % member_count),
                    member(to % member_count),
                    Amount::new(cents as f64 / 100.0),
                )
            })
            .collect();

        let balances = compute_balances(&records, &payments).unwrap();
        prop_assert!(balances.total().value().abs() < 1e-6);
    }

    #[test]
    fn settlement_shifts_only_its_endpoints(
        cents in 1u64..=100_000,
        paid in 1u64..=100_000,
    ) {
        let (a, b, c) = (member(0), member(1), member(2));
        let expense = ExpenseRecord::new(Amount::new(cents as f64 / 100.0), a, [a, b, c]);
        let payment = SettlementRecord::new(b, a, Amount::new(paid as f64 / 100.0));

        let before = compute_balances(std::slice::from_ref(&expense), &[]).unwrap();
        let after = compute_balances(&[expense], &[payment]).unwrap();

        let z = paid as f64 / 100.0;
        prop_assert!((after.get(b).value() - before.get(b).value() - z).abs() < 1e-9);
        prop_assert!((after.get(a).value() - before.get(a).value() + z).abs() < 1e-9);
        prop_assert_eq!(after.get(c), before.get(c));
    }

    #[test]
    fn matcher_reconstructs_balances(
        quarters in prop::collection::vec(-400i64..=400, 1..8),
    ) {
        // Quarter units are exact in binary floating point
        let mut values = quarters.clone();
        let sum: i64 = values.iter().sum();
        values.push(-sum);

        let balances: BalanceMap = values
            .iter()
            .enumerate()
            .map(|(idx, q)| (member(idx), Amount::new(*q as f64 * 0.25)))
            .collect();

        let transfers = compute_settlements(&balances).unwrap();

        let mut received: BTreeMap<MemberId, f64> = BTreeMap::new();
        let mut paid: BTreeMap<MemberId, f64> = BTreeMap::new();
        for t in &transfers {
            prop_assert!(t.amount.value() > 0.01);
            prop_assert!(t.from_member != t.to_member);
            *paid.entry(t.from_member).or_default() += t.amount.value();
            *received.entry(t.to_member).or_default() += t.amount.value();
        }

        for (id, balance) in balances.iter() {
            let value = balance.value();
            if value > 0.01 {
                let got = received.get(&id).copied().unwrap_or(0.0);
                prop_assert!((got - value).abs() <= 0.01);
                prop_assert!(!paid.contains_key(&id));
            } else if value < -0.01 {
                let gave = paid.get(&id).copied().unwrap_or(0.0);
                prop_assert!((gave + value).abs() <= 0.01);
                prop_assert!(!received.contains_key(&id));
            } else {
                prop_assert!(!paid.contains_key(&id) && !received.contains_key(&id));
            }
        }

        let creditors = balances.creditor_count();
        let debtors = balances.debtor_count();
        if creditors == 0 || debtors == 0 {
            prop_assert!(transfers.is_empty());
        } else {
            prop_assert!(transfers.len() <= creditors + debtors - 1);
        }
    }

    #[test]
    fn settled_balances_need_no_transfers(
        dust in prop::collection::vec(-100i64..=100, 0..8),
    ) {
        let balances: BalanceMap = dust
            .iter()
            .enumerate()
            .map(|(idx, d)| (member(idx), Amount::new(*d as f64 / 10_000.0)))
            .collect();

        prop_assert!(compute_settlements(&balances).unwrap().is_empty());
    }

    #[test]
    fn matcher_is_deterministic(
        quarters in prop::collection::vec(-400i64..=400, 1..8),
    ) {
        let mut values = quarters;
        let sum: i64 = values.iter().sum();
        values.push(-sum);

        let balances: BalanceMap = values
            .iter()
            .enumerate()
            .map(|(idx, q)| (member(idx), Amount::new(*q as f64 * 0.25)))
            .collect();

        prop_assert_eq!(
            compute_settlements(&balances).unwrap(),
            compute_settlements(&balances.clone()).unwrap()
        );
    }
}

#[test]
fn shared_dinner_end_to_end() {
    let (a, b, c) = (member(0), member(1), member(2));
    let expenses = [ExpenseRecord::new(Amount::new(90.0), a, [a, b, c])];

    let balances = compute_balances(&expenses, &[]).unwrap();
    assert_eq!(balances.get(a).value(), 60.0);
    assert_eq!(balances.get(b).value(), -30.0);
    assert_eq!(balances.get(c).value(), -30.0);

    let transfers = compute_settlements(&balances).unwrap();
    assert_eq!(transfers.len(), 2);
    for (t, debtor) in transfers.iter().zip([b, c]) {
        assert_eq!(t.from_member, debtor);
        assert_eq!(t.to_member, a);
        assert_eq!(t.amount.value(), 30.0);
    }
}

#[test]
fn offsetting_expenses_end_to_end() {
    let (a, b) = (member(0), member(1));
    let expenses = [
        ExpenseRecord::new(Amount::new(100.0), a, [a, b]),
        ExpenseRecord::new(Amount::new(40.0), b, [a, b]),
    ];

    let balances = compute_balances(&expenses, &[]).unwrap();
    let transfers = compute_settlements(&balances).unwrap();

    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].from_member, b);
    assert_eq!(transfers[0].to_member, a);
    assert_eq!(transfers[0].amount.value(), 30.0);

    let paid_back = SettlementRecord::new(b, a, transfers[0].amount);
    let after = compute_balances(&expenses, &[paid_back]).unwrap();
    assert!(after.is_settled());
    assert!(compute_settlements(&after).unwrap().is_empty());
}
