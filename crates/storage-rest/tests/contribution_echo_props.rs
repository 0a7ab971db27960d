//! A created contribution comes back from the store carrying exactly what was
//! submitted, whatever the amount and ids.

use fundboard_core::contributions::{Contribution, ContributionStatus, NewContribution};
use fundboard_storage_rest::contributions::{ContributionDB, NewContributionDB};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Amounts with two decimal places, up to ten million.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn inserted_row_echoes_inputs(
        amount in amount_strategy(),
        project_id in "[a-z0-9-]{1,36}",
        member_id in "[a-z0-9-]{1,36}",
        payment_intent_id in "pi_[A-Za-z0-9]{1,24}",
    ) {
        let new_contribution =
            NewContribution::new(amount, &project_id, &member_id, &payment_intent_id);
        let row = NewContributionDB::from(new_contribution);

        // The store returns the sent row plus its generated columns.
        let mut stored = serde_json::to_value(&row).unwrap();
        stored["id"] = serde_json::json!("c1");
        stored["created_at"] = serde_json::json!("2024-05-01T10:00:00+00:00");
        let echoed: ContributionDB = serde_json::from_value(stored).unwrap();
        let contribution = Contribution::from(echoed);

        prop_assert_eq!(contribution.amount, amount);
        prop_assert_eq!(&contribution.project_id, &project_id);
        prop_assert_eq!(&contribution.member_id, &member_id);
        prop_assert_eq!(&contribution.payment_id, &payment_intent_id);
        prop_assert_eq!(contribution.status, ContributionStatus::Completed);
    }
}
