//! Property-based tests for the expense attempt state machine.

use proptest::prelude::*;

use super::attempt::{AttemptState, ExpenseAttempt};

fn arb_state() -> impl Strategy<Value = AttemptState> {
    prop_oneof![
        Just(AttemptState::Started),
        Just(AttemptState::BalanceChecked),
        Just(AttemptState::Deducted),
        Just(AttemptState::RecordInserted),
        Just(AttemptState::Committed),
        Just(AttemptState::RolledBack),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// No transition leaves a terminal state.
    #[test]
    fn prop_terminal_states_have_no_exits(
        to in arb_state(),
        uses_wallet in any::<bool>(),
    ) {
        for from in [AttemptState::Committed, AttemptState::RolledBack] {
            prop_assert!(!AttemptState::can_transition(from, to, uses_wallet));
        }
    }

    /// Any sequence of requested moves keeps the history a valid path, and a
    /// non-wallet attempt never reaches a wallet state.
    #[test]
    fn prop_history_is_always_a_valid_path(
        moves in prop::collection::vec(arb_state(), 0..12),
        uses_wallet in any::<bool>(),
    ) {
        let mut attempt = ExpenseAttempt::with_wallet(uses_wallet);
        for to in moves {
            let before = attempt.state();
            match attempt.advance(to) {
                Ok(_) => prop_assert_eq!(attempt.state(), to),
                Err(_) => prop_assert_eq!(attempt.state(), before),
            }
        }

        let history = attempt.history();
        prop_assert_eq!(history[0], AttemptState::Started);
        for pair in history.windows(2) {
            prop_assert!(AttemptState::can_transition(pair[0], pair[1], uses_wallet));
        }
        if !uses_wallet {
            prop_assert!(!history.contains(&AttemptState::BalanceChecked));
            prop_assert!(!history.contains(&AttemptState::Deducted));
        }
    }

    /// Compensation is owed exactly when a deduction is live.
    #[test]
    fn prop_compensation_only_after_deduction(
        steps in 0usize..4,
    ) {
        let path = [
            AttemptState::BalanceChecked,
            AttemptState::Deducted,
            AttemptState::RecordInserted,
        ];
        let mut attempt = ExpenseAttempt::with_wallet(true);
        for state in path.iter().take(steps.min(path.len())) {
            attempt.advance(*state).unwrap();
        }
        let deducted = attempt.history().contains(&AttemptState::Deducted);
        prop_assert_eq!(attempt.roll_back().unwrap(), deducted);
    }
}
