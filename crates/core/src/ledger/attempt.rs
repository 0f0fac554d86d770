//! State machine for a single expense-creation attempt.
//!
//! Wallet-paid attempts progress through:
//! - Started → BalanceChecked → Deducted → RecordInserted → Committed
//!
//! Other attempts skip the wallet:
//! - Started → RecordInserted → Committed
//!
//! Any non-terminal state may move to RolledBack. Committed and RolledBack
//! are terminal.

use std::fmt;

use super::error::LedgerError;
use super::plan::ExpensePlan;

/// Progress of one expense-creation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptState {
    /// Transaction opened, nothing written.
    Started,
    /// Wallet located and found to cover the amount.
    BalanceChecked,
    /// Wallet balance decremented inside the transaction.
    Deducted,
    /// Record row written inside the transaction.
    RecordInserted,
    /// Transaction committed.
    Committed,
    /// Transaction rolled back; no effect is visible.
    RolledBack,
}

impl AttemptState {
    /// Returns the string representation of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::BalanceChecked => "balance_checked",
            Self::Deducted => "deducted",
            Self::RecordInserted => "record_inserted",
            Self::Committed => "committed",
            Self::RolledBack => "rolled_back",
        }
    }

    /// Returns true if no transition leaves this state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed | Self::RolledBack)
    }

    /// Check if a transition is valid for an attempt that does (or does not)
    /// pay from the wallet.
    #[must_use]
    pub const fn can_transition(from: Self, to: Self, uses_wallet: bool) -> bool {
        if from.is_terminal() {
            return false;
        }
        match (from, to) {
            (_, Self::RolledBack) => true,
            (Self::Started, Self::BalanceChecked)
            | (Self::BalanceChecked, Self::Deducted)
            | (Self::Deducted, Self::RecordInserted) => uses_wallet,
            (Self::Started, Self::RecordInserted) => !uses_wallet,
            (Self::RecordInserted, Self::Committed) => true,
            _ => false,
        }
    }
}

impl fmt::Display for AttemptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks one attempt through its states.
#[derive(Debug, Clone)]
pub struct ExpenseAttempt {
    uses_wallet: bool,
    state: AttemptState,
    history: Vec<AttemptState>,
}

impl ExpenseAttempt {
    /// Starts tracking an attempt to apply `plan`.
    #[must_use]
    pub fn start(plan: &ExpensePlan) -> Self {
        Self::with_wallet(plan.uses_wallet())
    }

    /// Starts tracking an attempt with an explicit wallet flag.
    #[must_use]
    pub fn with_wallet(uses_wallet: bool) -> Self {
        Self {
            uses_wallet,
            state: AttemptState::Started,
            history: vec![AttemptState::Started],
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> AttemptState {
        self.state
    }

    /// Every state visited, in order.
    #[must_use]
    pub fn history(&self) -> &[AttemptState] {
        &self.history
    }

    /// Returns true if a wallet deduction is in effect inside the open
    /// transaction, so abandoning the attempt needs an explicit rollback.
    #[must_use]
    pub fn requires_compensation(&self) -> bool {
        self.uses_wallet
            && matches!(self.state, AttemptState::Deducted | AttemptState::RecordInserted)
    }

    /// Moves to `to`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidTransition` if the move is not allowed.
    pub fn advance(&mut self, to: AttemptState) -> Result<AttemptState, LedgerError> {
        if !AttemptState::can_transition(self.state, to, self.uses_wallet) {
            return Err(LedgerError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        self.state = to;
        self.history.push(to);
        Ok(to)
    }

    /// Marks the attempt rolled back.
    ///
    /// Returns whether compensation was required, i.e. whether a deduction
    /// had already been applied when the attempt failed.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidTransition` if the attempt already ended.
    pub fn roll_back(&mut self) -> Result<bool, LedgerError> {
        let compensated = self.requires_compensation();
        self.advance(AttemptState::RolledBack)?;
        Ok(compensated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AttemptState::{BalanceChecked, Committed, Deducted, RecordInserted, RolledBack, Started};

    #[test]
    fn test_wallet_happy_path() {
        let mut attempt = ExpenseAttempt::with_wallet(true);
        for state in [BalanceChecked, Deducted, RecordInserted, Committed] {
            attempt.advance(state).unwrap();
        }
        assert_eq!(
            attempt.history(),
            &[Started, BalanceChecked, Deducted, RecordInserted, Committed]
        );
    }

    #[test]
    fn test_non_wallet_happy_path() {
        let mut attempt = ExpenseAttempt::with_wallet(false);
        attempt.advance(RecordInserted).unwrap();
        attempt.advance(Committed).unwrap();
        assert_eq!(attempt.history(), &[Started, RecordInserted, Committed]);
    }

    #[test]
    fn test_non_wallet_cannot_deduct() {
        let mut attempt = ExpenseAttempt::with_wallet(false);
        assert!(matches!(
            attempt.advance(BalanceChecked),
            Err(LedgerError::InvalidTransition { from: Started, to: BalanceChecked })
        ));
        assert_eq!(attempt.state(), Started);
    }

    #[test]
    fn test_wallet_cannot_skip_deduction() {
        let mut attempt = ExpenseAttempt::with_wallet(true);
        assert!(attempt.advance(RecordInserted).is_err());
        attempt.advance(BalanceChecked).unwrap();
        assert!(attempt.advance(Committed).is_err());
    }

    #[test]
    fn test_rollback_after_deduction_requires_compensation() {
        let mut attempt = ExpenseAttempt::with_wallet(true);
        attempt.advance(BalanceChecked).unwrap();
        assert!(!attempt.requires_compensation());
        attempt.advance(Deducted).unwrap();
        assert!(attempt.requires_compensation());
        assert!(attempt.roll_back().unwrap());
        assert_eq!(attempt.state(), RolledBack);
    }

    #[test]
    fn test_rollback_before_deduction_needs_no_compensation() {
        let mut attempt = ExpenseAttempt::with_wallet(true);
        assert!(!attempt.roll_back().unwrap());
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut attempt = ExpenseAttempt::with_wallet(false);
        attempt.advance(RecordInserted).unwrap();
        attempt.advance(Committed).unwrap();
        assert!(attempt.roll_back().is_err());
        assert_eq!(attempt.state(), Committed);
    }
}
