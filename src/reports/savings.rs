//! Savings goal view
//!
//! Compares a savings goal against the amount saved so far. Both values
//! arrive as raw text from input fields; an edit that does not parse keeps
//! the previously computed remaining amount instead of resetting it.

use crate::models::Money;

/// Amount still needed to reach a savings goal, clamped at zero
///
/// Returns `None` when either field fails to parse as a money amount;
/// callers keep their previous value in that case. Exceeding the goal
/// reports zero remaining, never a negative amount.
pub fn remaining_savings(goal_text: &str, saved_text: &str) -> Option<Money> {
    let goal = Money::parse(goal_text).ok()?;
    let saved = Money::parse(saved_text).ok()?;
    Some((goal - saved).max(Money::zero()))
}

/// Monthly savings tracker state
///
/// Holds the two raw input fields and the last successfully computed
/// remaining amount. This state belongs to a view and lives only as long
/// as the view does; it is not part of the expense store.
#[derive(Debug, Clone)]
pub struct MonthlySaver {
    goal_text: String,
    saved_text: String,
    remaining: Money,
}

impl MonthlySaver {
    /// Start with empty fields and zero remaining
    pub fn new() -> Self {
        let mut saver = Self {
            goal_text: String::new(),
            saved_text: String::new(),
            remaining: Money::zero(),
        };
        saver.recompute();
        saver
    }

    /// Raw goal field contents
    pub fn goal_text(&self) -> &str {
        &self.goal_text
    }

    /// Raw saved-so-far field contents
    pub fn saved_text(&self) -> &str {
        &self.saved_text
    }

    /// Last successfully computed remaining amount
    pub fn remaining(&self) -> Money {
        self.remaining
    }

    /// Replace the goal field and recompute
    ///
    /// Editing either field recomputes; a goal edit alone must never leave
    /// the remaining amount stale.
    pub fn set_goal_text(&mut self, text: impl Into<String>) {
        self.goal_text = text.into();
        self.recompute();
    }

    /// Replace the saved-so-far field and recompute
    pub fn set_saved_text(&mut self, text: impl Into<String>) {
        self.saved_text = text.into();
        self.recompute();
    }

    fn recompute(&mut self) {
        if let Some(remaining) = remaining_savings(&self.goal_text, &self.saved_text) {
            self.remaining = remaining;
        }
    }
}

impl Default for MonthlySaver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== remaining_savings ====================

    #[test]
    fn test_remaining_basic() {
        assert_eq!(
            remaining_savings("100", "40"),
            Some(Money::from_cents(6000))
        );
    }

    #[test]
    fn test_remaining_with_decimals() {
        assert_eq!(
            remaining_savings("100.50", "40.25"),
            Some(Money::from_cents(6025))
        );
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        assert_eq!(remaining_savings("100", "150"), Some(Money::zero()));
        assert_eq!(remaining_savings("100", "100"), Some(Money::zero()));
    }

    #[test]
    fn test_remaining_unparseable_is_none() {
        assert_eq!(remaining_savings("", "40"), None);
        assert_eq!(remaining_savings("100", ""), None);
        assert_eq!(remaining_savings("abc", "40"), None);
        assert_eq!(remaining_savings("100", "4o"), None);
    }

    #[test]
    fn test_remaining_negative_saved_widens_gap() {
        assert_eq!(
            remaining_savings("100", "-50"),
            Some(Money::from_cents(15000))
        );
    }

    // ==================== MonthlySaver ====================

    #[test]
    fn test_saver_starts_at_zero() {
        let saver = MonthlySaver::new();
        assert_eq!(saver.goal_text(), "");
        assert_eq!(saver.saved_text(), "");
        assert_eq!(saver.remaining(), Money::zero());
    }

    #[test]
    fn test_saver_computes_once_both_fields_parse() {
        let mut saver = MonthlySaver::new();
        saver.set_goal_text("500");
        // Only one field set; still the initial zero
        assert_eq!(saver.remaining(), Money::zero());

        saver.set_saved_text("120");
        assert_eq!(saver.remaining(), Money::from_cents(38000));
    }

    #[test]
    fn test_saver_keeps_value_on_bad_edit() {
        let mut saver = MonthlySaver::new();
        saver.set_goal_text("500");
        saver.set_saved_text("120");
        assert_eq!(saver.remaining(), Money::from_cents(38000));

        saver.set_saved_text("12o");
        assert_eq!(saver.remaining(), Money::from_cents(38000));

        saver.set_goal_text("");
        assert_eq!(saver.remaining(), Money::from_cents(38000));
    }

    #[test]
    fn test_saver_recovers_after_bad_edit() {
        let mut saver = MonthlySaver::new();
        saver.set_goal_text("500");
        saver.set_saved_text("120");
        saver.set_saved_text("oops");
        saver.set_saved_text("200");
        assert_eq!(saver.remaining(), Money::from_cents(30000));
    }

    #[test]
    fn test_remaining_updates_when_goal_changes() {
        // A goal edit on its own must refresh the remaining amount, the
        // same as a saved-so-far edit would
        let mut saver = MonthlySaver::new();
        saver.set_goal_text("500");
        saver.set_saved_text("120");
        assert_eq!(saver.remaining(), Money::from_cents(38000));

        saver.set_goal_text("800");
        assert_eq!(saver.remaining(), Money::from_cents(68000));
    }

    #[test]
    fn test_saver_goal_exceeded_shows_zero() {
        let mut saver = MonthlySaver::new();
        saver.set_goal_text("100");
        saver.set_saved_text("250");
        assert_eq!(saver.remaining(), Money::zero());
    }
}
