//! Game configuration options.

use crate::hand::AceRule;

/// Configuration options for a blackjack session.
///
/// The dealer's drawing rule is fixed (see [`crate::dealer::DealerPolicy`]);
/// only scoring can be tuned. Use the builder pattern to customize options:
///
/// ```
/// use bjcore::{AceRule, GameOptions};
///
/// let options = GameOptions::default().with_ace_rule(AceRule::Standard);
/// assert_eq!(options.ace_rule, AceRule::Standard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// How aces are valued when scoring hands.
    pub ace_rule: AceRule,
}

impl GameOptions {
    /// Sets the ace scoring rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{AceRule, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// assert_eq!(options.ace_rule, AceRule::SingleFlex);
    ///
    /// let options = options.with_ace_rule(AceRule::Standard);
    /// assert_eq!(options.ace_rule, AceRule::Standard);
    /// ```
    #[must_use]
    pub const fn with_ace_rule(mut self, ace_rule: AceRule) -> Self {
        self.ace_rule = ace_rule;
        self
    }
}
