//! Sequence tokens for overlapping polls.
//!
//! Polls are never cancelled, so responses can land in any order. Each poll
//! takes a token before its request goes out; a response is rendered only if
//! no newer poll has been rendered already.

use std::cell::Cell;

/// Identifies one poll request. Later requests get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollToken(u64);

impl PollToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues tokens and remembers the newest rendered one.
#[derive(Debug, Default)]
pub struct PollSequence {
    issued: Cell<u64>,
    rendered: Cell<u64>,
}

impl PollSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the token for a poll about to be sent.
    pub fn issue(&self) -> PollToken {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        PollToken(next)
    }

    /// Claim the display for `token`.
    ///
    /// Returns `false` when a newer poll has already been rendered, in which
    /// case the response must be dropped.
    pub fn accept(&self, token: PollToken) -> bool {
        if token.0 <= self.rendered.get() {
            return false;
        }
        self.rendered.set(token.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_issue_increasing_tokens() {
        let sequence = PollSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(second > first);
        assert_eq!(first.value(), 1);
    }

    #[test]
    fn should_accept_responses_in_order() {
        let sequence = PollSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(sequence.accept(first));
        assert!(sequence.accept(second));
    }

    #[test]
    fn should_reject_response_older_than_rendered_one() {
        let sequence = PollSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(sequence.accept(second));
        assert!(!sequence.accept(first));
    }

    #[test]
    fn should_accept_older_token_when_newer_one_failed() {
        let sequence = PollSequence::new();
        let first = sequence.issue();
        let _failed = sequence.issue();
        assert!(sequence.accept(first));
    }
}
