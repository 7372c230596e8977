//! Reduction of a raw punch cell to its check-in / check-out pair.

/// First and last punch of a day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReducedPunch {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

impl ReducedPunch {
    /// Both punches present.
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// At least one punch present.
    pub fn has_any(&self) -> bool {
        self.check_in.is_some() || self.check_out.is_some()
    }

    pub fn check_in(&self) -> Option<&str> {
        self.check_in.as_deref()
    }

    pub fn check_out(&self) -> Option<&str> {
        self.check_out.as_deref()
    }
}

/// Split a raw cell into its punch tokens, in recorded order.
///
/// Lines are trimmed and blank lines dropped. Tokens are kept as opaque
/// strings: validating them is the job of the hours calculator.
pub fn split_punches(raw: Option<&str>) -> Vec<&str> {
    match raw {
        None => Vec::new(),
        Some(text) => text
            .lines()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect(),
    }
}

/// Reduce a raw cell to (check-in, check-out).
///
/// - no token → (None, None)
/// - one token → (token, None)
/// - two or more → (first, last); intermediate punches are dropped
pub fn parse_punches(raw: Option<&str>) -> ReducedPunch {
    let tokens = split_punches(raw);

    match tokens.as_slice() {
        [] => ReducedPunch::default(),
        [only] => ReducedPunch {
            check_in: Some((*only).to_string()),
            check_out: None,
        },
        [first, .., last] => ReducedPunch {
            check_in: Some((*first).to_string()),
            check_out: Some((*last).to_string()),
        },
    }
}
