//! Revision or transaction selector

use crate::error::{LookError, LookResult};
use serde::Serialize;
use std::fmt;

/// Which snapshot of the repository a session looks at
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    /// A committed revision (`-r N`)
    Revision(u64),
    /// An uncommitted transaction, as seen from pre-commit hooks (`-t NAME`)
    Transaction(String),
}

impl Selector {
    /// Build a selector from optional command-line style arguments.
    ///
    /// Returns `Ok(None)` when neither is given so the caller can decide on
    /// a default.
    pub fn from_options(
        revision: Option<u64>,
        transaction: Option<String>,
    ) -> LookResult<Option<Self>> {
        match (revision, transaction) {
            (Some(_), Some(_)) => Err(LookError::SelectorConflict),
            (Some(rev), None) => Ok(Some(Self::Revision(rev))),
            (None, Some(txn)) => Ok(Some(Self::Transaction(txn))),
            (None, None) => Ok(None),
        }
    }

    /// The flag/value pair passed to svnlook
    pub fn to_args(&self) -> [String; 2] {
        match self {
            Self::Revision(rev) => ["-r".to_string(), rev.to_string()],
            Self::Transaction(txn) => ["-t".to_string(), txn.clone()],
        }
    }

    /// Revision number, if this selects a revision
    pub fn revision(&self) -> Option<u64> {
        match self {
            Self::Revision(rev) => Some(*rev),
            Self::Transaction(_) => None,
        }
    }

    /// Transaction name, if this selects a transaction
    pub fn transaction(&self) -> Option<&str> {
        match self {
            Self::Revision(_) => None,
            Self::Transaction(txn) => Some(txn),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revision(rev) => write!(f, "r{}", rev),
            Self::Transaction(txn) => write!(f, "txn {}", txn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_args() {
        assert_eq!(Selector::Revision(42).to_args(), ["-r", "42"]);
        assert_eq!(Selector::Revision(42).revision(), Some(42));
        assert_eq!(Selector::Revision(42).transaction(), None);
    }

    #[test]
    fn transaction_args() {
        let selector = Selector::Transaction("17-a".to_string());
        assert_eq!(selector.to_args(), ["-t", "17-a"]);
        assert_eq!(selector.transaction(), Some("17-a"));
        assert_eq!(selector.revision(), None);
    }

    #[test]
    fn from_options_rejects_both() {
        let err = Selector::from_options(Some(1), Some("1-1".to_string())).unwrap_err();
        assert!(matches!(err, LookError::SelectorConflict));
    }

    #[test]
    fn from_options_allows_neither() {
        assert_eq!(Selector::from_options(None, None).unwrap(), None);
        assert_eq!(
            Selector::from_options(Some(9), None).unwrap(),
            Some(Selector::Revision(9))
        );
    }
}
