//! Session state of a terminal

use std::fmt;

use teller_types::AccountId;

/// Who, if anyone, is using the terminal.
///
/// The session holds the registry key of the active account rather than a
/// reference to it; the terminal's registry stays the sole owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(AccountId),
}

impl Session {
    pub fn account_id(&self) -> Option<&AccountId> {
        match self {
            Session::Authenticated(id) => Some(id),
            Session::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Unauthenticated => write!(f, "unauthenticated"),
            Session::Authenticated(id) => write!(f, "authenticated as {}", id),
        }
    }
}
