//! Synthetic names for destructured parameters that have no name of their own.
//!
//! Preferred bases are handed out verbatim while more than one remains; the
//! last base is then reused with a numeric suffix (`root0`, `root1`, ...).
//! The cursor is a plain value: callers thread it through a detection pass,
//! so a shared configuration is never drained by one function.
//!
//! The suffix is kept wider than the configured `i64` start, so a start of
//! `i64::MAX` keeps producing distinct names instead of overflowing.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootNameCursor {
    /// More than one preferred base left.
    Preferred {
        remaining: VecDeque<String>,
        counter: i128,
    },
    /// Last base reused with an ever-increasing suffix. `None` when no base
    /// was configured at all.
    Fallback { base: Option<String>, counter: i128 },
}

impl RootNameCursor {
    pub fn new(bases: &[String], start: i64) -> Self {
        let counter = i128::from(start);
        if bases.len() > 1 {
            RootNameCursor::Preferred {
                remaining: bases.iter().cloned().collect(),
                counter,
            }
        } else {
            RootNameCursor::Fallback {
                base: bases.first().cloned(),
                counter,
            }
        }
    }

    /// Produce the next name and the cursor for the one after it.
    pub fn advance(self) -> (String, RootNameCursor) {
        match self {
            RootNameCursor::Preferred {
                mut remaining,
                counter,
            } => {
                let name = remaining.pop_front().unwrap_or_default();
                let next = if remaining.len() > 1 {
                    RootNameCursor::Preferred { remaining, counter }
                } else {
                    RootNameCursor::Fallback {
                        base: remaining.pop_front(),
                        counter,
                    }
                };
                (name, next)
            }
            RootNameCursor::Fallback { base, counter } => {
                let name = format!("{}{counter}", base.as_deref().unwrap_or_default());
                (
                    name,
                    RootNameCursor::Fallback {
                        base,
                        counter: counter + 1,
                    },
                )
            }
        }
    }
}
