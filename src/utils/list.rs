//! "One or many" normalization
//!
//! Several command payloads accept either a single value or a list of
//! values. `OneOrMany` captures that shape for serde and normalizes it to a
//! plain `Vec` for the rest of the code.

use serde::{Deserialize, Serialize};

/// A value that may arrive as a bare scalar or as a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Flatten into a `Vec`, without copying an existing sequence.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }

    /// Normalize an optional value: `None` becomes the empty list.
    pub fn normalize(value: Option<Self>) -> Vec<T> {
        value.map(Self::into_vec).unwrap_or_default()
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}
