//! Unit identifiers and the ordered registry a generation run covers.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::{Error, Result};

/// Identifier of one exercise unit. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UnitId(u32);

impl UnitId {
    /// Create an id, rejecting zero.
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidUnitId(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UnitId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidUnitId(s.to_string()))?;
        Self::new(value).map_err(|_| Error::InvalidUnitId(s.to_string()))
    }
}

/// Expand command-line unit arguments into ids, keeping argument order.
///
/// Each argument is either a single id (`7`) or an inclusive ascending range (`1-5`).
/// Duplicates are kept here; [`UnitRegistry::new`] rejects them.
pub fn expand_ids<I, S>(args: I) -> Result<Vec<UnitId>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ids = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        match arg.split_once('-') {
            Some((start, end)) => {
                let invalid = || Error::InvalidUnitId(arg.to_string());
                let start: UnitId = start.parse().map_err(|_| invalid())?;
                let end: UnitId = end.parse().map_err(|_| invalid())?;
                if start > end {
                    return Err(invalid());
                }
                ids.extend((start.get()..=end.get()).map(UnitId));
            }
            None => ids.push(arg.parse()?),
        }
    }
    Ok(ids)
}

/// Ordered, duplicate-free list of units.
///
/// Insertion order is generation order and aggregate execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRegistry {
    ids: Vec<UnitId>,
}

impl UnitRegistry {
    /// Validate and build a registry.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyRegistry`] if `ids` is empty
    /// - [`Error::DuplicateUnit`] naming the first id seen twice
    pub fn new(ids: &[UnitId]) -> Result<Self> {
        if ids.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let mut seen = FxHashSet::default();
        for &id in ids {
            if !seen.insert(id) {
                return Err(Error::DuplicateUnit(id));
            }
        }

        Ok(Self { ids: ids.to_vec() })
    }

    pub fn ids(&self) -> &[UnitId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false for a constructed registry; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Zero-based aggregate position of `id`, which decides its input filename.
    pub fn position(&self, id: UnitId) -> Option<usize> {
        self.ids.iter().position(|&other| other == id)
    }
}
