//! Deterministic daily content rotation.
//!
//! Pure functions only -- no hidden cursor. The same calendar day always
//! selects the same item for a given collection size; editing the
//! collection changes future selections, which is accepted.

use chrono::{Datelike, NaiveDate};

use crate::model::Saying;

/// Index selected for `date` into a collection of `len` items:
/// `day_of_month mod len`. `None` when the collection is empty.
pub fn daily_index(len: usize, date: NaiveDate) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(date.day() as usize % len)
    }
}

/// The saying of the day, or the fixed fallback for an empty collection.
pub fn daily_saying(collection: &[Saying], date: NaiveDate) -> Saying {
    daily_index(collection.len(), date)
        .map(|i| collection[i].clone())
        .unwrap_or_else(Saying::fallback)
}
