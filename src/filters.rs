use std::fmt::Display;

use crate::calendar;

pub fn devanagari<T: Display>(value: T) -> askama::Result<String> {
    Ok(calendar::to_devanagari(value))
}

/// Cuts at a character boundary and appends an ellipsis when shortened.
pub fn excerpt<T: Display>(value: T, limit: usize) -> askama::Result<String> {
    let text = value.to_string();
    if text.chars().count() <= limit {
        return Ok(text);
    }
    let mut cut: String = text.chars().take(limit).collect();
    cut.push('…');
    Ok(cut)
}
