use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimestatError {
    #[error("'{input}' must have exactly 3 '|'-separated fields (hh|mm|ss), found {found}")]
    WrongComponentCount { input: String, found: usize },

    #[error("'{input}': field '{component}' is not a non-negative integer")]
    InvalidComponent {
        input: String,
        component: String,
        #[source]
        source: ParseIntError,
    },

    #[error("'{input}' is too large to represent in seconds")]
    Overflow { input: String },

    #[error("invalid time at position {index} of the list")]
    InvalidListEntry {
        index: usize,
        #[source]
        source: Box<TimestatError>,
    },
}
