//! A single formatted bibliography entry.

use std::fmt;

use bibfmt_records::Record;

use crate::styles::Style;

/// One source record rendered under one style.
///
/// The rendered string is computed once, when the registry constructs the
/// entry, and never changes afterwards. Entries are only built through
/// [`StyleRegistry`](crate::StyleRegistry), so none exists without a
/// registered render function for its (style, record type) pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    style: Style,
    record: Record,
    formatted: String,
}

impl Entry {
    pub(crate) fn new(style: Style, record: Record, formatted: String) -> Self {
        Self {
            style,
            record,
            formatted,
        }
    }

    /// The rendered citation string.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// The style this entry was rendered under.
    pub fn style(&self) -> Style {
        self.style
    }

    /// The wrapped source record.
    pub fn record(&self) -> &Record {
        &self.record
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}
