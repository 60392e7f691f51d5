//! Style dispatch: an explicit (style, record type) → render function table.

use bibfmt_records::{Record, RecordKind};
use hashlink::LinkedHashMap;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::styles::{Style, apa, gost};

/// A render function bound to one (style, record type) pairing.
///
/// Render functions are pure: the output depends only on the record's fields
/// and the style's literal template.
pub type RenderFn = fn(&Record) -> Result<String>;

/// Dispatch table mapping (style, record type) pairings to render functions.
///
/// [`StyleRegistry::default`] registers every built-in pairing; the per-style
/// `renderer` lookups it draws from are exhaustive matches over
/// [`RecordKind`], so the table cannot silently miss a variant.
#[derive(Debug)]
pub struct StyleRegistry {
    table: LinkedHashMap<(Style, RecordKind), RenderFn>,
}

impl StyleRegistry {
    /// An empty registry with no pairings.
    pub fn empty() -> Self {
        Self {
            table: LinkedHashMap::new(),
        }
    }

    /// Register (or replace) the render function for one pairing.
    pub fn register(&mut self, style: Style, kind: RecordKind, render: RenderFn) {
        self.table.insert((style, kind), render);
    }

    /// Look up the render function for a pairing.
    ///
    /// An unregistered pairing is an error naming the pairing, never a
    /// silent skip.
    pub fn renderer(&self, style: Style, kind: RecordKind) -> Result<RenderFn> {
        self.table
            .get(&(style, kind))
            .copied()
            .ok_or(Error::UnsupportedType { style, kind })
    }

    /// Render one record under `style`.
    pub fn format(&self, style: Style, record: &Record) -> Result<String> {
        self.renderer(style, record.kind())?(record)
    }

    /// Wrap one record into an eagerly rendered [`Entry`].
    pub fn entry(&self, style: Style, record: Record) -> Result<Entry> {
        let formatted = self.format(style, &record)?;
        Ok(Entry::new(style, record, formatted))
    }

    /// Wrap a heterogeneous record sequence, one [`Entry`] per record, in
    /// input order. The first failure aborts the whole run.
    pub fn entries(
        &self,
        style: Style,
        records: impl IntoIterator<Item = Record>,
    ) -> Result<Vec<Entry>> {
        records
            .into_iter()
            .map(|record| self.entry(style, record))
            .collect()
    }

    /// Registered pairings, in registration order.
    pub fn pairings(&self) -> impl Iterator<Item = (Style, RecordKind)> + '_ {
        self.table.keys().copied()
    }
}

impl Default for StyleRegistry {
    /// A registry with every built-in (style, record type) pairing.
    fn default() -> Self {
        let mut registry = Self::empty();
        for kind in RecordKind::ALL {
            registry.register(Style::Apa, kind, apa::renderer(kind));
            registry.register(Style::Gost, kind, gost::renderer(kind));
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registers_every_pairing() {
        let registry = StyleRegistry::default();
        for style in Style::ALL {
            for kind in RecordKind::ALL {
                assert!(
                    registry.renderer(style, kind).is_ok(),
                    "missing pairing: {} / {}",
                    style,
                    kind
                );
            }
        }
        assert_eq!(registry.pairings().count(), Style::ALL.len() * RecordKind::ALL.len());
    }

    #[test]
    fn test_pairings_iterate_in_registration_order() {
        let mut registry = StyleRegistry::empty();
        registry.register(Style::Gost, RecordKind::Dissertation, gost::dissertation);
        registry.register(Style::Apa, RecordKind::Book, apa::book);

        let pairings: Vec<_> = registry.pairings().collect();
        assert_eq!(
            pairings,
            [
                (Style::Gost, RecordKind::Dissertation),
                (Style::Apa, RecordKind::Book),
            ]
        );
    }
}
