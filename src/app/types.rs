use ratatui::text::Span;

use crate::errors::BrowseError;

/// One malt line of a beer's ingredient list.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// A single beer as displayed by the browser. Records are loaded once and
/// never mutated for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based, stable identifier.
    pub id: u32,
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Remote image URL.
    pub image_ref: String,
    /// Bitterness in IBU (roughly 0..150).
    pub bitterness: f64,
    pub ingredients: Vec<Ingredient>,
}

impl Record {
    /// Label used for the list column: `name (id)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

/// Ordered, non-empty set of records. Insertion order is navigation order.
#[derive(Debug, Clone)]
pub struct Collection {
    records: Vec<Record>,
    max_label_len: usize,
}

impl Collection {
    /// Build a collection, rejecting an empty record list.
    pub fn new(records: Vec<Record>) -> Result<Self, BrowseError> {
        if records.is_empty() {
            return Err(BrowseError::EmptyCollection);
        }
        // Labels are immutable, so the widest one is measured once.
        let max_label_len = records
            .iter()
            .map(|r| Span::raw(r.label()).width())
            .max()
            .unwrap_or(0);
        Ok(Collection {
            records,
            max_label_len,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Display width of the longest `name (id)` label.
    pub fn max_label_len(&self) -> usize {
        self.max_label_len
    }
}

/// Navigation request consumed by the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Next,
    Previous,
    First,
    Last,
}

/// Outcome of a cursor transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    pub fn changed(self) -> bool {
        matches!(self, Transition::Changed)
    }
}

#[cfg(test)]
pub(crate) fn sample_record(id: u32) -> Record {
    Record {
        id,
        name: format!("Beer {}", id),
        tagline: format!("Tagline {}", id),
        description: format!("Description of beer {}", id),
        image_ref: format!("https://images.example/{}.png", id),
        bitterness: 40.0 + id as f64,
        ingredients: vec![
            Ingredient::new("Maris Otter", 3.3, "kilograms"),
            Ingredient::new("Caramalt", 0.2, "kilograms"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_rejected() {
        let err = Collection::new(Vec::new()).unwrap_err();
        assert!(matches!(err, BrowseError::EmptyCollection));
    }

    #[test]
    fn max_label_len_uses_widest_label() {
        let mut long = sample_record(12);
        long.name = "Punk IPA 2007 - 2010".to_string();
        let c = Collection::new(vec![sample_record(1), long]).unwrap();
        assert_eq!(c.max_label_len(), "Punk IPA 2007 - 2010 (12)".len());
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
    }

    #[test]
    fn label_format() {
        assert_eq!(sample_record(3).label(), "Beer 3 (3)");
    }
}
