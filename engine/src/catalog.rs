use crate::EntryId;
use serde::{Deserialize, Serialize};

/// Presentation-only metadata. Never enters the weighting pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryMeta {
    pub industry: Option<String>,
    pub language: Option<String>,
    pub release_year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    /// Space- or comma-separated genre tags.
    pub genre: String,
    pub overview: String,
    #[serde(default)]
    pub meta: EntryMeta,
}

impl CatalogEntry {
    /// Title, genre and overview joined by single spaces.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.title, self.genre, self.overview)
    }
}

/// Ordered, read-only collection of entries. Ids equal row positions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self { Self::default() }

    /// Build a catalog from (title, genre, overview) triples, assigning ids in input order.
    pub fn from_records<I, T, G, O>(records: I) -> Self
    where
        I: IntoIterator<Item = (T, G, O)>,
        T: Into<String>,
        G: Into<String>,
        O: Into<String>,
    {
        let mut catalog = Self::new();
        for (title, genre, overview) in records {
            catalog.push(title.into(), genre.into(), overview.into(), EntryMeta::default());
        }
        catalog
    }

    pub(crate) fn push(&mut self, title: String, genre: String, overview: String, meta: EntryMeta) -> EntryId {
        let id = self.entries.len() as EntryId;
        self.entries.push(CatalogEntry { id, title, genre, overview, meta });
        id
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> { self.entries.get(id as usize) }

    pub fn entries(&self) -> &[CatalogEntry] { &self.entries }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> { self.entries.iter() }

    pub fn combined_texts(&self) -> Vec<String> {
        self.entries.iter().map(CatalogEntry::combined_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_text_joins_with_single_spaces() {
        let c = Catalog::from_records([("Alpha", "Action", "A hero saves the city")]);
        assert_eq!(c.entries()[0].combined_text(), "Alpha Action A hero saves the city");
    }

    #[test]
    fn empty_fields_stay_textually_neutral() {
        let c = Catalog::from_records([("Alpha", "", "")]);
        assert_eq!(c.entries()[0].combined_text(), "Alpha  ");
    }

    #[test]
    fn ids_follow_input_order() {
        let c = Catalog::from_records([("A", "", ""), ("B", "", ""), ("C", "", "")]);
        let ids: Vec<EntryId> = c.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(c.get(1).map(|e| e.title.as_str()), Some("B"));
    }
}
