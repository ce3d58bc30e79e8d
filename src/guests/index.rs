//! Lexical guest retrieval index.
//!
//! An in-memory SQLite database with an FTS5 virtual table; ranking is
//! delegated entirely to SQLite's `bm25()`. The index is built once at
//! startup and never mutated afterwards.

use super::GuestRecord;
use crate::error::{GalaError, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// A retrieval hit.
#[derive(Debug, Clone)]
pub struct GuestHit {
    pub name: String,
    pub document: String,
    /// BM25 rank from SQLite; more negative is more relevant.
    pub score: f64,
}

/// BM25-ranked index over the loaded guest documents.
pub struct GuestIndex {
    conn: Mutex<Connection>,
    loaded: usize,
    loaded_at: DateTime<Utc>,
}

impl GuestIndex {
    /// Build the index from a list of guest records.
    pub fn build(records: &[GuestRecord]) -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        conn.execute_batch(
            "CREATE VIRTUAL TABLE guests USING fts5(document, name UNINDEXED, id UNINDEXED);",
        )?;

        {
            let tx = conn.unchecked_transaction()?;
            for record in records {
                tx.execute(
                    "INSERT INTO guests (document, name, id) VALUES (?1, ?2, ?3)",
                    params![record.to_document(), record.name, Uuid::new_v4().to_string()],
                )?;
            }
            tx.commit()?;
        }

        debug!("Indexed {} guest documents", records.len());

        Ok(Self {
            conn: Mutex::new(conn),
            loaded: records.len(),
            loaded_at: Utc::now(),
        })
    }

    /// Number of documents in the index.
    pub fn len(&self) -> usize {
        self.loaded
    }

    pub fn is_empty(&self) -> bool {
        self.loaded == 0
    }

    /// When the index was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Rank documents against a free-text query, returning at most `limit`
    /// hits, best first. A query with no indexable terms yields no hits.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<GuestHit>> {
        let Some(match_expr) = fts_query(query) else {
            return Ok(Vec::new());
        };

        let conn = self.conn.lock().map_err(|e| {
            GalaError::Retrieval(format!("Failed to acquire index lock: {}", e))
        })?;

        let mut stmt = conn.prepare(
            "SELECT name, document, bm25(guests) AS score
             FROM guests WHERE guests MATCH ?1
             ORDER BY bm25(guests) LIMIT ?2",
        )?;

        let hits = stmt
            .query_map(params![match_expr, limit as i64], |row| {
                Ok(GuestHit {
                    name: row.get(0)?,
                    document: row.get(1)?,
                    score: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(hits)
    }

    /// All guest names, in insertion order.
    pub fn names(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().map_err(|e| {
            GalaError::Retrieval(format!("Failed to acquire index lock: {}", e))
        })?;

        let mut stmt = conn.prepare("SELECT name FROM guests ORDER BY rowid")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(names)
    }
}

/// Turn a free-text query into an FTS5 MATCH expression.
///
/// User input is not valid FTS5 syntax; terms are extracted, quoted, and
/// OR'd so any matching term contributes to the BM25 rank.
fn fts_query(query: &str) -> Option<String> {
    let terms: Vec<String> = query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| format!("\"{}\"", t))
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms.join(" OR "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<GuestRecord> {
        vec![
            GuestRecord {
                name: "Ada Lovelace".to_string(),
                relation: "best friend".to_string(),
                description: "Renowned mathematician and first programmer.".to_string(),
                email: "ada.lovelace@example.com".to_string(),
            },
            GuestRecord {
                name: "Dr. Nikola Tesla".to_string(),
                relation: "old friend from university days".to_string(),
                description: "Inventor working on a wireless energy system.".to_string(),
                email: "nikola.tesla@gmail.com".to_string(),
            },
            GuestRecord {
                name: "Marie Curie".to_string(),
                relation: "colleague".to_string(),
                description: "Physicist and chemist, twice Nobel laureate.".to_string(),
                email: "marie.curie@example.com".to_string(),
            },
            GuestRecord {
                name: "Charles Babbage".to_string(),
                relation: "mentor".to_string(),
                description: "Designer of the analytical engine.".to_string(),
                email: "charles.babbage@example.com".to_string(),
            },
        ]
    }

    #[test]
    fn test_search_finds_guest_by_name() {
        let index = GuestIndex::build(&sample_records()).unwrap();
        let hits = index.search("Ada Lovelace", 3).unwrap();

        assert!(!hits.is_empty());
        assert_eq!(hits[0].name, "Ada Lovelace");
        assert!(hits[0].document.contains("first programmer"));
    }

    #[test]
    fn test_search_finds_guest_by_relation() {
        let index = GuestIndex::build(&sample_records()).unwrap();
        let hits = index.search("old friend from university", 3).unwrap();

        assert_eq!(hits[0].name, "Dr. Nikola Tesla");
    }

    #[test]
    fn test_search_never_exceeds_limit_or_corpus() {
        let index = GuestIndex::build(&sample_records()).unwrap();

        // "friend" appears in two relations; cap at 1
        let hits = index.search("friend", 1).unwrap();
        assert_eq!(hits.len(), 1);

        // A broad query can never return more than was loaded
        let hits = index.search("the and of friend mentor colleague", 50).unwrap();
        assert!(hits.len() <= index.len());
    }

    #[test]
    fn test_search_no_match_returns_empty() {
        let index = GuestIndex::build(&sample_records()).unwrap();
        let hits = index.search("quantum chromodynamics", 3).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_with_punctuation_only_query() {
        let index = GuestIndex::build(&sample_records()).unwrap();
        let hits = index.search("?!... --- ***", 3).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_survives_fts_syntax_in_query() {
        let index = GuestIndex::build(&sample_records()).unwrap();
        // Would be a syntax error if passed to MATCH unsanitized
        let hits = index.search("who's \"Ada\" AND (Lovelace OR NEAR)", 3).unwrap();
        assert_eq!(hits[0].name, "Ada Lovelace");
    }

    #[test]
    fn test_names_preserve_insertion_order() {
        let index = GuestIndex::build(&sample_records()).unwrap();
        let names = index.names().unwrap();
        assert_eq!(names.len(), 4);
        assert_eq!(names[0], "Ada Lovelace");
        assert_eq!(names[3], "Charles Babbage");
    }

    #[test]
    fn test_fts_query_sanitization() {
        assert_eq!(fts_query("Ada Lovelace"), Some("\"Ada\" OR \"Lovelace\"".to_string()));
        assert_eq!(fts_query("  "), None);
        assert_eq!(fts_query("(NEAR)"), Some("\"NEAR\"".to_string()));
    }
}
