//! Glossary data model

use serde::{Deserialize, Serialize};

/// Definition sentinel for terms whose meaning could not be inferred.
pub const UNKNOWN_DEFINITION: &str = "-";

/// A single glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// The term exactly as it appears in the transcription. Unique within a
    /// merged glossary.
    pub name: String,

    /// Meaning inferred from context, or [`UNKNOWN_DEFINITION`].
    pub definition: String,

    /// Set by the latest provider response only; not a durable property of
    /// the merged glossary.
    #[serde(default)]
    pub is_new: bool,
}

/// An ordered collection of terms, keyed by name.
///
/// Provider responses may contain duplicates; uniqueness is enforced by
/// [`Glossary::merge`], not by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    #[serde(default)]
    pub terms: Vec<Term>,
}

impl Glossary {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Number of terms the latest response flagged as new.
    pub fn count_new(&self) -> usize {
        self.terms.iter().filter(|term| term.is_new).count()
    }

    /// Merge `delta` into this glossary: every term in `delta` replaces the
    /// same-name entry wholesale (definition and `is_new` both), terms unique
    /// to `self` are kept unchanged, and unseen terms are appended. Callers
    /// should treat this as `base = base.merge(delta)`.
    pub fn merge(mut self, delta: Glossary) -> Glossary {
        for term in delta.terms {
            match self.terms.iter_mut().find(|t| t.name == term.name) {
                Some(existing) => *existing = term,
                None => self.terms.push(term),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(name: &str, definition: &str, is_new: bool) -> Term {
        Term {
            name: name.to_string(),
            definition: definition.to_string(),
            is_new,
        }
    }

    #[test]
    fn merging_empty_delta_is_identity() {
        let base = Glossary {
            terms: vec![term("HACON", "scheduling vendor", false)],
        };

        let merged = base.clone().merge(Glossary::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn delta_overwrites_collisions_wholesale() {
        let base = Glossary {
            terms: vec![term("X", "old", false)],
        };
        let delta = Glossary {
            terms: vec![term("X", "new", true)],
        };

        let merged = base.merge(delta);
        assert_eq!(merged.terms, vec![term("X", "new", true)]);
    }

    #[test]
    fn base_only_terms_are_preserved() {
        let base = Glossary {
            terms: vec![term("X", "kept", false), term("Y", "untouched", false)],
        };
        let delta = Glossary {
            terms: vec![term("X", "replaced", true)],
        };

        let merged = base.merge(delta);
        assert_eq!(merged.len(), 2);
        assert!(merged.terms.contains(&term("Y", "untouched", false)));
        assert!(merged.terms.contains(&term("X", "replaced", true)));
    }

    #[test]
    fn duplicate_names_in_delta_collapse_to_last() {
        let delta = Glossary {
            terms: vec![term("X", "first", true), term("X", "second", true)],
        };

        let merged = Glossary::default().merge(delta);
        assert_eq!(merged.terms, vec![term("X", "second", true)]);
    }

    #[test]
    fn count_new_only_counts_flagged_terms() {
        let glossary = Glossary {
            terms: vec![term("A", "-", true), term("B", "-", false)],
        };
        assert_eq!(glossary.count_new(), 1);
    }

    #[test]
    fn glossary_deserializes_with_missing_is_new() {
        let glossary: Glossary =
            serde_json::from_str(r#"{"terms": [{"name": "TPG", "definition": "-"}]}"#)
                .expect("is_new should default to false");
        assert_eq!(glossary.terms[0].is_new, false);
    }
}
