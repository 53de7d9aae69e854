use crate::counter::DocumentCounts;
use crate::error::{Result, TextStatError};

pub const DEFAULT_BASE: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFrequency {
    pub document_id: String,
    pub term: String,
    pub count: u32,
    /// `count * base / total_terms_in_document`
    pub per_base: f64,
}

/// Rescales raw counts to a per-`base` frequency (per million by default)
/// so documents of different lengths can be compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyNormalizer {
    base: f64,
}

impl Default for FrequencyNormalizer {
    fn default() -> Self { Self { base: DEFAULT_BASE } }
}

impl FrequencyNormalizer {
    pub fn new(base: f64) -> Result<Self> {
        if !base.is_finite() || base <= 0.0 {
            return Err(TextStatError::config(format!("normalization base must be positive, got {base}")));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> f64 { self.base }

    /// Empty for a document with no surviving tokens.
    pub fn normalize(&self, counts: &DocumentCounts) -> Vec<NormalizedFrequency> {
        let total = counts.total();
        if total == 0 {
            return Vec::new();
        }
        counts
            .terms()
            .map(|(term, count)| NormalizedFrequency {
                document_id: counts.document_id().to_string(),
                term: term.to_string(),
                count,
                per_base: count as f64 * self.base / total as f64,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(terms: &[&str]) -> DocumentCounts {
        let mut c = DocumentCounts::new("A");
        for t in terms {
            c.add(t);
        }
        c
    }

    #[test]
    fn per_million_by_default() {
        let rows = FrequencyNormalizer::default().normalize(&counts(&["cat", "sat", "dog", "sat"]));
        assert_eq!(rows[0].per_base, 250_000.0);
        assert_eq!(rows[1].per_base, 500_000.0);
    }

    #[test]
    fn doubling_count_doubles_frequency() {
        let n = FrequencyNormalizer::new(100.0).unwrap();
        let once = n.normalize(&counts(&["a", "b", "c", "d"]));
        let twice = n.normalize(&counts(&["a", "a", "c", "d"]));
        assert_eq!(twice[0].per_base, 2.0 * once[0].per_base);
    }

    #[test]
    fn empty_document_gives_no_rows() {
        assert!(FrequencyNormalizer::default().normalize(&DocumentCounts::new("A")).is_empty());
    }

    #[test]
    fn rejects_non_positive_base() {
        assert!(FrequencyNormalizer::new(0.0).is_err());
        assert!(FrequencyNormalizer::new(-5.0).is_err());
        assert!(FrequencyNormalizer::new(f64::NAN).is_err());
    }
}
