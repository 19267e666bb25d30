//! TF-IDF vectorization compatible with scikit-learn's `TfidfVectorizer`
//! defaults: lowercased `\b\w\w+\b` tokens, stop words dropped before n-grams
//! are formed, raw counts, smoothed IDF and L2-normalized rows.

use anyhow::{bail, Result};
use std::collections::{BTreeMap, HashSet};

use super::{stop_words, tokenize};

/// Dense document-term weights
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// Feature names in alphabetical order
    pub features: Vec<String>,
    /// One row per input document, aligned with `features`
    pub rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    /// Sum of all weights in a row
    pub fn row_sum(&self, row: usize) -> f64 {
        self.rows.get(row).map(|r| r.iter().sum()).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    ngram_range: (usize, usize),
    max_features: Option<usize>,
    min_df: usize,
    max_df: f64,
    stop_words: Option<&'static HashSet<&'static str>>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            ngram_range: (1, 1),
            max_features: None,
            min_df: 1,
            max_df: 1.0,
            stop_words: None,
        }
    }
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_english_stop_words(mut self) -> Self {
        self.stop_words = Some(&stop_words::ENGLISH);
        self
    }

    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n.max(1), max_n.max(min_n.max(1)));
        self
    }

    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Fraction of documents a term may appear in. The document-count bound
    /// is rounded up, so a single-document corpus always keeps its terms.
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df;
        self
    }

    /// Lowercase, tokenize, drop stop words and join adjacent tokens into
    /// n-grams of the configured sizes.
    pub fn analyze(&self, document: &str) -> Vec<String> {
        let tokens: Vec<String> = tokenize(document)
            .into_iter()
            .filter(|token| {
                self.stop_words
                    .map_or(true, |stop| !stop.contains(token.as_str()))
            })
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }

    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<TfidfMatrix> {
        let n_docs = documents.len();
        if n_docs == 0 {
            bail!("cannot fit a TF-IDF model on an empty corpus");
        }

        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut counter = BTreeMap::new();
                for term in self.analyze(doc.as_ref()) {
                    *counter.entry(term).or_insert(0) += 1;
                }
                counter
            })
            .collect();

        // term -> (document frequency, corpus frequency), alphabetical
        let mut vocabulary: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for counter in &counts {
            for (term, count) in counter {
                let entry = vocabulary.entry(term.as_str()).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += count;
            }
        }
        if vocabulary.is_empty() {
            bail!("empty vocabulary; the documents only contain stop words");
        }

        let max_doc_count = (self.max_df * n_docs as f64).ceil() as usize;
        if max_doc_count < self.min_df {
            bail!("max_df corresponds to fewer documents than min_df");
        }

        let mut kept: Vec<(&str, usize, usize)> = vocabulary
            .into_iter()
            .filter(|(_, (df, _))| *df >= self.min_df && *df <= max_doc_count)
            .map(|(term, (df, tf))| (term, df, tf))
            .collect();
        if kept.is_empty() {
            bail!("after pruning, no terms remain");
        }

        if let Some(limit) = self.max_features {
            if kept.len() > limit {
                // Stable sort keeps alphabetical order among equal counts
                kept.sort_by(|a, b| b.2.cmp(&a.2));
                kept.truncate(limit);
                kept.sort_by(|a, b| a.0.cmp(b.0));
            }
        }

        let idf: Vec<f64> = kept
            .iter()
            .map(|(_, df, _)| ((1.0 + n_docs as f64) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .iter()
            .map(|counter| {
                let mut row: Vec<f64> = kept
                    .iter()
                    .zip(&idf)
                    .map(|((term, _, _), idf)| {
                        counter.get(*term).copied().unwrap_or(0) as f64 * idf
                    })
                    .collect();
                let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    row.iter_mut().for_each(|w| *w /= norm);
                }
                row
            })
            .collect();

        Ok(TfidfMatrix {
            features: kept.into_iter().map(|(term, _, _)| term.to_string()).collect(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_document_weights() {
        let vectorizer = TfidfVectorizer::new().with_english_stop_words();
        let matrix = vectorizer.fit_transform(&["Kashmir kashmir border"]).unwrap();
        assert_eq!(matrix.features, vec!["border", "kashmir"]);
        // counts 1 and 2, idf 1.0, normalized by sqrt(5)
        let norm = 5f64.sqrt();
        assert!((matrix.rows[0][0] - 1.0 / norm).abs() < 1e-9);
        assert!((matrix.rows[0][1] - 2.0 / norm).abs() < 1e-9);
    }

    #[test]
    fn test_bigrams_skip_stop_words() {
        let vectorizer = TfidfVectorizer::new()
            .with_english_stop_words()
            .with_ngram_range(1, 2);
        let terms = vectorizer.analyze("Line of Control shelling");
        assert_eq!(
            terms,
            vec!["line", "control", "shelling", "line control", "control shelling"]
        );
    }

    #[test]
    fn test_smoothed_idf_across_documents() {
        let vectorizer = TfidfVectorizer::new();
        let matrix = vectorizer
            .fit_transform(&["drone strike", "drone talks"])
            .unwrap();
        assert_eq!(matrix.features, vec!["drone", "strike", "talks"]);
        // drone appears everywhere so its idf is 1.0; strike gets ln(3/2)+1
        let strike_idf = (3.0f64 / 2.0).ln() + 1.0;
        let norm = (1.0 + strike_idf * strike_idf).sqrt();
        assert!((matrix.rows[0][0] - 1.0 / norm).abs() < 1e-9);
        assert!((matrix.rows[0][1] - strike_idf / norm).abs() < 1e-9);
        assert_eq!(matrix.rows[0][2], 0.0);
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let vectorizer = TfidfVectorizer::new().with_max_features(2);
        let matrix = vectorizer
            .fit_transform(&["alpha beta beta gamma gamma gamma"])
            .unwrap();
        assert_eq!(matrix.features, vec!["beta", "gamma"]);
    }

    #[test]
    fn test_max_df_single_document_keeps_terms() {
        let vectorizer = TfidfVectorizer::new().with_max_df(0.8);
        assert!(vectorizer.fit_transform(&["peace talks resume"]).is_ok());
    }

    #[test]
    fn test_stop_word_only_corpus_fails() {
        let vectorizer = TfidfVectorizer::new().with_english_stop_words();
        assert!(vectorizer.fit_transform(&["the and of", "it is"]).is_err());
        let empty: [&str; 0] = [];
        assert!(vectorizer.fit_transform(&empty).is_err());
    }
}
