use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Qualitative criterion categories with their own keyword lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Safety,
    Material,
    Environment,
}

/// Score returned when the text is absent, not a string, or matches no
/// lexicon keyword.
pub const NEUTRAL_SCORE: i32 = 3;

/// Static per-category lexicons: (keyword substring, score in [1,10]).
/// Process-wide read-only reference data, initialized once and never
/// mutated.
static LEXICONS: Lazy<HashMap<Category, Vec<(&'static str, i32)>>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        Category::Safety,
        vec![
            ("iso 45001", 10),
            ("ohsas", 9),
            ("certified", 8),
            ("audited", 7),
            ("training", 6),
            ("compliant", 5),
            ("standard", 4),
            ("basic", 2),
        ],
    );
    map.insert(
        Category::Material,
        vec![
            ("iso 9001", 10),
            ("premium", 9),
            ("certified", 8),
            ("tested", 7),
            ("durable", 6),
            ("quality", 5),
            ("standard", 4),
            ("basic", 2),
        ],
    );
    map.insert(
        Category::Environment,
        vec![
            ("iso 14001", 10),
            ("carbon neutral", 9),
            ("renewable", 8),
            ("recycled", 7),
            ("sustainable", 6),
            ("green", 5),
            ("eco", 4),
            ("basic", 2),
        ],
    );
    map
});

/// Maps free-text qualitative descriptions to a bounded numeric score
/// via substring keyword matching.
pub struct KeywordScorer {
    lexicons: &'static HashMap<Category, Vec<(&'static str, i32)>>,
}

impl KeywordScorer {
    pub fn new() -> Self {
        Self { lexicons: &LEXICONS }
    }

    /// Score a description for the given category.
    ///
    /// Matching is plain substring containment on the lowercased text,
    /// not word-bounded. Among all matching keywords the highest score
    /// wins; keyword overlap ("iso 45001 certified" matches both the
    /// certification entry and "certified") is resolved by that score
    /// comparison alone.
    pub fn score(&self, text: Option<&str>, category: Category) -> i32 {
        let Some(text) = text else {
            return NEUTRAL_SCORE;
        };
        let lowered = text.to_lowercase();

        let mut best: Option<i32> = None;
        for (keyword, score) in &self.lexicons[&category] {
            if lowered.contains(keyword) {
                best = Some(best.map_or(*score, |b| b.max(*score)));
            }
        }
        best.unwrap_or(NEUTRAL_SCORE)
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}
