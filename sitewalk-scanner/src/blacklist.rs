/// Substring blacklist. A value matches when any configured pattern is a
/// substring of it - case-sensitive, no wildcard semantics.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    patterns: Vec<String>,
}

impl Blacklist {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.patterns.iter().any(|pattern| value.contains(pattern))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
