//! Producers of the synthetic translation units handed to the compiler.
//!
//! Every generator is a pure function of the configuration and the size, so
//! the same inputs always yield the same source text
pub mod sfinae;
pub mod string_literals;

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::collections::BTreeMap;

    use regex::Regex;

    /// Counts how many times each index appears inside the generated code
    /// through the capture group of `pattern`
    pub fn index_occurrences(source: &str, pattern: &str) -> BTreeMap<usize, usize> {
        let re = Regex::new(pattern).unwrap();
        let mut occurrences = BTreeMap::new();
        for caps in re.captures_iter(source) {
            let idx: usize = caps[1].parse().unwrap();
            *occurrences.entry(idx).or_insert(0) += 1;
        }
        occurrences
    }

    /// Asserts that every index in `[0, n)` appears exactly `times` times, and no other
    pub fn assert_each_index(source: &str, pattern: &str, n: usize, times: usize) {
        let occurrences = index_occurrences(source, pattern);
        assert_eq!(occurrences.len(), n, "pattern {pattern} over {n} indices");
        for (idx, (found, count)) in occurrences.into_iter().enumerate() {
            assert_eq!(found, idx);
            assert_eq!(count, times, "index {idx} for pattern {pattern}");
        }
    }

    pub fn assert_balanced(source: &str) {
        let mut depth: i64 = 0;
        for c in source.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0, "closing brace without opening one");
        }
        assert_eq!(depth, 0, "unbalanced braces");
    }
}
