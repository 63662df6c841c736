//! Reversible string <-> integer mapping for categorical columns.
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;


/// Maps each distinct category to its rank in lexicographic order.
///
/// Codes are unique and contiguous from `0`,
/// which holds by construction since the categories are kept
/// as a sorted, deduplicated vector and the code is the position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoricalMapping {
    categories: Vec<String>,
}


impl CategoricalMapping {
    /// Builds the mapping from the non-empty trimmed values.
    pub fn from_values<I, S>(values: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let mut categories = values.into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>();
        categories.sort_unstable();
        categories.dedup();

        Self { categories }
    }


    /// Returns the code of `value`, if it is a known category.
    #[inline]
    pub fn code(&self, value: &str) -> Option<usize> {
        self.categories
            .binary_search_by(|c| c.as_str().cmp(value.trim()))
            .ok()
    }


    /// Returns the category with the given code.
    #[inline]
    pub fn category(&self, code: usize) -> Option<&str> {
        self.categories.get(code).map(String::as_str)
    }


    /// Returns the sorted categories.
    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories[..]
    }


    /// Returns the number of categories.
    #[inline]
    pub fn len(&self) -> usize {
        self.categories.len()
    }


    /// Returns `true` if there is no category.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }


    /// Returns the mapping as an ordered `category -> code` table.
    pub fn to_map(&self) -> BTreeMap<String, usize> {
        self.categories.iter()
            .enumerate()
            .map(|(code, category)| (category.clone(), code))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_and_contiguous() {
        let mapping = CategoricalMapping::from_values(["b", "a", "c", "a", " "]);
        let expected = BTreeMap::from([
            ("a".to_string(), 0),
            ("b".to_string(), 1),
            ("c".to_string(), 2),
        ]);
        assert_eq!(mapping.to_map(), expected);
        assert_eq!(mapping.code(" b "), Some(1));
        assert_eq!(mapping.code("z"), None);
        assert_eq!(mapping.category(2), Some("c"));
        assert_eq!(mapping.category(3), None);
    }
}
