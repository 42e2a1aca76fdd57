use itertools::Itertools;

use crate::sigtable::{FunctionSignature, Matcher};

/// Scores the query against the rendered signature, e.g. `add(int, int) -> int`.
/// Best match first, equal scores keep the original order.
pub struct FuzzyMatcher<T>(pub T);

impl<T> Matcher for FuzzyMatcher<T>
    where T: fuzzy_matcher::FuzzyMatcher + Send,
{
    fn matches<'a>(&self, query: &str, items: &'a [FunctionSignature]) -> Vec<&'a FunctionSignature> {
        let query = query.trim();
        if query.is_empty() {
            return items.iter().collect();
        }

        items.iter()
            .flat_map(|item| {
                self.0
                    .fuzzy_match(&item.to_string(), query)
                    .map(|score| (score, item))
            })

            // sorted_by_key is a stable sort
            .sorted_by_key(|(score, _item)| -score)
            .map(|(_score, item)| item)
            .collect()
    }
}
