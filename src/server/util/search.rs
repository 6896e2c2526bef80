//! Search term tokenizing and edit-distance ranking.

/// Tokens shorter than this contribute no search clause.
pub const MIN_TOKEN_LENGTH: usize = 3;

/// Splits a search term on whitespace, keeping tokens of at least [`MIN_TOKEN_LENGTH`]
/// characters.
pub fn search_tokens(term: &str) -> Vec<String> {
    term.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
        .map(str::to_string)
        .collect()
}

/// Whether results for `term` should be re-ranked by edit distance.
///
/// Only multi-word queries with more than one result are re-ranked; everything else
/// keeps store order.
pub fn should_rank(term: &str, result_count: usize) -> bool {
    term.split_whitespace().count() >= 2 && result_count > 1
}

/// Levenshtein distance between `a` and `b`, counted in chars and compared
/// case-insensitively.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Stable sort of `items` by ascending score.
///
/// Ties keep their incoming order.
pub fn rank_by<T, F>(items: Vec<T>, mut score: F) -> Vec<T>
where
    F: FnMut(&T) -> usize,
{
    let mut scored: Vec<(usize, T)> = items.into_iter().map(|item| (score(&item), item)).collect();
    scored.sort_by_key(|(score, _)| *score);
    scored.into_iter().map(|(_, item)| item).collect()
}
