//! Lexical similarity between a query and a stored question.

use crate::nlp::normalize::{norm_compare, tokens};

const JACCARD_WEIGHT: f64 = 0.6;
const SEQUENCE_WEIGHT: f64 = 0.4;

/// Blend of token Jaccard and character sequence ratio, in `[0, 1]`.
pub fn score(query: &str, candidate: &str) -> f64 {
    let a = norm_compare(query);
    let b = norm_compare(candidate);
    JACCARD_WEIGHT * jaccard(&a, &b) + SEQUENCE_WEIGHT * sequence_ratio(&a, &b)
}

/// Set overlap of whitespace tokens; 0 when both sides are empty.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let at = tokens(a);
    let bt = tokens(b);
    let union = at.union(&bt).count();
    if union == 0 {
        return 0.0;
    }
    at.intersection(&bt).count() as f64 / union as f64
}

/// `2 * matches / (len(a) + len(b))` over Ratcliff/Obershelp matching blocks.
///
/// Two empty strings are identical and score 1.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total size of the matching blocks found by recursively taking the longest
/// common substring and repeating on both flanks.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties resolve to the earliest start in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run[j] = length of the common run ending at a[i-1], b[j-1]
    let mut prev = vec![0usize; bhi - blo + 1];
    let mut curr = vec![0usize; bhi - blo + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            if a[i] == b[j] {
                let run = prev[slot - 1] + 1;
                curr[slot] = run;
                if run > best_size {
                    best_i = i + 1 - run;
                    best_j = j + 1 - run;
                    best_size = run;
                }
            } else {
                curr[slot] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    (best_i, best_j, best_size)
}
