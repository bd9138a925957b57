//! Character-level sequence similarity for the fuzzy matching phase.
//!
//! Ratcliff/Obershelp ratio: find the longest common block, recurse on
//! the pieces to either side, and score 2·M / (len(a) + len(b)) where M
//! is the total matched character count. Symmetric, in [0, 1].

/// Similarity ratio between two strings in [0, 1].
/// Two empty strings are identical (1.0); one empty side scores 0.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let matches = matching_total(&a, &b);
    (2.0 * matches as f64) / ((a.len() + b.len()) as f64)
}

/// Total matched characters: longest common block plus recursive matches
/// in the unmatched regions to its left and right.
fn matching_total(a: &[char], b: &[char]) -> usize {
    let (ai, bi, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_total(&a[..ai], &b[..bi]) + matching_total(&a[ai + len..], &b[bi + len..])
}

/// Longest common contiguous block, earliest occurrence on ties.
/// Returns (start in a, start in b, length). O(|a|·|b|) time, O(|b|) space.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut curr = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = prev[j] + 1;
                curr[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        prev = curr;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        assert_eq!(sequence_ratio("python", "python"), 1.0);
        assert_eq!(sequence_ratio("", ""), 1.0);
    }

    #[test]
    fn test_empty_side_scores_zero() {
        assert_eq!(sequence_ratio("python", ""), 0.0);
        assert_eq!(sequence_ratio("", "python"), 0.0);
    }

    #[test]
    fn test_disjoint_strings_score_zero() {
        assert_eq!(sequence_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_known_ratio_prefix() {
        // "node" vs "nodejs": 4 matched chars of 10 total.
        let r = sequence_ratio("node", "nodejs");
        assert!((r - 0.8).abs() < 1e-9, "got {r}");
    }

    #[test]
    fn test_known_ratio_typo() {
        // "kubernetes" vs "kubernets": block "kubernet" (8) + "s" (1) = 9 of 19.
        let r = sequence_ratio("kubernetes", "kubernets");
        assert!((r - 18.0 / 19.0).abs() < 1e-9, "got {r}");
    }

    #[test]
    fn test_symmetric() {
        for (a, b) in [
            ("node", "nodejs"),
            ("kubernetes", "kubernets"),
            ("machine learning", "deep learning"),
        ] {
            assert_eq!(sequence_ratio(a, b), sequence_ratio(b, a));
        }
    }

    #[test]
    fn test_bounded_zero_to_one() {
        for (a, b) in [("a", "aaaa"), ("xy", "yx"), ("data", "database")] {
            let r = sequence_ratio(a, b);
            assert!((0.0..=1.0).contains(&r), "out of range for ({a}, {b}): {r}");
        }
    }
}
