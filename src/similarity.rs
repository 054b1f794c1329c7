/// Longest contiguous run of characters shared by `a` and `b`.
///
/// Classic suffix-length table, kept to two rows: `row[y]` is the length of the
/// common suffix of `a[..x]` and `b[..y]`. Only a strictly longer run replaces
/// the current best, so on ties the run ending earliest in `a` wins.
/// Comparison is exact, callers lowercase both sides first.
pub fn longest_common_substring(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut longest = 0usize;
    let mut x_longest = 0usize;

    for x in 1..=a.len() {
        for y in 1..=b.len() {
            if a[x - 1] == b[y - 1] {
                curr[y] = prev[y - 1] + 1;
                if curr[y] > longest {
                    longest = curr[y];
                    x_longest = x;
                }
            } else {
                curr[y] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    a[x_longest - longest..x_longest].iter().collect()
}

/// Match score used to rank search results: length of the longest common run.
pub fn score(a: &str, b: &str) -> usize {
    longest_common_substring(a, b).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for s in ["a", "solitaire", "Candy Crush", "x y  z"] {
            assert_eq!(longest_common_substring(s, s), s);
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(longest_common_substring("", ""), "");
        assert_eq!(longest_common_substring("abc", ""), "");
        assert_eq!(longest_common_substring("", "abc"), "");
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(longest_common_substring("abc", "xyz"), "");
        assert_eq!(score("abc", "xyz"), 0);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(longest_common_substring("ABC", "abc"), "");
    }

    #[test]
    fn test_finds_inner_run() {
        assert_eq!(
            longest_common_substring("solitaire classic", "solitaire"),
            "solitaire"
        );
        assert_eq!(longest_common_substring("xxabcdyy", "zabcdz"), "abcd");
    }

    #[test]
    fn test_tie_keeps_earliest_in_first_argument() {
        // "ab" and "cd" are both length 2; "ab" ends first in `a`.
        assert_eq!(longest_common_substring("ab--cd", "cd..ab"), "ab");
        assert_eq!(longest_common_substring("cd..ab", "ab--cd"), "cd");
    }

    #[test]
    fn test_score_symmetric_in_length() {
        let pairs = [
            ("ab--cd", "cd..ab"),
            ("angry birds", "birds of anger"),
            ("subway surfers", "surf"),
            ("", "nothing"),
        ];
        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_multibyte_does_not_split_chars() {
        assert_eq!(longest_common_substring("café noir", "un café"), "café");
        assert_eq!(score("日本語", "本語"), 2);
    }
}
