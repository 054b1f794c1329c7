use crate::data_models::{Candidate, MatchResult};
use crate::similarity::score;

/// Pick the candidate whose lowercased label shares the longest run with the
/// lowercased query. A candidate only wins with a strictly higher score than
/// the best so far, starting from zero: the first of several equally good
/// candidates is kept, and candidates sharing no character with the query
/// never match.
pub fn select_best<I>(query: &str, candidates: I) -> Option<MatchResult>
where
    I: IntoIterator<Item = Candidate>,
{
    let query = query.to_lowercase();
    let mut best_score = 0usize;
    let mut best: Option<Candidate> = None;

    for candidate in candidates {
        let candidate_score = score(&candidate.label.to_lowercase(), &query);
        if candidate_score > best_score {
            best_score = candidate_score;
            best = Some(candidate);
        }
    }

    best.map(MatchResult::from)
}

#[test]
fn test_select_best_tie_keeps_first() {
    let candidates = vec![Candidate::new("Foo", "l1"), Candidate::new("Foo", "l2")];
    let got = select_best("foo", candidates).unwrap();
    assert_eq!(got.link, "l1");
    assert_eq!(got.matched_label, "Foo");
}

#[test]
fn test_select_best_empty() {
    assert_eq!(select_best("anything", Vec::new()), None);
}

#[test]
fn test_select_best_prefers_longest_run() {
    let candidates = vec![
        Candidate::new("Spider Solitaire", "/a"),
        Candidate::new("Solitaire Classic", "/b"),
        Candidate::new("Sol", "/c"),
    ];
    // "spider solitaire" and "solitaire classic" both contain "solitaire"
    // in full, so the earlier one stays.
    let got = select_best("Solitaire", candidates).unwrap();
    assert_eq!(got.link, "/a");

    let candidates = vec![
        Candidate::new("Sol", "/c"),
        Candidate::new("Solitaire Classic", "/b"),
    ];
    let got = select_best("solitaire", candidates).unwrap();
    assert_eq!(got.link, "/b");
}

#[test]
fn test_select_best_is_case_insensitive() {
    let candidates = vec![
        Candidate::new("chess", "/lower"),
        Candidate::new("CHESS CLOCK", "/upper"),
    ];
    let got = select_best("Chess Clock", candidates).unwrap();
    assert_eq!(got.link, "/upper");
}

#[test]
fn test_select_best_no_shared_character_is_no_match() {
    let candidates = vec![Candidate::new("qqq", "/q"), Candidate::new("zzz", "/z")];
    assert_eq!(select_best("abc", candidates), None);
}

#[test]
fn test_select_best_skips_unrelated_leading_candidate() {
    let candidates = vec![Candidate::new("qqq", "/q"), Candidate::new("abacus", "/a")];
    let got = select_best("abc", candidates).unwrap();
    assert_eq!(got.link, "/a");
}
