use super::*;

#[test]
fn func_is_keyword() {
    assert_eq!(lookup("func"), Some(Keyword::Func));
}

#[test]
fn keyword_match_is_exact() {
    assert_eq!(lookup("function"), None);
    assert_eq!(lookup("fun"), None);
    assert_eq!(lookup("func2"), None);
    assert_eq!(lookup("_func"), None);
}

#[test]
fn keyword_match_is_case_sensitive() {
    assert_eq!(lookup("Func"), None);
    assert_eq!(lookup("FUNC"), None);
}

#[test]
fn words_outside_the_table_are_identifiers() {
    // `return` is not reserved yet.
    assert_eq!(lookup("return"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn table_covers_every_keyword() {
    assert_eq!(KEYWORDS.len(), Keyword::ALL.len());
    for &keyword in Keyword::ALL {
        assert_eq!(
            lookup(keyword.as_str()),
            Some(keyword),
            "{keyword:?} missing from keyword table"
        );
    }
}

#[test]
fn table_spellings_match_as_str() {
    for &(spelling, keyword) in KEYWORDS {
        assert_eq!(spelling, keyword.as_str());
    }
}

#[test]
fn length_bounds_cover_table() {
    let (min, max) = LEN_BOUNDS;
    for &(spelling, _) in KEYWORDS {
        assert!((min..=max).contains(&spelling.len()));
    }
}
