use super::*;

#[test]
fn test_greeting() {
    assert_eq!(romanize("안녕하세요"), "Annyeonghaseyo");
}

#[test]
fn test_hangeul() {
    assert_eq!(romanize("한글"), "Hangeul");
}

#[test]
fn test_sentence_with_punctuation() {
    assert_eq!(
        romanize("제 이름은 테스트입니다."),
        "Je ireumeun teseuteuimnida."
    );
}

#[test]
fn test_mixed_script_suffix() {
    // ㄱ before ㄹ has no alternation rule and the Latin suffix is copied
    // through as-is, so no separator appears at the script boundary.
    assert_eq!(romanize("식료품groceries"), "Sikryopumgroceries");
}

#[test]
fn test_empty() {
    assert_eq!(romanize(""), "");
    assert_eq!(try_romanize("").unwrap(), "");
}

#[test]
fn test_single_latin_char() {
    assert_eq!(romanize("A"), "A");
    assert_eq!(romanize("a"), "a");
}

#[test]
fn test_non_hangul_untouched() {
    // No syllable block: no trimming, no capitalization.
    assert_eq!(romanize("  greatest hits "), "  greatest hits ");
    assert_eq!(romanize("ㄱㄴㄷ"), "ㄱㄴㄷ");
    assert_eq!(romanize("東京"), "東京");
}

#[test]
fn test_trim_and_capitalize() {
    assert_eq!(romanize("  한글  "), "Hangeul");
    assert_eq!(romanize("abc 한"), "Abc han");
    assert_eq!(romanize("Hello 한글"), "Hello hangeul");
    assert_eq!(romanize("(한글)"), "(hangeul)");
    assert_eq!(romanize("1 한글"), "1 hangeul");
}

#[test]
fn test_capitalize_only_first_letter() {
    assert_eq!(romanize("한글 Yes! We’re Open"), "Hangeul Yes! We’re Open");
    assert_eq!(romanize("한 글"), "Han geul");
}

#[test]
fn test_capitalize_uses_titlecase() {
    assert_eq!(romanize("ǅ한"), "ǅhan");
    assert_eq!(romanize("ǆ한"), "ǅhan");
    assert_eq!(romanize("Ǆ한"), "Ǆhan");
    assert_eq!(romanize("é한"), "Éhan");
}

#[test]
fn test_output_settings() {
    let raw = OutputSettings {
        trim: false,
        capitalize: false,
    };
    assert_eq!(romanize_with(" 한글 ", &raw), " hangeul ");

    let trim_only = OutputSettings {
        trim: true,
        capitalize: false,
    };
    assert_eq!(romanize_with(" 한글 ", &trim_only), "hangeul");
}

#[test]
fn test_second_pass_is_identity() {
    for text in ["안녕하세요", "제 이름은 테스트입니다.", "식료품groceries"] {
        let once = romanize(text);
        assert_eq!(romanize(&once), once);
    }
}

#[test]
fn test_deterministic() {
    let text = "감사합니다 맛있어요";
    assert_eq!(romanize(text), romanize(text));
}

#[test]
fn test_common_words() {
    assert_eq!(romanize("감사합니다"), "Gamsahamnida");
    assert_eq!(romanize("맛있어"), "Masisseo");
    assert_eq!(romanize("밥 먹어"), "Bap meogeo");
    assert_eq!(romanize("국물"), "Gukmul");
}
