use super::*;

#[test]
fn parses_every_color_by_exact_name() {
    for color in Color::ALL {
        assert_eq!(color.name().parse::<Color>().expect("color"), color);
    }
}

#[test]
fn color_parsing_is_case_sensitive() {
    assert!("red".parse::<Color>().is_err());
    assert!("BLUE".parse::<Color>().is_err());
    assert!(" Green".parse::<Color>().is_err());
    assert!("Purple".parse::<Color>().is_err());
}

#[test]
fn color_letter_is_first_letter_of_name() {
    for color in Color::ALL {
        assert_eq!(
            Some(color.letter()),
            color.name().chars().next().map(|c| c.to_ascii_uppercase())
        );
    }
}

#[test]
fn accepts_whole_range_and_keeps_spelling() {
    for value in 0..=100u32 {
        let number: SignalNumber = value.to_string().parse().expect("number");
        assert_eq!(number.value(), value);
        assert_eq!(number.as_str(), value.to_string());
    }

    let padded: SignalNumber = "007".parse().expect("padded");
    assert_eq!(padded.value(), 7);
    assert_eq!(padded.as_str(), "007");
}

#[test]
fn rejects_out_of_range_and_non_numeric() {
    assert!(matches!(
        "101".parse::<SignalNumber>(),
        Err(ParseNumberError::OutOfRange(_))
    ));
    assert!(matches!(
        "-1".parse::<SignalNumber>(),
        Err(ParseNumberError::OutOfRange(_))
    ));
    assert!(matches!(
        "99999999999999999999".parse::<SignalNumber>(),
        Err(ParseNumberError::OutOfRange(_))
    ));
    for raw in ["", "-", "abc", "4.5", " 7", "+7", "1e2"] {
        assert!(
            matches!(raw.parse::<SignalNumber>(), Err(ParseNumberError::NotNumeric(_))),
            "{raw:?} should be rejected as non-numeric"
        );
    }
}

#[test]
fn symbol_glyphs_match_pattern_notation() {
    assert_eq!(Symbol::Dot.glyph(), '·');
    assert_eq!(Symbol::Dash.glyph(), '−');
}
