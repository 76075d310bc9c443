use super::*;

fn atoms(texts: &[&str]) -> Vec<Token> {
    texts.iter().map(|&text| Token::atom(text)).collect()
}

#[test]
fn test_atoms() {
    assert_eq!(
        tokenize("hello 24601 -6 \"hi\" world").unwrap(),
        atoms(&["hello", "24601", "-6", "\"hi\"", "world"])
    );
}

#[test]
fn test_parens_split_atoms() {
    assert_eq!(
        tokenize("(a)(b c)").unwrap(),
        vec![
            Token::LParen,
            Token::atom("a"),
            Token::RParen,
            Token::LParen,
            Token::atom("b"),
            Token::atom("c"),
            Token::RParen,
        ]
    );
}

#[test]
fn test_unbalanced_is_not_a_lexer_concern() {
    assert_eq!(
        tokenize(")))()(").unwrap(),
        vec![
            Token::RParen,
            Token::RParen,
            Token::RParen,
            Token::LParen,
            Token::RParen,
            Token::LParen,
        ]
    );
}

#[test]
fn test_markers() {
    assert_eq!(
        tokenize("'a `b ,c ,@d #'e").unwrap(),
        vec![
            Token::QuoteMark,
            Token::atom("a"),
            Token::BackquoteMark,
            Token::atom("b"),
            Token::UnquoteMark,
            Token::atom("c"),
            Token::UnquoteSplicingMark,
            Token::atom("d"),
            Token::FunctionMark,
            Token::atom("e"),
        ]
    );
}

#[test]
fn test_markers_split_atoms() {
    assert_eq!(
        tokenize("a'b,c#'d").unwrap(),
        vec![
            Token::atom("a"),
            Token::QuoteMark,
            Token::atom("b"),
            Token::UnquoteMark,
            Token::atom("c"),
            Token::FunctionMark,
            Token::atom("d"),
        ]
    );
}

#[test]
fn test_lone_octothorpe_is_atom_text() {
    assert_eq!(tokenize("#a a#b #").unwrap(), atoms(&["#a", "a#b", "#"]));
}

#[test]
fn test_splicing_before_unquote() {
    assert_eq!(
        tokenize(",@,@x").unwrap(),
        vec![
            Token::UnquoteSplicingMark,
            Token::UnquoteSplicingMark,
            Token::atom("x"),
        ]
    );
    assert_eq!(
        tokenize(", @x").unwrap(),
        vec![Token::UnquoteMark, Token::atom("@x")]
    );
}

#[test]
fn test_strings_keep_quotes_and_escapes() {
    let input = r#"  "hello \"sons\" \\slashdaughters (and others)"  "#;
    assert_eq!(tokenize(input).unwrap(), atoms(&[input.trim()]));
    assert_eq!(
        tokenize("(print \"a b\")").unwrap(),
        vec![
            Token::LParen,
            Token::atom("print"),
            Token::atom("\"a b\""),
            Token::RParen,
        ]
    );
}

#[test]
fn test_string_ends_atom() {
    assert_eq!(tokenize("ab\"cd\"ef").unwrap(), atoms(&["ab", "\"cd\"", "ef"]));
}

#[test]
fn test_non_ascii() {
    assert_eq!(
        tokenize("\"あ\" λ→x").unwrap(),
        atoms(&["\"あ\"", "λ→x"])
    );
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        tokenize("\"hello").unwrap_err(),
        LexError::UnterminatedString {
            location: Location::new(1, 1)
        }
    );
    // The closing quote is escaped.
    assert!(tokenize("\"hello\\\"").is_err());
}

#[test]
fn test_locations() {
    let lexemes = lex("(a\n  \"b\"\n\t)").unwrap();
    let locations: Vec<_> = lexemes
        .iter()
        .map(|lexeme| {
            let location = lexeme.location.unwrap();
            (location.line(), location.column())
        })
        .collect();
    assert_eq!(locations, vec![(1, 1), (1, 2), (2, 3), (3, 2)]);

    assert_eq!(
        lex("(a\n  \"b").unwrap_err().location(),
        Location::new(2, 3)
    );
}

#[test]
fn test_lexer_stops_after_error() {
    let mut lexer = Lexer::new("a \"b");
    assert!(matches!(lexer.next(), Some(Ok(_))));
    assert!(matches!(lexer.next(), Some(Err(_))));
    assert!(lexer.next().is_none());
}

#[test]
fn test_semicolon_is_atom_text_by_default() {
    assert_eq!(tokenize("a;b ;c").unwrap(), atoms(&["a;b", ";c"]));
}

#[test]
fn test_line_comments() {
    let options = Options::new().with_line_comments(true);
    let tokens: Vec<Token> = lex_custom("(a ; comment (\n b);tail", options)
        .unwrap()
        .into_iter()
        .map(|lexeme| lexeme.token)
        .collect();
    assert_eq!(
        tokens,
        vec![Token::LParen, Token::atom("a"), Token::atom("b"), Token::RParen]
    );
}

#[test]
fn test_display() {
    let text: Vec<String> = tokenize("(#'f ,@x)")
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(text, vec!["(", "#'", "f", ",@", "x", ")"]);
}
