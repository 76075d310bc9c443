use super::*;

fn sym(name: &str) -> Form {
    Form::symbol(name)
}

fn int(n: i64) -> Form {
    Form::integer(n)
}

fn list(elements: Vec<Form>) -> Form {
    Form::List(elements)
}

#[test]
fn test_atoms() {
    assert_eq!(from_str("foo").unwrap(), vec![sym("foo")]);
    assert_eq!(from_str("42").unwrap(), vec![int(42)]);
    assert_eq!(from_str("-42").unwrap(), vec![int(-42)]);
    assert_eq!(from_str("-").unwrap(), vec![sym("-")]);
    assert_eq!(from_str("1+").unwrap(), vec![sym("1+")]);
    assert_eq!(from_str("\"a\"").unwrap(), vec![Form::text("\"a\"")]);
}

#[test]
fn test_lists() {
    assert_eq!(
        from_str("(+ 1 2)").unwrap(),
        vec![list(vec![sym("+"), int(1), int(2)])]
    );
    assert_eq!(
        from_str("(+ (+ 1 2) 3)").unwrap(),
        vec![list(vec![
            sym("+"),
            list(vec![sym("+"), int(1), int(2)]),
            int(3)
        ])]
    );
    assert_eq!(
        from_str("(defun double (x) (* x 2))").unwrap(),
        vec![list(vec![
            sym("defun"),
            sym("double"),
            list(vec![sym("x")]),
            list(vec![sym("*"), sym("x"), int(2)]),
        ])]
    );
    assert_eq!(from_str("()").unwrap(), vec![list(vec![])]);
    assert_eq!(from_str("(())").unwrap(), vec![list(vec![list(vec![])])]);
}

#[test]
fn test_multiple_top_level_forms() {
    assert_eq!(
        from_str("(define x 3)\n(+ x 4)\n").unwrap(),
        vec![
            list(vec![sym("define"), sym("x"), int(3)]),
            list(vec![sym("+"), sym("x"), int(4)]),
        ]
    );
    assert_eq!(from_str("  \n\t ").unwrap(), vec![]);
}

#[test]
fn test_markers_stay_siblings() {
    assert_eq!(
        from_str("'a").unwrap(),
        vec![Form::marker(Marker::Quote), sym("a")]
    );
    assert_eq!(
        from_str("`(a ,@b c)").unwrap(),
        vec![
            Form::marker(Marker::Quasiquote),
            list(vec![
                sym("a"),
                Form::marker(Marker::UnquoteSplicing),
                sym("b"),
                sym("c"),
            ]),
        ]
    );
    assert_eq!(
        from_str("#'double").unwrap(),
        vec![Form::marker(Marker::Function), sym("double")]
    );
}

#[test]
fn test_dot_is_a_symbol() {
    assert_eq!(
        from_str("(a . 2)").unwrap(),
        vec![list(vec![sym("a"), sym("."), int(2)])]
    );
}

#[test]
fn test_unexpected_end() {
    let err = parse(lex::lex("(+ 1 2").unwrap()).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEnd {
            location: Some(Location::new(1, 1))
        }
    );
    // The innermost unclosed list is reported.
    let err = parse(lex::lex("(a\n (b c)\n (d").unwrap()).unwrap_err();
    assert_eq!(err.location(), Some(Location::new(3, 2)));
}

#[test]
fn test_unmatched_close() {
    assert_eq!(
        parse(vec![Token::RParen]).unwrap_err(),
        ParseError::UnmatchedClose { location: None }
    );
    let err = parse(lex::lex("(a))").unwrap()).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnmatchedClose {
            location: Some(Location::new(1, 4))
        }
    );
}

#[test]
fn test_first_error_wins() {
    // The stray close paren comes before the unclosed list.
    let err = parse(lex::lex(") (a").unwrap()).unwrap_err();
    assert!(matches!(err, ParseError::UnmatchedClose { .. }));
}

#[test]
fn test_number_out_of_range() {
    assert_eq!(
        from_str("9223372036854775807").unwrap(),
        vec![int(i64::MAX)]
    );
    assert_eq!(
        from_str("-9223372036854775808").unwrap(),
        vec![int(i64::MIN)]
    );
    let err = parse(vec![Token::atom("9223372036854775808")]).unwrap_err();
    assert!(matches!(err, ParseError::NumberOutOfRange { .. }));
}

#[test]
fn test_recursion_limit() {
    let options = Options::new().with_max_depth(3);
    let nested = |depth: usize| {
        let mut tokens = vec![Token::LParen; depth];
        tokens.extend(vec![Token::RParen; depth]);
        tokens
    };
    assert!(parse_custom(nested(3), options.clone()).is_ok());
    assert_eq!(
        parse_custom(nested(4), options).unwrap_err(),
        ParseError::RecursionLimitExceeded {
            limit: 3,
            location: None
        }
    );
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let text = format!("{}{}", "(".repeat(100_000), ")".repeat(100_000));
    let err = from_str(&text).unwrap_err();
    assert!(err.is_syntax());
    assert!(matches!(
        err.as_parse(),
        Some(ParseError::RecursionLimitExceeded { .. })
    ));
}

#[test]
fn test_parser_parse_form() {
    let mut parser = Parser::new(vec![Lexeme::from(Token::atom("x"))].into_iter());
    assert!(!parser.is_at_end());
    assert_eq!(parser.parse_form().unwrap(), sym("x"));
    assert!(parser.is_at_end());
    assert_eq!(
        parser.parse_form().unwrap_err(),
        ParseError::UnexpectedEnd { location: None }
    );
}

#[test]
fn test_error_messages() {
    let err = from_str("(a\n  (b").unwrap_err();
    assert_eq!(err.to_string(), "EOF while parsing a list at line 2 column 3");
    assert_eq!(
        ParseError::UnmatchedClose { location: None }.to_string(),
        "unmatched closing parenthesis"
    );
}
