use lisp_reader::Form;
use lisp_reader_macros::form;

#[test]
fn test_integers() {
    assert_eq!(form!(123), Form::integer(123));
    assert_eq!(form!(-123), Form::integer(-123));
    assert_eq!(form!(1_000), Form::integer(1000));
}

#[test]
fn test_symbols() {
    assert_eq!(form!(foo), Form::symbol("foo"));
    assert_eq!(form!(#"a-symbol"), Form::symbol("a-symbol"));
    assert_eq!(form!(+), Form::symbol("+"));
    assert_eq!(form!(-), Form::symbol("-"));
    assert_eq!(form!(<=), Form::symbol("<="));
    assert_eq!(form!(.), Form::symbol("."));
}

#[test]
fn test_text() {
    assert_eq!(form!("hello"), Form::text("\"hello\""));
    assert_eq!(form!("a \"b\""), Form::text(r#""a \"b\"""#));
}

#[test]
fn test_lists() {
    assert_eq!(form!(()), Form::List(vec![]));
    assert_eq!(
        form!((a (b) "c" -1)),
        Form::list(vec![
            Form::symbol("a"),
            Form::list(vec![Form::symbol("b")]),
            Form::text("\"c\""),
            Form::integer(-1),
        ])
    );
    assert_eq!(
        form!((a . -64)),
        Form::list(vec![Form::symbol("a"), Form::symbol("."), Form::integer(-64)])
    );
}

#[test]
fn test_unquote() {
    let n = 42;
    let inner = form!((b c));
    assert_eq!(form!(,n), Form::integer(42));
    assert_eq!(form!((a ,inner ,(1 + 2))).to_string(), "(a (b c) 3)");
}

#[test]
fn test_matches_reader() {
    let program = lisp_reader::read("(let ((x 1) (y \"two\")) (list x y))").unwrap();
    assert_eq!(program, vec![form!((let ((x 1) (y "two")) (list x y)))]);
}
