use super::*;
use crate::parse;

fn abbreviated(form: &Form) -> String {
    to_string_custom(form, Options::new().with_abbreviations(true)).unwrap()
}

#[test]
fn test_options_size() {
    assert!(std::mem::size_of::<Options>() <= std::mem::size_of::<u32>());
}

#[test]
fn test_atoms() {
    assert_eq!(to_string(&Form::integer(-17)).unwrap(), "-17");
    assert_eq!(to_string(&Form::integer(i64::MIN)).unwrap(), "-9223372036854775808");
    assert_eq!(to_string(&Form::symbol("a-symbol")).unwrap(), "a-symbol");
    assert_eq!(to_string(&Form::text(r#""a \"b\"""#)).unwrap(), r#""a \"b\"""#);
    assert_eq!(to_string(&Form::marker(Marker::UnquoteSplicing)).unwrap(), ",@");
}

#[test]
fn test_lists() {
    let form = Form::list(vec![
        Form::symbol("a"),
        Form::list(Vec::<Form>::new()),
        Form::list(vec![1, 2]),
    ]);
    assert_eq!(to_string(&form).unwrap(), "(a () (1 2))");
    assert_eq!(to_vec(&form).unwrap(), b"(a () (1 2))".to_vec());
}

#[test]
fn test_raw_markers() {
    let raw = parse::from_str("(f 'a `(b ,c ,@d) #'g)").unwrap();
    assert_eq!(
        to_string(&raw[0]).unwrap(),
        "(f ' a ` (b , c ,@ d) #' g)"
    );
    assert_eq!(
        parse::from_str(&program_to_string(&raw).unwrap()).unwrap(),
        raw
    );
}

#[test]
fn test_abbreviations() {
    let expanded = crate::read("(f 'a `(b ,c ,@d) #'g)").unwrap();
    assert_eq!(abbreviated(&expanded[0]), "(f 'a '(b ,c ,@d) #'g)");
    assert_eq!(
        abbreviated(&Form::tagged("quasiquote", Form::symbol("x"))),
        "`x"
    );
    assert_eq!(abbreviated(&crate::read("''a").unwrap()[0]), "''a");
}

#[test]
fn test_no_abbreviation_by_default() {
    let form = Form::tagged("quote", Form::symbol("a"));
    assert_eq!(to_string(&form).unwrap(), "(quote a)");
}

#[test]
fn test_abbreviation_needs_two_elements() {
    let form = Form::list(vec![Form::symbol("quote"), Form::symbol("a"), Form::symbol("b")]);
    assert_eq!(abbreviated(&form), "(quote a b)");
    assert_eq!(abbreviated(&Form::list(vec![Form::symbol("quote")])), "(quote)");
    assert_eq!(
        abbreviated(&Form::tagged("quote", Form::marker(Marker::Quote))),
        "(quote ')"
    );
}

#[test]
fn test_unquote_at_symbol() {
    let form = Form::tagged("unquote", Form::symbol("@x"));
    let printed = abbreviated(&form);
    assert_eq!(printed, ", @x");
    assert_eq!(crate::read(&printed).unwrap(), vec![form]);
}

#[test]
fn test_program_to_string() {
    let program = crate::read("(a 'b)\n\n  c").unwrap();
    assert_eq!(
        program_to_string(&program).unwrap(),
        "(a (quote b))\nc\n"
    );
    assert_eq!(
        program_to_string_custom(&program, Options::new().with_abbreviations(true)).unwrap(),
        "(a 'b)\nc\n"
    );
    assert_eq!(program_to_string(&[]).unwrap(), "");
}

#[test]
fn test_printer_into_inner() {
    let mut printer = Printer::new(Vec::new());
    printer.print(&Form::symbol("x")).unwrap();
    printer.print(&Form::integer(1)).unwrap();
    assert_eq!(printer.into_inner(), b"x1".to_vec());
}
