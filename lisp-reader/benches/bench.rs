use criterion::*;

use lisp_reader::{expand, lex, parse, print, read};

const PROGRAM: &str = r#"
(defun double (x) (* x 2))
(defmacro swap (a b)
  `(let ((tmp ,a))
     (setq ,a ,b)
     (setq ,b tmp)))
(mapcar #'double '(1 2 3 4 5 6 7 8 9 10))
(print "done" '((a . 1) (b . 2) (c . 3)))
"#;

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| b.iter(|| black_box(lex::tokenize(PROGRAM))));
}

fn bench_parse(c: &mut Criterion) {
    let tokens = lex::tokenize(PROGRAM).unwrap();
    c.bench_function("parse", |b| {
        b.iter(|| black_box(parse::parse(tokens.iter().cloned())))
    });
}

fn bench_expand(c: &mut Criterion) {
    let raw = parse::from_str(PROGRAM).unwrap();
    c.bench_function("expand", |b| {
        b.iter(|| black_box(expand::expand_program(raw.clone())))
    });
}

fn bench_read(c: &mut Criterion) {
    c.bench_function("read", |b| b.iter(|| black_box(read(PROGRAM))));
}

fn bench_print(c: &mut Criterion) {
    let program = read(PROGRAM).unwrap();
    let options = print::Options::new().with_abbreviations(true);
    c.bench_function("print (abbreviated)", |b| {
        b.iter(|| black_box(print::program_to_string_custom(&program, options.clone())))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_tokenize, bench_parse, bench_expand, bench_read, bench_print
}
criterion_main!(benches);
