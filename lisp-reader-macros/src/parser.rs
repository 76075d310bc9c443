use crate::tree::Tree;

use proc_macro2::{Delimiter, Literal, Spacing, TokenStream, TokenTree};

#[derive(Debug)]
struct Parser {
    tokens: Vec<TokenTree>,
    index: usize,
}

#[derive(Debug)]
pub enum ParseError {
    ExpectedStringLiteral(Literal),
    InvalidInteger(String),
    UnsupportedLiteral(Literal),
    UnexpectedChar(char),
    UnexpectedDelimiter(Delimiter),
    UnexpectedToken(TokenTree),
    TrailingToken(TokenTree),
    UnexpectedEnd,
}

/// Characters that may appear in symbols made up of punctuation.
fn is_symbol_punct(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '%' | '&' | '*' | '+' | '-' | '.' | '/' | ':' | '<' | '=' | '>' | '?' | '@'
            | '^' | '~'
    )
}

impl Parser {
    fn new(tokens: Vec<TokenTree>) -> Self {
        Parser { tokens, index: 0 }
    }

    fn next_token(&mut self) -> Option<&TokenTree> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    fn token(&mut self) -> Result<&TokenTree, ParseError> {
        self.next_token().ok_or(ParseError::UnexpectedEnd)
    }

    fn peek(&self) -> Option<&TokenTree> {
        self.tokens.get(self.index)
    }

    fn eat_token(&mut self) {
        self.index += 1;
    }

    fn parse(&mut self) -> Result<Tree, ParseError> {
        match self.token()? {
            TokenTree::Punct(punct) => {
                let c = punct.as_char();
                match c {
                    '#' => self.parse_octothorpe(),
                    ',' => Ok(Tree::Unquoted(self.token()?.clone())),
                    c if is_symbol_punct(c) => match punct.spacing() {
                        Spacing::Joint => Ok(Tree::Symbol(self.parse_identifier(c.to_string()))),
                        Spacing::Alone => match (c, self.peek()) {
                            ('-', Some(TokenTree::Literal(lit))) => {
                                let n = integer_literal(lit, true)?;
                                self.eat_token();
                                Ok(Tree::Integer(n))
                            }
                            _ => Ok(Tree::Symbol(c.to_string())),
                        },
                    },
                    c => Err(ParseError::UnexpectedChar(c)),
                }
            }
            TokenTree::Literal(lit) => parse_literal(lit),
            TokenTree::Ident(ident) => Ok(Tree::Symbol(ident.to_string())),
            TokenTree::Group(group) => match group.delimiter() {
                Delimiter::Parenthesis => parse_list(group.stream()),
                delim => Err(ParseError::UnexpectedDelimiter(delim)),
            },
        }
    }

    fn parse_identifier(&mut self, prefix: String) -> String {
        let mut identifier = prefix;
        while let Some(token) = self.peek() {
            match token {
                TokenTree::Punct(punct) if is_symbol_punct(punct.as_char()) => {
                    identifier.push(punct.as_char());
                    let spacing = punct.spacing();
                    self.eat_token();
                    if spacing == Spacing::Alone {
                        break;
                    }
                }
                TokenTree::Ident(part) => {
                    identifier.push_str(&part.to_string());
                    self.eat_token();
                    break;
                }
                _ => break,
            }
        }
        identifier
    }

    fn parse_octothorpe(&mut self) -> Result<Tree, ParseError> {
        match self.token()? {
            TokenTree::Literal(lit) => Ok(Tree::Symbol(string_literal(lit)?)),
            TokenTree::Punct(punct) => Err(ParseError::UnexpectedChar(punct.as_char())),
            token => Err(ParseError::UnexpectedToken(token.clone())),
        }
    }
}

fn parse_literal(lit: &Literal) -> Result<Tree, ParseError> {
    let repr = lit.to_string();
    if repr.starts_with('"') {
        Ok(Tree::Text(repr))
    } else if repr.starts_with(|c: char| c.is_ascii_digit()) {
        integer_literal(lit, false).map(Tree::Integer)
    } else {
        Err(ParseError::UnsupportedLiteral(lit.clone()))
    }
}

fn integer_literal(lit: &Literal, negated: bool) -> Result<i64, ParseError> {
    let digits: String = lit.to_string().chars().filter(|&c| c != '_').collect();
    let text = if negated {
        format!("-{}", digits)
    } else {
        digits
    };
    text.parse().map_err(|_| ParseError::InvalidInteger(text))
}

fn string_literal(lit: &Literal) -> Result<String, ParseError> {
    let s = lit.to_string();
    match s.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(name) => Ok(name.to_string()),
        None => Err(ParseError::ExpectedStringLiteral(lit.clone())),
    }
}

fn parse_list(tokens: TokenStream) -> Result<Tree, ParseError> {
    let mut elements = vec![];
    let mut parser = Parser::new(tokens.into_iter().collect());
    while parser.peek().is_some() {
        elements.push(parser.parse()?);
    }
    Ok(Tree::List(elements))
}

pub fn parse(tokens: TokenStream) -> Result<Tree, ParseError> {
    let mut parser = Parser::new(tokens.into_iter().collect());
    let tree = parser.parse()?;
    match parser.peek() {
        Some(token) => Err(ParseError::TrailingToken(token.clone())),
        None => Ok(tree),
    }
}
