//! Reader for the Turtle subset the writer emits.
//!
//! Supports `@prefix` directives, one triple per line, prefixed names,
//! `<iri>` references, the `a` keyword, and typed literals. Used to
//! verify serialize/reparse idempotence; not a general Turtle parser.

use std::collections::HashMap;

use crate::{TurtleError, TurtleResult};

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Object position of a parsed triple, with IRIs fully expanded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParsedTerm {
    Iri(String),
    Literal { value: String, datatype: String },
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: ParsedTerm,
}

#[derive(Debug)]
enum Token {
    IriRef(String),
    Pname(String),
    Literal { value: String, datatype: String },
    A,
    Dot,
}

/// Parse a Turtle document (writer subset) into expanded triples.
pub fn parse(text: &str) -> TurtleResult<Vec<Triple>> {
    let mut prefixes: HashMap<String, String> = HashMap::new();
    let mut triples = Vec::new();

    for (i, raw_line) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("@prefix") {
            let (prefix, iri) = parse_prefix_directive(rest, line)?;
            prefixes.insert(prefix, iri);
            continue;
        }

        let tokens = tokenize(trimmed, line)?;
        let [s, p, o, Token::Dot] = &tokens[..] else {
            return Err(TurtleError::Parse {
                line,
                what: format!("expected 'subject predicate object .', got {} tokens", tokens.len()),
            });
        };

        let subject = expand_term(s, &prefixes, line)?;
        let predicate = match p {
            Token::A => RDF_TYPE.to_string(),
            other => expand_term(other, &prefixes, line)?,
        };
        let object = match o {
            Token::Literal { value, datatype } => ParsedTerm::Literal {
                value: value.clone(),
                datatype: expand_name(datatype, &prefixes, line)?,
            },
            other => ParsedTerm::Iri(expand_term(other, &prefixes, line)?),
        };
        triples.push(Triple {
            subject,
            predicate,
            object,
        });
    }
    Ok(triples)
}

fn parse_prefix_directive(rest: &str, line: usize) -> TurtleResult<(String, String)> {
    // `@prefix name: <iri> .`
    let rest = rest.trim();
    let Some((name, remainder)) = rest.split_once(':') else {
        return Err(TurtleError::Parse {
            line,
            what: "missing ':' in @prefix directive".into(),
        });
    };
    let remainder = remainder.trim().trim_end_matches('.').trim();
    if !(remainder.starts_with('<') && remainder.ends_with('>')) {
        return Err(TurtleError::Parse {
            line,
            what: "expected <iri> in @prefix directive".into(),
        });
    }
    Ok((
        name.trim().to_string(),
        remainder[1..remainder.len() - 1].to_string(),
    ))
}

fn tokenize(line_text: &str, line: usize) -> TurtleResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line_text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' => {
                chars.next();
            }
            '<' => {
                chars.next();
                let mut iri = String::new();
                loop {
                    match chars.next() {
                        Some('>') => break,
                        Some(ch) => iri.push(ch),
                        None => {
                            return Err(TurtleError::Parse {
                                line,
                                what: "unterminated IRI reference".into(),
                            });
                        }
                    }
                }
                tokens.push(Token::IriRef(iri));
            }
            '"' => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some('\\') => value.push('\\'),
                            Some('"') => value.push('"'),
                            Some('n') => value.push('\n'),
                            Some('r') => value.push('\r'),
                            Some('t') => value.push('\t'),
                            other => {
                                return Err(TurtleError::Parse {
                                    line,
                                    what: format!("bad escape sequence: \\{:?}", other),
                                });
                            }
                        },
                        Some(ch) => value.push(ch),
                        None => {
                            return Err(TurtleError::Parse {
                                line,
                                what: "unterminated string literal".into(),
                            });
                        }
                    }
                }
                // Datatype suffix is mandatory in the writer subset.
                if !(chars.next() == Some('^') && chars.next() == Some('^')) {
                    return Err(TurtleError::Parse {
                        line,
                        what: "literal missing ^^datatype suffix".into(),
                    });
                }
                let mut datatype = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch == ' ' || ch == '\t' {
                        break;
                    }
                    datatype.push(ch);
                    chars.next();
                }
                tokens.push(Token::Literal { value, datatype });
            }
            _ => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch == ' ' || ch == '\t' {
                        break;
                    }
                    word.push(ch);
                    chars.next();
                }
                tokens.push(match word.as_str() {
                    "a" => Token::A,
                    "." => Token::Dot,
                    _ => Token::Pname(word),
                });
            }
        }
    }
    Ok(tokens)
}

fn expand_term(token: &Token, prefixes: &HashMap<String, String>, line: usize) -> TurtleResult<String> {
    match token {
        Token::IriRef(iri) => Ok(iri.clone()),
        Token::Pname(name) => expand_name(name, prefixes, line),
        other => Err(TurtleError::Parse {
            line,
            what: format!("expected an IRI or prefixed name, got {:?}", other),
        }),
    }
}

fn expand_name(name: &str, prefixes: &HashMap<String, String>, line: usize) -> TurtleResult<String> {
    if name.starts_with('<') && name.ends_with('>') {
        return Ok(name[1..name.len() - 1].to_string());
    }
    let Some((prefix, local)) = name.split_once(':') else {
        return Err(TurtleError::Parse {
            line,
            what: format!("'{}' is not a prefixed name", name),
        });
    };
    let Some(base) = prefixes.get(prefix) else {
        return Err(TurtleError::UnknownPrefix {
            prefix: prefix.to_string(),
            line,
        });
    };
    Ok(format!("{}{}", base, local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::escape_literal;
    use proptest::prelude::*;

    const HEADER: &str = "@prefix sso: <http://example.org/sso#> .\n\
                          @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\
                          @prefix inst: <http://example.org/> .\n";

    #[test]
    fn parses_prefixed_triple() {
        let text = format!("{HEADER}inst:Steel sso:material_name \"Steel\"^^xsd:string .\n");
        let triples = parse(&text).unwrap();
        assert_eq!(
            triples,
            vec![Triple {
                subject: "http://example.org/Steel".into(),
                predicate: "http://example.org/sso#material_name".into(),
                object: ParsedTerm::Literal {
                    value: "Steel".into(),
                    datatype: "http://www.w3.org/2001/XMLSchema#string".into(),
                },
            }]
        );
    }

    #[test]
    fn a_expands_to_rdf_type() {
        let text = format!("{HEADER}inst:Steel a sso:Material .\n");
        let triples = parse(&text).unwrap();
        assert_eq!(triples[0].predicate, RDF_TYPE);
        assert_eq!(
            triples[0].object,
            ParsedTerm::Iri("http://example.org/sso#Material".into())
        );
    }

    #[test]
    fn empty_local_name_is_the_namespace() {
        let text = format!("{HEADER}sso: a sso:Thing .\n");
        let triples = parse(&text).unwrap();
        assert_eq!(triples[0].subject, "http://example.org/sso#");
    }

    #[test]
    fn full_iri_subject_and_object() {
        let text = format!("{HEADER}<http://x.org/a> sso:sees <http://x.org/b> .\n");
        let triples = parse(&text).unwrap();
        assert_eq!(triples[0].subject, "http://x.org/a");
        assert_eq!(triples[0].object, ParsedTerm::Iri("http://x.org/b".into()));
    }

    #[test]
    fn escaped_literal_round_trips() {
        let text = format!(
            "{HEADER}inst:x sso:name \"line\\nbreak \\\"q\\\" \\\\end\"^^xsd:string .\n"
        );
        let triples = parse(&text).unwrap();
        let ParsedTerm::Literal { value, .. } = &triples[0].object else {
            panic!("expected literal");
        };
        assert_eq!(value, "line\nbreak \"q\" \\end");
    }

    #[test]
    fn unknown_prefix_is_an_error() {
        let text = "inst:x inst:y inst:z .\n";
        assert!(matches!(
            parse(text),
            Err(TurtleError::UnknownPrefix { .. })
        ));
    }

    #[test]
    fn garbage_line_is_a_parse_error() {
        let text = format!("{HEADER}inst:x sso:name .\n");
        assert!(matches!(parse(&text), Err(TurtleError::Parse { .. })));
    }

    proptest! {
        #[test]
        fn escape_then_unescape_is_identity(value in "\\PC*") {
            let text = format!(
                "{HEADER}inst:x sso:name \"{}\"^^xsd:string .\n",
                escape_literal(&value)
            );
            let triples = parse(&text).unwrap();
            prop_assert_eq!(
                &triples[0].object,
                &ParsedTerm::Literal {
                    value: value.clone(),
                    datatype: "http://www.w3.org/2001/XMLSchema#string".to_string(),
                }
            );
        }
    }
}
