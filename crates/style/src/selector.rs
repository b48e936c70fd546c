//! Selector model, parsing, and specificity.
//!
//! Covers the subset of Selectors Level 3 the resolver matches against:
//! type, universal, id, class, and attribute selectors, joined by the four
//! combinators and grouped by commas. Pseudo-classes and pseudo-elements
//! are not supported; a prelude using them fails to parse and the rule is
//! skipped.

/// One simple selector inside a compound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimpleSelector {
    Universal,
    /// Lowercased element type name.
    Type(String),
    Id(String),
    Class(String),
    AttrExists(String),
    AttrEquals { name: String, value: String },
}

/// A run of simple selectors with no combinator between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    pub simples: Vec<SimpleSelector>,
}

/// Combinator between two compounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    NextSibling,
    SubsequentSibling,
}

/// Compounds joined left-to-right by combinators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexSelector {
    pub first: CompoundSelector,
    pub rest: Vec<(Combinator, CompoundSelector)>,
}

/// A comma-separated selector list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

/// Specificity triple (id, class/attribute, type).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity(pub u16, pub u16, pub u16);

/// Specificity of a compound selector.
pub fn specificity_of_compound(compound: &CompoundSelector) -> Specificity {
    let mut id_count = 0u16;
    let mut class_attr_count = 0u16;
    let mut type_count = 0u16;
    for simple in &compound.simples {
        match simple {
            SimpleSelector::Id(_) => id_count = id_count.saturating_add(1),
            SimpleSelector::Class(_)
            | SimpleSelector::AttrExists(_)
            | SimpleSelector::AttrEquals { .. } => {
                class_attr_count = class_attr_count.saturating_add(1);
            }
            SimpleSelector::Type(_) => type_count = type_count.saturating_add(1),
            SimpleSelector::Universal => {}
        }
    }
    Specificity(id_count, class_attr_count, type_count)
}

/// Specificity of a complex selector (sum of its compounds).
pub fn specificity_of_complex(selector: &ComplexSelector) -> Specificity {
    let mut total = specificity_of_compound(&selector.first);
    for (_combinator, compound) in &selector.rest {
        let part = specificity_of_compound(compound);
        total.0 = total.0.saturating_add(part.0);
        total.1 = total.1.saturating_add(part.1);
        total.2 = total.2.saturating_add(part.2);
    }
    total
}

/// Parse a comma-separated selector list. Returns `None` if any selector
/// in the list fails to parse, so the whole rule can be skipped.
pub fn parse_selector_list(input: &str) -> Option<SelectorList> {
    let mut selectors = Vec::new();
    for part in input.split(',') {
        selectors.push(parse_complex(part.trim())?);
    }
    if selectors.is_empty() {
        return None;
    }
    Some(SelectorList { selectors })
}

enum Piece {
    Compound(String),
    Link(Combinator),
}

fn split_pieces(input: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut buffer = String::new();
    let mut in_brackets = false;
    for ch in input.chars() {
        match ch {
            '[' => {
                in_brackets = true;
                buffer.push(ch);
            }
            ']' => {
                in_brackets = false;
                buffer.push(ch);
            }
            '>' | '+' | '~' if !in_brackets => {
                flush_compound(&mut pieces, &mut buffer);
                // An explicit combinator replaces the descendant link implied
                // by surrounding whitespace.
                if matches!(pieces.last(), Some(Piece::Link(Combinator::Descendant))) {
                    drop(pieces.pop());
                }
                let combinator = match ch {
                    '>' => Combinator::Child,
                    '+' => Combinator::NextSibling,
                    _ => Combinator::SubsequentSibling,
                };
                pieces.push(Piece::Link(combinator));
            }
            ch if ch.is_whitespace() && !in_brackets => {
                flush_compound(&mut pieces, &mut buffer);
                if matches!(pieces.last(), Some(Piece::Compound(_))) {
                    pieces.push(Piece::Link(Combinator::Descendant));
                }
            }
            _ => buffer.push(ch),
        }
    }
    flush_compound(&mut pieces, &mut buffer);
    pieces
}

fn flush_compound(pieces: &mut Vec<Piece>, buffer: &mut String) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        pieces.push(Piece::Compound(trimmed.to_owned()));
    }
    buffer.clear();
}

fn parse_complex(input: &str) -> Option<ComplexSelector> {
    let mut pieces = split_pieces(input).into_iter();
    let first = match pieces.next()? {
        Piece::Compound(text) => parse_compound(&text)?,
        Piece::Link(_) => return None,
    };
    let mut rest = Vec::new();
    let mut pending: Option<Combinator> = None;
    for piece in pieces {
        match piece {
            Piece::Link(combinator) => pending = Some(combinator),
            Piece::Compound(text) => {
                let combinator = pending.take().unwrap_or(Combinator::Descendant);
                rest.push((combinator, parse_compound(&text)?));
            }
        }
    }
    // A dangling combinator like "div >" is malformed.
    if pending.is_some() {
        return None;
    }
    Some(ComplexSelector { first, rest })
}

fn parse_compound(text: &str) -> Option<CompoundSelector> {
    let chars: Vec<char> = text.chars().collect();
    let mut simples = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        match chars[pos] {
            '*' => {
                simples.push(SimpleSelector::Universal);
                pos += 1;
            }
            '.' => {
                pos += 1;
                simples.push(SimpleSelector::Class(take_ident(&chars, &mut pos)?));
            }
            '#' => {
                pos += 1;
                simples.push(SimpleSelector::Id(take_ident(&chars, &mut pos)?));
            }
            '[' => {
                pos += 1;
                simples.push(parse_attr(&chars, &mut pos)?);
            }
            _ => {
                let name = take_ident(&chars, &mut pos)?;
                simples.push(SimpleSelector::Type(name.to_ascii_lowercase()));
            }
        }
    }
    if simples.is_empty() {
        return None;
    }
    Some(CompoundSelector { simples })
}

fn parse_attr(chars: &[char], pos: &mut usize) -> Option<SimpleSelector> {
    let start = *pos;
    while *pos < chars.len() && chars[*pos] != ']' {
        *pos += 1;
    }
    if *pos >= chars.len() {
        return None;
    }
    let inner: String = chars.get(start..*pos)?.iter().collect();
    *pos += 1;
    let simple = match inner.split_once('=') {
        Some((name, value)) => SimpleSelector::AttrEquals {
            name: name.trim().to_ascii_lowercase(),
            value: value
                .trim()
                .trim_matches(|ch| ch == '"' || ch == '\'')
                .to_owned(),
        },
        None => {
            let name = inner.trim();
            if name.is_empty() {
                return None;
            }
            SimpleSelector::AttrExists(name.to_ascii_lowercase())
        }
    };
    Some(simple)
}

fn take_ident(chars: &[char], pos: &mut usize) -> Option<String> {
    let start = *pos;
    while *pos < chars.len() {
        let ch = chars[*pos];
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            *pos += 1;
        } else {
            break;
        }
    }
    if *pos == start {
        return None;
    }
    Some(chars.get(start..*pos)?.iter().collect())
}
