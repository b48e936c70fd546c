//! Stylesheet parsing on top of `cssparser`.
//!
//! Qualified rules keep their raw prelude text for the selector parser and
//! their declarations as name/value strings. `@media` blocks are flattened:
//! each nested rule carries the (intersected) width condition it was parsed
//! under. Other at-rules are skipped.

use crate::media::MediaCondition;
use cssparser::AtRuleParser as CssAtRuleParser;
use cssparser::BasicParseErrorKind;
use cssparser::CowRcStr;
use cssparser::DeclarationParser as CssDeclarationParser;
use cssparser::ParseError;
use cssparser::Parser;
use cssparser::ParserInput;
use cssparser::ParserState;
use cssparser::QualifiedRuleParser as CssQualifiedRuleParser;
use cssparser::RuleBodyItemParser as CssRuleBodyItemParser;
use cssparser::RuleBodyParser as CssRuleBodyParser;
use cssparser::StyleSheetParser;

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub name: String,
    /// Raw value text, without the trailing `!important`.
    pub value: String,
    pub important: bool,
}

/// A style rule with its raw prelude, declarations, and the media
/// condition it is gated on, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRule {
    pub prelude: String,
    pub declarations: Vec<Declaration>,
    pub media: Option<MediaCondition>,
}

/// A parsed stylesheet: style rules in source order, media blocks
/// flattened into their member rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stylesheet {
    pub rules: Vec<StyleRule>,
}

/// Parse `!important` off the end of a value.
fn split_important_tail(value: &str) -> (String, bool) {
    let trimmed = value.trim();
    if let Some(pos) = trimmed.rfind("!important")
        && let Some(prefix) = trimmed.get(..pos)
    {
        return (prefix.trim_end().to_owned(), true);
    }
    (trimmed.to_owned(), false)
}

/// Declaration-list parser recording property names and raw values.
struct DeclParser;

impl CssDeclarationParser<'_> for DeclParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'input>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, '_>,
        _decl_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let (value, important) = split_important_tail(input.slice_from(start));
        Ok(Declaration {
            name: name.to_ascii_lowercase(),
            value,
            important,
        })
    }
}

impl CssAtRuleParser<'_> for DeclParser {
    type Prelude = ();
    type AtRule = Declaration; // Not produced
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        _name: CowRcStr<'input>,
        _input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok(())
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::AtRuleBodyInvalid))
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, Self::Error> {
        Err(())
    }
}

impl CssQualifiedRuleParser<'_> for DeclParser {
    type Prelude = ();
    type QualifiedRule = Declaration; // Not produced
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }
}

impl CssRuleBodyItemParser<'_, Declaration, ()> for DeclParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Collects style rules into a shared output vec, carrying the media
/// condition of the enclosing `@media` block, if any.
struct RuleCollector<'out> {
    rules: &'out mut Vec<StyleRule>,
    media: Option<MediaCondition>,
}

impl CssQualifiedRuleParser<'_> for RuleCollector<'_> {
    type Prelude = String; // raw selector text
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'input>(
        &mut self,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        let start = input.state();
        while input.next_including_whitespace_and_comments().is_ok() {}
        Ok(input.slice_from(start.position()).trim().to_owned())
    }

    fn parse_block<'input>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        let declarations = parse_declarations_from_block(input);
        self.rules.push(StyleRule {
            prelude,
            declarations,
            media: self.media,
        });
        Ok(())
    }
}

impl CssAtRuleParser<'_> for RuleCollector<'_> {
    type Prelude = MediaCondition;
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'input>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        if !name.eq_ignore_ascii_case("media") {
            return Err(input.new_error(BasicParseErrorKind::AtRuleInvalid(name)));
        }
        let start = input.state();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let condition = MediaCondition::parse(input.slice_from(start.position()));
        Ok(match self.media {
            Some(outer) => condition.intersect(outer),
            None => condition,
        })
    }

    fn parse_block<'input>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        let mut nested = RuleCollector {
            rules: &mut *self.rules,
            media: Some(prelude),
        };
        for result in CssRuleBodyParser::new(input, &mut nested) {
            if let Err((error, slice)) = result {
                log::debug!(target: "style", "skipping rule in media block: {error:?} at {slice:?}");
            }
        }
        Ok(())
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, Self::Error> {
        Err(())
    }
}

impl CssDeclarationParser<'_> for RuleCollector<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'input>(
        &mut self,
        _name: CowRcStr<'input>,
        input: &mut Parser<'input, '_>,
        _decl_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }
}

impl CssRuleBodyItemParser<'_, (), ()> for RuleCollector<'_> {
    fn parse_declarations(&self) -> bool {
        false
    }
    fn parse_qualified(&self) -> bool {
        true
    }
}

fn parse_declarations_from_block(block: &mut Parser) -> Vec<Declaration> {
    let mut out = Vec::new();
    let mut body = DeclParser;
    for decl in CssRuleBodyParser::new(block, &mut body).flatten() {
        out.push(decl);
    }
    out
}

/// Parse a declaration list on its own, as found in a `style` attribute.
pub fn parse_declaration_list(text: &str) -> Vec<Declaration> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_declarations_from_block(&mut parser)
}

/// Parse a full stylesheet.
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut sheet = Stylesheet::default();
    let mut collector = RuleCollector {
        rules: &mut sheet.rules,
        media: None,
    };
    for result in StyleSheetParser::new(&mut parser, &mut collector) {
        if let Err((error, slice)) = result {
            log::debug!(target: "style", "skipping top-level rule: {error:?} at {slice:?}");
        }
    }
    sheet
}
