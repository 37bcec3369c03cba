//! Single-pass template parser.
//!
//! Text outside braces is kept verbatim as literal components. Each `{...}`
//! region becomes an expression holding its operator and variable list.
//! Error positions are byte offsets into the template text.

use log::trace;

use crate::encoding::starts_with_triplet;
use crate::error::Error::{
    EmptyExpression, EmptyVariableName, InvalidPrefix, InvalidVariableName, NestedExpression,
    NonPositivePrefix, PrefixTooLong, UnterminatedExpression,
};
use crate::error::Result;
use crate::operator::Operator;
use crate::template::{Component, Modifier, Template, VarSpec, MAX_PREFIX_LENGTH};

/// Parses template text into a [`Template`].
///
/// # Errors
///
/// Returns an error if:
/// - An expression is not closed, or contains another `{`
/// - An expression has no variables
/// - A variable name is empty or contains characters outside `varname`
/// - A prefix length is not a number, is zero, or exceeds [`MAX_PREFIX_LENGTH`]
pub fn parse(text: &str) -> Result<Template> {
    let mut components = Vec::new();
    let mut position = 0;

    while let Some(offset) = text[position..].find('{') {
        let open = position + offset;
        if open > position {
            components.push(Component::Literal(text[position..open].to_string()));
        }

        let close = find_closing_brace(text, open)?;
        components.push(parse_expression(&text[open + 1..close], open)?);
        position = close + 1;
    }

    if position < text.len() {
        components.push(Component::Literal(text[position..].to_string()));
    }

    trace!("Parsed `{}` into {} components", text, components.len());

    Ok(Template::new(text.to_string(), components))
}

fn find_closing_brace(text: &str, open: usize) -> Result<usize> {
    let body_start = open + 1;

    match text.as_bytes()[body_start..]
        .iter()
        .position(|b| matches!(b, b'{' | b'}'))
    {
        Some(offset) if text.as_bytes()[body_start + offset] == b'}' => Ok(body_start + offset),
        Some(offset) => Err(NestedExpression(body_start + offset)),
        None => Err(UnterminatedExpression(open)),
    }
}

/// Parses the text between the braces. `open` is the offset of the `{`.
fn parse_expression(body: &str, open: usize) -> Result<Component> {
    let operator = body.chars().next().and_then(Operator::from_char);
    let (operator, variable_list) = match operator {
        Some(operator) => (operator, &body[1..]),
        None => (Operator::None, body),
    };

    if variable_list.is_empty() {
        return Err(EmptyExpression(open));
    }

    let mut position = open + 1 + (body.len() - variable_list.len());
    let mut varspecs = Vec::new();

    for token in variable_list.split(',') {
        varspecs.push(parse_varspec(token, position)?);
        position += token.len() + 1;
    }

    Ok(Component::Expression { operator, varspecs })
}

fn parse_varspec(token: &str, position: usize) -> Result<VarSpec> {
    let (name, modifier) = if let Some(name) = token.strip_suffix('*') {
        (name, Modifier::Explode)
    } else if let Some((name, digits)) = token.split_once(':') {
        let length = parse_prefix_length(digits, position + name.len() + 1)?;
        (name, Modifier::Prefix(length))
    } else {
        (token, Modifier::None)
    };

    if name.is_empty() {
        return Err(EmptyVariableName(position));
    }

    if !is_valid_name(name) {
        return Err(InvalidVariableName(name.to_string(), position));
    }

    Ok(VarSpec::new(name, modifier))
}

fn parse_prefix_length(digits: &str, position: usize) -> Result<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidPrefix(digits.to_string(), position));
    }

    // Only overflow can fail here, which is over the limit anyway
    match digits.parse::<usize>() {
        Ok(0) => Err(NonPositivePrefix(position)),
        Ok(length) if length <= MAX_PREFIX_LENGTH => Ok(length),
        _ => Err(PrefixTooLong(digits.to_string(), position)),
    }
}

/// RFC 6570 `varname`: letters, digits, `_` and `%XX` triplets, with single
/// dots allowed only between them.
fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut index = 0;
    let mut expecting_varchar = true;

    while index < bytes.len() {
        match bytes[index] {
            b'.' if !expecting_varchar => {
                expecting_varchar = true;
                index += 1;
            }
            b'%' if starts_with_triplet(&bytes[index..]) => {
                expecting_varchar = false;
                index += 3;
            }
            b if b.is_ascii_alphanumeric() || b == b'_' => {
                expecting_varchar = false;
                index += 1;
            }
            _ => return false,
        }
    }

    !expecting_varchar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn expression(operator: Operator, varspecs: &[(&str, Modifier)]) -> Component {
        Component::Expression {
            operator,
            varspecs: varspecs
                .iter()
                .map(|(name, modifier)| VarSpec::new(*name, *modifier))
                .collect(),
        }
    }

    #[test]
    fn test_parse_literal_only() {
        let template = parse("http://example.com/a%20b").unwrap();
        assert_eq!(
            template.components(),
            &[Component::Literal("http://example.com/a%20b".to_string())]
        );
    }

    #[test]
    fn test_parse_empty_template() {
        let template = parse("").unwrap();
        assert!(template.components().is_empty());
    }

    #[test]
    fn test_parse_mixed_components() {
        let template = parse("/users/{id}/posts{?page,limit}").unwrap();
        assert_eq!(
            template.components(),
            &[
                Component::Literal("/users/".to_string()),
                expression(Operator::None, &[("id", Modifier::None)]),
                Component::Literal("/posts".to_string()),
                expression(
                    Operator::Question,
                    &[("page", Modifier::None), ("limit", Modifier::None)]
                ),
            ]
        );
    }

    #[test]
    fn test_parse_adjacent_expressions_stay_separate() {
        let template = parse("{a}{b}").unwrap();
        assert_eq!(
            template.components(),
            &[
                expression(Operator::None, &[("a", Modifier::None)]),
                expression(Operator::None, &[("b", Modifier::None)]),
            ]
        );
    }

    #[test]
    fn test_parse_every_operator() {
        for (c, operator) in [
            ('+', Operator::Plus),
            ('#', Operator::Hash),
            ('.', Operator::Dot),
            ('/', Operator::Slash),
            (';', Operator::Semicolon),
            ('?', Operator::Question),
            ('&', Operator::Ampersand),
        ] {
            let template = parse(&format!("{{{c}var}}")).unwrap();
            assert_eq!(
                template.components(),
                &[expression(operator, &[("var", Modifier::None)])]
            );
        }
    }

    #[test]
    fn test_parse_modifiers() {
        let template = parse("{/var:1,list*,plain}").unwrap();
        assert_eq!(
            template.components(),
            &[expression(
                Operator::Slash,
                &[
                    ("var", Modifier::Prefix(1)),
                    ("list", Modifier::Explode),
                    ("plain", Modifier::None),
                ]
            )]
        );
    }

    #[test]
    fn test_parse_prefix_with_leading_zeros() {
        let template = parse("{var:007}").unwrap();
        assert_eq!(
            template.components(),
            &[expression(Operator::None, &[("var", Modifier::Prefix(7))])]
        );
    }

    #[test]
    fn test_parse_prefix_maximum() {
        assert!(parse("{var:10000}").is_ok());
        assert!(matches!(
            parse("{var:10001}"),
            Err(PrefixTooLong(digits, 5)) if digits == "10001"
        ));
        assert!(matches!(
            parse("{var:99999999999999999999999}"),
            Err(PrefixTooLong(_, 5))
        ));
    }

    #[test]
    fn test_parse_valid_names() {
        for name in ["a", "A_1", "_", "a.b", "a.b.c", "%20", "a%2Fb", "x.%41"] {
            assert!(parse(&format!("{{{name}}}")).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_parse_invalid_names() {
        for name in ["a-b", "a b", "a.", "a..b", "%2", "%zz", "é", "=a", "!a", "@a", "|a"] {
            let result = parse(&format!("{{{name}}}"));
            assert!(
                matches!(result, Err(InvalidVariableName(_, 1))),
                "{name} should be invalid, got {result:?}"
            );
        }
    }

    #[test]
    fn test_parse_unterminated() {
        assert_eq!(parse("{a"), Err(UnterminatedExpression(0)));
        assert_eq!(parse("x/{a,b"), Err(UnterminatedExpression(2)));
        assert_eq!(parse("{"), Err(UnterminatedExpression(0)));
    }

    #[test]
    fn test_parse_nested() {
        assert_eq!(parse("{a{b}}"), Err(NestedExpression(2)));
    }

    #[test]
    fn test_parse_empty_expression() {
        assert_eq!(parse("{}"), Err(EmptyExpression(0)));
        assert_eq!(parse("ab{+}"), Err(EmptyExpression(2)));
    }

    #[test]
    fn test_parse_empty_variable_names() {
        assert_eq!(parse("{,a}"), Err(EmptyVariableName(1)));
        assert_eq!(parse("{a,}"), Err(EmptyVariableName(3)));
        assert_eq!(parse("{?a,,b}"), Err(EmptyVariableName(4)));
        assert_eq!(parse("{*}"), Err(EmptyVariableName(1)));
        assert_eq!(parse("{:3}"), Err(EmptyVariableName(1)));
    }

    #[test]
    fn test_parse_bad_prefix() {
        assert_eq!(parse("{a:0}"), Err(NonPositivePrefix(3)));
        assert_eq!(parse("{a:000}"), Err(NonPositivePrefix(3)));
        assert!(matches!(parse("{a:}"), Err(InvalidPrefix(digits, 3)) if digits.is_empty()));
        assert!(matches!(parse("{a:x}"), Err(InvalidPrefix(digits, 3)) if digits == "x"));
        assert!(matches!(parse("{a:-1}"), Err(InvalidPrefix(_, 3))));
        assert!(matches!(parse("{a:3*}"), Err(InvalidVariableName(name, 1)) if name == "a:3"));
        assert!(matches!(parse("{a*:3}"), Err(InvalidVariableName(name, 1)) if name == "a*"));
    }

    #[test]
    fn test_parse_error_position_in_later_varspec() {
        let result = parse("/path{?first,bad name}");
        assert!(matches!(result, Err(InvalidVariableName(name, 13)) if name == "bad name"));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "http://example.com/{+path}{?q*,lang:2}#{frag}";
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    }

    #[test]
    fn test_parse_stray_closing_brace_is_literal() {
        let template = parse("a}b").unwrap();
        assert_eq!(template.components(), &[Component::Literal("a}b".to_string())]);
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("abc"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("."));
    }

    #[test]
    fn test_errors_are_syntax_errors() {
        let error: Error = parse("{a").unwrap_err();
        assert_eq!(error.position(), 0);
    }
}
