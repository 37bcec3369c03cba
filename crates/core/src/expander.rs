//! Template expansion.
//!
//! Literals are re-emitted with unsafe characters encoded. Each expression
//! renders its defined variables, joins them with the operator's separator
//! and prepends the operator's `first` marker. Undefined variables leave no
//! trace, not even a separator.

use itertools::Itertools;
use log::trace;

use crate::encoding::{encode, encode_literal, truncate, truncate_reserved};
use crate::operator::Operator;
use crate::template::{Component, Modifier, Template, VarSpec};
use crate::value::{Bindings, Value};

/// Expands `template` against `bindings`.
///
/// Missing variables and variables bound to [`Value::Undefined`] or to an
/// empty list contribute nothing. Expansion cannot fail.
#[must_use]
pub fn expand<B: Bindings + ?Sized>(template: &Template, bindings: &B) -> String {
    let mut expanded = String::with_capacity(template.as_str().len());

    for component in template.components() {
        match component {
            Component::Literal(text) => expanded.push_str(&encode_literal(text)),
            Component::Expression { operator, varspecs } => {
                expanded.push_str(&expand_expression(*operator, varspecs, bindings));
            }
        }
    }

    expanded
}

fn expand_expression<B: Bindings + ?Sized>(
    operator: Operator,
    varspecs: &[VarSpec],
    bindings: &B,
) -> String {
    let rendered: Vec<String> = varspecs
        .iter()
        .filter_map(|varspec| {
            let value = bindings.lookup(&varspec.name).filter(|value| value.is_defined())?;
            Some(render_varspec(operator, varspec, value))
        })
        .collect();

    if rendered.is_empty() {
        trace!("No defined variables in expression, skipping");
        return String::new();
    }

    format!("{}{}", operator.first(), rendered.join(operator.separator()))
}

fn render_varspec(operator: Operator, varspec: &VarSpec, value: &Value) -> String {
    let allow_reserved = operator.allow_reserved();
    let explode = varspec.modifier == Modifier::Explode;

    match value {
        Value::Undefined => String::new(),

        Value::Scalar(scalar) => {
            let scalar = match varspec.modifier {
                Modifier::Prefix(length) if allow_reserved => truncate_reserved(scalar, length),
                Modifier::Prefix(length) => truncate(scalar, length),
                Modifier::None | Modifier::Explode => scalar,
            };
            named_pair(operator, &varspec.name, &encode(scalar, allow_reserved))
        }

        Value::List(items) if explode => items
            .iter()
            .map(|item| {
                let item = encode(item, allow_reserved);
                if operator.named() {
                    named_pair(operator, &varspec.name, &item)
                } else {
                    item
                }
            })
            .join(operator.separator()),

        Value::List(items) => {
            let joined = items
                .iter()
                .map(|item| encode(item, allow_reserved))
                .join(",");
            named_pair(operator, &varspec.name, &joined)
        }

        Value::AssocList(pairs) if explode => pairs
            .iter()
            .map(|(key, value)| {
                let key = encode(key, allow_reserved);
                let value = encode(value, allow_reserved);
                if operator.named() {
                    named_pair(operator, &key, &value)
                } else {
                    format!("{key}={value}")
                }
            })
            .join(operator.separator()),

        Value::AssocList(pairs) => {
            let joined = pairs
                .iter()
                .flat_map(|(key, value)| [key, value])
                .map(|part| encode(part, allow_reserved))
                .join(",");
            named_pair(operator, &varspec.name, &joined)
        }
    }
}

/// `name=value` for named operators, `name` plus the empty suffix when the
/// value is empty, and the bare value otherwise.
fn named_pair(operator: Operator, name: &str, encoded: &str) -> String {
    if !operator.named() {
        encoded.to_string()
    } else if encoded.is_empty() {
        format!("{name}{}", operator.if_empty())
    } else {
        format!("{name}={encoded}")
    }
}
