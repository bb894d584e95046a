//! Positional placeholder substitution for message templates.
//!
//! Grammar: `{N}`, `{N,number}` or `{N,string}` with `N` a decimal index into the
//! argument list. Whitespace inside the braces is not allowed. Any other brace text is
//! kept as literal text.

use super::error::{FormatError, MismatchReason};
use serde_json::Value;

/// Restricts which argument kinds a placeholder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgStyle {
    /// Any scalar value.
    Any,
    /// JSON numbers only.
    Number,
    /// JSON strings only.
    String,
}

impl ArgStyle {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSegment {
    Literal(String),
    Arg { index: usize, style: ArgStyle },
}

/// A template split into literal text and placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    segments: Vec<MessageSegment>,
}

impl MessageTemplate {
    /// Never fails: malformed placeholders become literal text.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            current.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let placeholder = after
                .find('}')
                .and_then(|close| Self::match_placeholder(&after[..close]).map(|seg| (seg, close)));

            if let Some((segment, close)) = placeholder {
                if !current.is_empty() {
                    segments.push(MessageSegment::Literal(std::mem::take(&mut current)));
                }
                segments.push(segment);
                rest = &after[close + 1..];
            } else {
                current.push('{');
                rest = after;
            }
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(MessageSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(body: &str) -> Option<MessageSegment> {
        let (index, style) = match body.split_once(',') {
            Some((index, style)) => (index, ArgStyle::from_name(style)?),
            None => (body, ArgStyle::Any),
        };

        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(MessageSegment::Arg {
            index: index.parse().ok()?,
            style,
        })
    }

    #[must_use]
    pub fn segments(&self) -> &[MessageSegment] {
        &self.segments
    }

    /// True when at least one placeholder was recognized.
    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, MessageSegment::Arg { .. }))
    }

    /// Substitutes `args` into the placeholders. Surplus arguments are ignored.
    ///
    /// # Errors
    /// `FormatError::ArgumentMismatch` when a placeholder has no argument or the
    /// argument cannot be rendered in the requested style.
    pub fn render(&self, args: &[Value]) -> Result<String, FormatError> {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                MessageSegment::Literal(text) => out.push_str(text),
                MessageSegment::Arg { index, style } => {
                    let value = args.get(*index).ok_or(FormatError::ArgumentMismatch {
                        index: *index,
                        reason: MismatchReason::Missing {
                            provided: args.len(),
                        },
                    })?;
                    push_value(&mut out, value, *style).map_err(|reason| {
                        FormatError::ArgumentMismatch {
                            index: *index,
                            reason,
                        }
                    })?;
                }
            }
        }

        Ok(out)
    }
}

fn push_value(out: &mut String, value: &Value, style: ArgStyle) -> Result<(), MismatchReason> {
    match (style, value) {
        (ArgStyle::Any | ArgStyle::String, Value::String(s)) => out.push_str(s),
        (ArgStyle::Any | ArgStyle::Number, Value::Number(n)) => out.push_str(&n.to_string()),
        (ArgStyle::Any, Value::Bool(b)) => out.push_str(if *b { "true" } else { "false" }),
        (ArgStyle::Any, Value::Null) => out.push_str("null"),
        (ArgStyle::Any, Value::Array(_) | Value::Object(_)) => return Err(MismatchReason::NotText),
        (ArgStyle::Number, _) => return Err(MismatchReason::WrongType { expected: "number" }),
        (ArgStyle::String, _) => return Err(MismatchReason::WrongType { expected: "string" }),
    }
    Ok(())
}

/// Renders `template`, passing it through untouched when it holds no placeholders.
///
/// # Errors
/// See [`MessageTemplate::render`].
pub fn substitute(template: &str, args: &[Value]) -> Result<String, FormatError> {
    let parsed = MessageTemplate::parse(template);
    if parsed.has_placeholders() {
        parsed.render(args)
    } else {
        Ok(template.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_splits_literals_and_args() {
        let template = MessageTemplate::parse("took {0}ms of {1,number}");
        assert_eq!(
            template.segments(),
            &[
                MessageSegment::Literal("took ".to_string()),
                MessageSegment::Arg {
                    index: 0,
                    style: ArgStyle::Any
                },
                MessageSegment::Literal("ms of ".to_string()),
                MessageSegment::Arg {
                    index: 1,
                    style: ArgStyle::Number
                },
            ]
        );
    }

    #[test]
    fn malformed_braces_stay_literal() {
        for text in ["{", "}", "{}", "{x}", "{0,date}", "{-1}", "{ 0}", "a { b"] {
            let template = MessageTemplate::parse(text);
            assert!(!template.has_placeholders(), "{text}");
            assert_eq!(template.render(&[]).unwrap(), text);
        }
    }

    #[test]
    fn whitespace_inside_braces_is_literal() {
        for text in ["{ 0}", "{0 }", "{ 0 ,number}", "{0 ,number}", "{0, string}"] {
            let template = MessageTemplate::parse(text);
            assert!(!template.has_placeholders(), "{text}");
            assert_eq!(substitute(text, &[json!(1)]).unwrap(), text);
        }
    }

    #[test]
    fn nested_open_brace_finds_inner_placeholder() {
        let template = MessageTemplate::parse("{{0}}");
        assert_eq!(template.render(&[json!(7)]).unwrap(), "{7}");
    }

    #[test]
    fn huge_index_is_literal() {
        let text = "{99999999999999999999999}";
        assert!(!MessageTemplate::parse(text).has_placeholders());
    }

    #[test]
    fn scalars_render_as_json_text() {
        let out = substitute(
            "{0} {1} {2} {3}",
            &[json!("s"), json!(1.5), json!(false), Value::Null],
        )
        .unwrap();
        assert_eq!(out, "s 1.5 false null");
    }

    #[test]
    fn repeated_and_reordered_indices() {
        let out = substitute("{1}-{0}-{1}", &[json!("a"), json!("b")]).unwrap();
        assert_eq!(out, "b-a-b");
    }
}
