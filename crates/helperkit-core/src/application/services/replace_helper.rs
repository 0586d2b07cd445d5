//! Replace Helper - string replacement formatting helper.
//!
//! ```text
//! <format.replace substring="draft" replacement="final">{post.title}</format.replace>
//! ```

use tracing::{instrument, trace};

use crate::{
    domain::{
        ArgumentSchema, Arguments, DomainError, HelperDescriptor, HelperId, Value,
    },
    error::HelperResult,
};

const CLASS_DOC: &str = "Replaces a substring in the content with a replacement string.
The content is taken from the `content` argument or, when it is not given,
from the rendered children.";

const RENDER_DOC: &str = "Renders the content with `substring` replaced by `replacement`,
    left to right and without overlaps. Replaces at most `count` occurrences when
    `count` is given. Matching ignores case when `caseSensitive` is false.";

/// Replace occurrences of `substring` in `content`.
///
/// Occurrences are found left to right and never overlap. At most `limit`
/// replacements are made when a limit is given. Without case sensitivity,
/// characters match when their Unicode lowercase forms are equal; the
/// unmatched parts keep their original text. An empty `substring` leaves the
/// content unchanged.
pub fn replace(
    content: &str,
    substring: &str,
    replacement: &str,
    limit: Option<usize>,
    case_sensitive: bool,
) -> String {
    if substring.is_empty() {
        return content.to_string();
    }

    if case_sensitive {
        return match limit {
            Some(limit) => content.replacen(substring, replacement, limit),
            None => content.replace(substring, replacement),
        };
    }

    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    let mut replaced = 0;

    while !rest.is_empty() && limit.is_none_or(|limit| replaced < limit) {
        if let Some(len) = match_len_ignore_case(rest, substring) {
            out.push_str(replacement);
            rest = &rest[len..];
            replaced += 1;
        } else if let Some(ch) = rest.chars().next() {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out.push_str(rest);
    out
}

/// Byte length of the prefix of `haystack` matching `needle` ignoring case.
fn match_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut chars = haystack.char_indices();

    for expected in needle.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }

    Some(chars.next().map_or(haystack.len(), |(index, _)| index))
}

/// The `format.replace` helper.
#[derive(Debug, Clone)]
pub struct ReplaceHelper {
    schema: ArgumentSchema,
}

impl ReplaceHelper {
    pub const ID: &'static str = "format.replace";

    pub fn new() -> Result<Self, DomainError> {
        let mut schema = ArgumentSchema::new();
        schema
            .register_argument("content", "string", "Content in which to perform replacement", false, None)?
            .register_argument("substring", "string", "Substring to replace", true, None)?
            .register_argument("replacement", "string", "Replacement to insert", false, Some(Value::from("")))?
            .register_argument("count", "integer", "Maximum number of times to perform replacement", false, None)?
            .register_argument(
                "caseSensitive",
                "boolean",
                "If true, perform case-sensitive replacement",
                false,
                Some(Value::from(true)),
            )?;

        Ok(Self { schema })
    }

    /// Registration record for this helper.
    pub fn descriptor() -> Result<HelperDescriptor, DomainError> {
        let helper = Self::new()?;
        Ok(HelperDescriptor::new(HelperId::parse(Self::ID)?, helper.schema)
            .with_class_doc(CLASS_DOC)
            .with_render_doc(RENDER_DOC))
    }

    pub fn schema(&self) -> &ArgumentSchema {
        &self.schema
    }

    /// Render with the arguments given at the call site.
    ///
    /// `children` is only called when no `content` argument is given.
    ///
    /// # Errors
    /// - `MissingRequiredArgument` if `substring` is absent
    /// - `InvalidArgumentValue` for mistyped arguments or a negative `count`
    #[instrument(skip_all)]
    pub fn render(
        &self,
        supplied: &Arguments,
        children: impl FnOnce() -> String,
    ) -> HelperResult<String> {
        let arguments = self.schema.resolve(supplied)?;
        self.schema.validate(&arguments)?;

        let content = match arguments.get("content").and_then(Value::as_str) {
            Some(content) => content.to_string(),
            None => children(),
        };
        let substring = arguments
            .get("substring")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let replacement = arguments
            .get("replacement")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let case_sensitive = arguments
            .get("caseSensitive")
            .and_then(Value::as_bool)
            .unwrap_or(true);

        let limit = match arguments.get("count").and_then(Value::as_i64) {
            Some(count) => Some(usize::try_from(count).map_err(|_| {
                DomainError::InvalidArgumentValue {
                    name: "count".into(),
                    expected: "non-negative integer".into(),
                    actual: count.to_string(),
                }
            })?),
            None => None,
        };

        trace!(substring, ?limit, case_sensitive, "Replacing");
        Ok(replace(&content, substring, replacement, limit, case_sensitive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelperError;

    fn args<const N: usize>(entries: [(&str, Value); N]) -> Arguments {
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn case_sensitive_replaces_exact_matches() {
        assert_eq!(replace("aAbBaA", "a", "X", None, true), "XAbBXA");
    }

    #[test]
    fn case_insensitive_replaces_all_forms() {
        assert_eq!(replace("aAbBaA", "a", "X", None, false), "XXbBXX");
    }

    #[test]
    fn limit_caps_replacements() {
        assert_eq!(replace("aaa", "a", "b", Some(2), true), "bba");
        assert_eq!(replace("aAa", "a", "b", Some(2), false), "bba");
        assert_eq!(replace("aaa", "a", "b", Some(0), true), "aaa");
        assert_eq!(replace("aaa", "a", "b", Some(0), false), "aaa");
    }

    #[test]
    fn empty_substring_is_a_no_op() {
        assert_eq!(replace("abc", "", "X", None, true), "abc");
        assert_eq!(replace("abc", "", "X", None, false), "abc");
    }

    #[test]
    fn matches_do_not_overlap() {
        assert_eq!(replace("aaaa", "aa", "b", None, true), "bb");
        assert_eq!(replace("AAA", "aa", "b", None, false), "bA");
    }

    #[test]
    fn case_insensitive_keeps_unmatched_text_and_handles_unicode() {
        assert_eq!(replace("Straße STRASSE", "straße", "road", None, false), "road STRASSE");
        assert_eq!(replace("ÄpFEL äpfel", "äpfel", "apple", None, false), "apple apple");
    }

    #[test]
    fn descriptor_declares_arguments_in_order() {
        let descriptor = ReplaceHelper::descriptor().unwrap();
        assert_eq!(descriptor.id().as_str(), "format.replace");
        let names: Vec<_> = descriptor.schema().names().collect();
        assert_eq!(
            names,
            ["content", "substring", "replacement", "count", "caseSensitive"]
        );
        assert!(descriptor.schema().get("substring").unwrap().is_required());
    }

    #[test]
    fn render_uses_content_argument() {
        let helper = ReplaceHelper::new().unwrap();
        let out = helper
            .render(
                &args([
                    ("content", Value::from("draft title")),
                    ("substring", Value::from("draft")),
                    ("replacement", Value::from("final")),
                ]),
                || panic!("children must not render"),
            )
            .unwrap();
        assert_eq!(out, "final title");
    }

    #[test]
    fn render_falls_back_to_children() {
        let helper = ReplaceHelper::new().unwrap();
        let out = helper
            .render(
                &args([
                    ("substring", Value::from("A")),
                    ("caseSensitive", Value::from(false)),
                    ("count", Value::from(1)),
                ]),
                || "banana".to_string(),
            )
            .unwrap();
        assert_eq!(out, "bnana");
    }

    #[test]
    fn render_requires_substring() {
        let helper = ReplaceHelper::new().unwrap();
        let err = helper
            .render(&Arguments::new(), || "x".to_string())
            .unwrap_err();
        assert!(matches!(
            err,
            HelperError::Domain(DomainError::MissingRequiredArgument { ref name }) if name == "substring"
        ));
    }

    #[test]
    fn render_rejects_mistyped_and_negative_count() {
        let helper = ReplaceHelper::new().unwrap();

        let mistyped = helper.render(
            &args([("substring", Value::from("a")), ("count", Value::from("two"))]),
            String::new,
        );
        assert!(matches!(
            mistyped,
            Err(HelperError::Domain(DomainError::InvalidArgumentValue { ref name, .. })) if name == "count"
        ));

        let negative = helper.render(
            &args([("substring", Value::from("a")), ("count", Value::from(-1))]),
            String::new,
        );
        assert!(matches!(
            negative,
            Err(HelperError::Domain(DomainError::InvalidArgumentValue { ref expected, .. }))
                if expected == "non-negative integer"
        ));
    }
}
