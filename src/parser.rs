//! Parsers.
//!
//! Every input is first checked by the validating parser in [`validate`],
//! and only then decomposed by the fast parsers in [`trusted`], which assume
//! the input is already valid.

pub(crate) mod char;
pub(crate) mod str;
mod trusted;
mod validate;

pub(crate) use self::trusted::authority::decompose_authority;
pub(crate) use self::trusted::{HierPart, MatchedSpans};
pub(crate) use self::validate::Rule;

/// Grammar mismatch.
///
/// This carries no information: callers attach the input and the grammar
/// name when they turn it into a public error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Mismatch;

/// Returns `true` if the whole string matches the rule.
#[inline]
#[must_use]
pub(crate) fn matches<S: crate::spec::Spec>(rule: Rule, i: &str) -> bool {
    validate::validate::<S>(i, rule).is_ok()
}

/// Matches the whole string against the rule, and returns the spans of the
/// components.
pub(crate) fn match_spans<S: crate::spec::Spec>(
    rule: Rule,
    i: &str,
) -> Result<MatchedSpans<'_>, Mismatch> {
    validate::validate::<S>(i, rule)?;
    Ok(trusted::decompose(i))
}
