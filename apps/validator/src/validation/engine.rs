use chrono::NaiveDate;
use serde::Serialize;

use crate::schema::date::ResumeDate;
use crate::validation::checks::{is_email, is_url};

/// A named constraint attached to one field. Comparison rules (`LtField`,
/// `GtField`) reference a sibling field by its external name; `Lte` compares
/// against the reference date injected into the validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    Url,
    LtField(&'static str),
    GtField(&'static str),
    Lte,
}

impl Rule {
    /// Stable identifier used in violation output.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Email => "email",
            Rule::Url => "url",
            Rule::LtField(_) => "ltfield",
            Rule::GtField(_) => "gtfield",
            Rule::Lte => "lte",
        }
    }
}

/// A field's value as seen by the engine.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Date(ResumeDate),
}

/// One field of a record: external name, current value, and the rules
/// declared on it.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
    pub rules: &'static [Rule],
}

/// Child records reachable from a record, keyed by external name.
pub enum Child<'a> {
    One(&'static str, &'a dyn Validate),
    Many(&'static str, Vec<&'a dyn Validate>),
}

/// A record that declares constraint tables for its fields and exposes its
/// nested records. The engine walks this, records never validate themselves.
pub trait Validate {
    fn fields(&self) -> Vec<FieldSpec<'_>> {
        Vec::new()
    }

    fn children(&self) -> Vec<Child<'_>> {
        Vec::new()
    }
}

/// One failed constraint: the path of the offending field and the
/// identifier of the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    pub rule: &'static str,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.rule)
    }
}

/// Runs every declared rule on every field of `root` and its descendants,
/// against `now` as the reference date for `lte`. Always returns the full
/// list — no short-circuit, no deduplication (a field may legitimately
/// appear twice, e.g. both ends of an inverted interval report).
pub fn validate(root: &dyn Validate, now: NaiveDate) -> Vec<Violation> {
    let mut violations = Vec::new();
    walk(root, "", now, &mut violations);
    violations
}

fn walk(record: &dyn Validate, path: &str, now: NaiveDate, out: &mut Vec<Violation>) {
    let specs = record.fields();
    for spec in &specs {
        for rule in spec.rules {
            if broken(rule, spec, &specs, now) {
                out.push(Violation {
                    path: join(path, spec.name),
                    rule: rule.name(),
                });
            }
        }
    }

    for child in record.children() {
        match child {
            Child::One(name, rec) => walk(rec, &join(path, name), now, out),
            Child::Many(name, recs) => {
                for (i, rec) in recs.into_iter().enumerate() {
                    walk(rec, &format!("{}[{}]", join(path, name), i), now, out);
                }
            }
        }
    }
}

fn join(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}

fn broken(rule: &Rule, spec: &FieldSpec<'_>, siblings: &[FieldSpec<'_>], now: NaiveDate) -> bool {
    match rule {
        Rule::Required => match spec.value {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Date(d) => d.is_zero(),
        },
        // Format rules only apply to populated fields; emptiness is the
        // business of `required`.
        Rule::Email => matches!(spec.value, FieldValue::Text(s) if !s.is_empty() && !is_email(s)),
        Rule::Url => matches!(spec.value, FieldValue::Text(s) if !s.is_empty() && !is_url(s)),
        Rule::LtField(other) => {
            matches!(dates(spec, siblings, other), Some((this, that)) if this > that)
        }
        Rule::GtField(other) => {
            matches!(dates(spec, siblings, other), Some((this, that)) if this < that)
        }
        Rule::Lte => match spec.value {
            FieldValue::Date(d) => matches!(d.date(), Some(day) if day > now),
            FieldValue::Text(_) => false,
        },
    }
}

/// Resolves a cross-field comparison's operands. Yields `None` — rule not
/// applicable — unless both this field and the named sibling are set dates.
fn dates(
    spec: &FieldSpec<'_>,
    siblings: &[FieldSpec<'_>],
    other: &'static str,
) -> Option<(NaiveDate, NaiveDate)> {
    let this = match spec.value {
        FieldValue::Date(d) => d.date()?,
        FieldValue::Text(_) => return None,
    };
    let that = siblings.iter().find(|s| s.name == other)?;
    let that = match that.value {
        FieldValue::Date(d) => d.date()?,
        FieldValue::Text(_) => return None,
    };
    Some((this, that))
}
