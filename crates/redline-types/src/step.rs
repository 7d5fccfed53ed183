//! Traversal steps and the fragments they contribute to a rendered path.

use std::fmt;

use crate::tag::TypeTag;
use crate::value::LeafValue;

/// Separator between segments of a rendered path.
pub const PATH_SEPARATOR: char = '.';

/// How a step was reached from its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// The top-level compared values. Contributes nothing to the rendered path.
    Root,
    /// A named field of a struct-like aggregate.
    Field(String),
    /// A position in a sequence.
    Index(usize),
    /// An entry in a string-keyed map.
    Key(String),
    /// The payload of an optional value. Contributes nothing to the rendered path.
    Indirect,
}

/// One position in a depth-first traversal.
///
/// A step records the [`TypeTag`] of the value it lands on. The values of a
/// differing leaf are attached to the top step when the leaf is reported.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    kind: StepKind,
    type_tag: TypeTag,
    values: Option<(LeafValue, LeafValue)>,
}

impl Step {
    pub fn new(kind: StepKind, type_tag: TypeTag) -> Self {
        Self {
            kind,
            type_tag,
            values: None,
        }
    }

    pub fn root(type_tag: TypeTag) -> Self {
        Self::new(StepKind::Root, type_tag)
    }

    pub fn field(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self::new(StepKind::Field(name.into()), type_tag)
    }

    pub fn index(index: usize, type_tag: TypeTag) -> Self {
        Self::new(StepKind::Index(index), type_tag)
    }

    pub fn key(key: impl Into<String>, type_tag: TypeTag) -> Self {
        Self::new(StepKind::Key(key.into()), type_tag)
    }

    pub fn indirect(type_tag: TypeTag) -> Self {
        Self::new(StepKind::Indirect, type_tag)
    }

    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    pub fn type_tag(&self) -> &TypeTag {
        &self.type_tag
    }

    /// Returns `true` for the step marking the top-level compared values.
    pub fn is_root(&self) -> bool {
        matches!(self.kind, StepKind::Root)
    }

    pub fn is_indirect(&self) -> bool {
        matches!(self.kind, StepKind::Indirect)
    }

    /// Returns `true` if this step adds a segment to the rendered path.
    pub fn is_rendered(&self) -> bool {
        !matches!(self.kind, StepKind::Root | StepKind::Indirect)
    }

    /// The segment this step contributes to a rendered path.
    ///
    /// Names and keys are escaped so that the segment never contains
    /// [`PATH_SEPARATOR`]: `%` becomes `%25` and `.` becomes `%2E`.
    pub fn fragment(&self) -> String {
        match &self.kind {
            StepKind::Root | StepKind::Indirect => String::new(),
            StepKind::Field(name) => escape_segment(name),
            StepKind::Index(i) => format!("[{i}]"),
            StepKind::Key(k) => format!("[{}]", escape_segment(k)),
        }
    }

    /// The name redaction rules match against: the unescaped field name for
    /// field steps, the fragment for everything else.
    pub fn field_name(&self) -> String {
        match &self.kind {
            StepKind::Field(name) => name.clone(),
            _ => self.fragment(),
        }
    }

    /// Attach the differing values reported at this step.
    pub fn attach(&mut self, from: LeafValue, to: LeafValue) {
        self.values = Some((from, to));
    }

    /// The attached `(from, to)` pair, if a difference was reported here.
    pub fn values(&self) -> Option<(&LeafValue, &LeafValue)> {
        self.values.as_ref().map(|(from, to)| (from, to))
    }
}

fn escape_segment(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            PATH_SEPARATOR => escaped.push_str("%2E"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StepKind::Root => write!(f, "{{{}}}", self.type_tag),
            StepKind::Indirect => f.write_str("*"),
            _ => f.write_str(&self.fragment()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &'static str) -> TypeTag {
        TypeTag::from_static(name)
    }

    #[test]
    fn fragments() {
        assert_eq!(Step::root(tag("Driver")).fragment(), "");
        assert_eq!(Step::field("Make", tag("string")).fragment(), "Make");
        assert_eq!(Step::index(3, tag("Plate")).fragment(), "[3]");
        assert_eq!(Step::key("prod", tag("string")).fragment(), "[prod]");
    }

    #[test]
    fn separator_is_escaped_in_keys_and_names() {
        assert_eq!(Step::key("a.b", tag("string")).fragment(), "[a%2Eb]");
        assert_eq!(Step::key("50%", tag("string")).fragment(), "[50%25]");
        assert_eq!(Step::field("x.y", tag("string")).fragment(), "x%2Ey");
        assert_eq!(Step::field("x.y", tag("string")).field_name(), "x.y");
        assert!(!Step::key("a.b", tag("string")).fragment().contains(PATH_SEPARATOR));
    }

    #[test]
    fn indirect_steps_are_not_rendered() {
        let step = Step::indirect(tag("LicensePlate"));
        assert!(step.is_indirect());
        assert!(!step.is_rendered());
        assert_eq!(step.fragment(), "");
        assert_eq!(step.type_tag().as_str(), "LicensePlate");
        assert!(!Step::root(tag("Driver")).is_rendered());
        assert!(Step::index(0, tag("i8")).is_rendered());
    }

    #[test]
    fn field_name_matches_fragment() {
        let step = Step::field("Number", tag("string"));
        assert_eq!(step.field_name(), "Number");
    }

    #[test]
    fn attach_values() {
        let mut step = Step::field("Color", tag("string"));
        assert!(step.values().is_none());
        step.attach(LeafValue::encode("White"), LeafValue::encode("Grey"));
        let (from, to) = step.values().unwrap();
        assert_eq!(from, &LeafValue::encode("White"));
        assert_eq!(to, &LeafValue::encode("Grey"));
    }

    #[test]
    fn root_display_names_the_type() {
        assert_eq!(Step::root(tag("Driver")).to_string(), "{Driver}");
        assert!(Step::root(tag("Driver")).is_root());
    }
}
