use std::fmt;

use super::Argument;

/// A single function call extracted from an expression, e.g. `isSectionNum(8, '-')`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Argument>,
    /// The call as written in the expression, trimmed.
    pub text: String,
}

impl FunctionCall {
    /// Build a call whose text is the canonical rendering of `name` and `args`.
    #[must_use]
    pub fn new(name: &str, args: Vec<Argument>) -> Self {
        let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
        let text = format!("{name}({})", rendered.join(", "));
        Self {
            name: name.to_owned(),
            args,
            text,
        }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A maximal run of calls joined only by `&&`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    calls: Vec<FunctionCall>,
}

impl Segment {
    #[must_use]
    pub fn new(calls: Vec<FunctionCall>) -> Self {
        Self { calls }
    }

    #[must_use]
    pub fn calls(&self) -> &[FunctionCall] {
        &self.calls
    }
}

/// An extracted expression: AND-segments joined by `||`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Expression {
    segments: Vec<Segment>,
}

impl Expression {
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All calls in left-to-right order.
    pub fn calls(&self) -> impl Iterator<Item = &FunctionCall> {
        self.segments.iter().flat_map(|s| s.calls.iter())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, call) in self.calls.iter().enumerate() {
            if i > 0 {
                write!(f, " && ")?;
            }
            write!(f, "{call}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " || ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
