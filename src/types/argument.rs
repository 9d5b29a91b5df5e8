use std::fmt;

/// Parameter types a built-in function can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DataType {
    String,
    Number,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => write!(f, "string"),
            DataType::Number => write!(f, "number"),
        }
    }
}

/// A literal argument of a function call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Argument {
    /// A quoted literal with its quotes stripped.
    String(String),
    /// A bare unsigned integer.
    Number(u32),
    /// A bare token that is not a valid unsigned integer.
    Malformed(String),
}

impl Argument {
    /// Classify a bare (unquoted) token. Only a plain run of ASCII digits that
    /// fits in a `u32` is a number.
    pub(crate) fn from_bare(token: &str) -> Self {
        let digits = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
        match token.parse::<u32>() {
            Ok(n) if digits => Argument::Number(n),
            _ => Argument::Malformed(token.to_owned()),
        }
    }

    /// The type this argument satisfies, if any.
    #[must_use]
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Argument::String(_) => Some(DataType::String),
            Argument::Number(_) => Some(DataType::Number),
            Argument::Malformed(_) => None,
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Argument::String(_) => DataType::String.to_string(),
            Argument::Number(_) => DataType::Number.to_string(),
            Argument::Malformed(token) => format!("invalid number '{token}'"),
        }
    }
}

impl From<&str> for Argument {
    fn from(v: &str) -> Self {
        Argument::String(v.to_owned())
    }
}

impl From<u32> for Argument {
    fn from(v: u32) -> Self {
        Argument::Number(v)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::String(v) => write!(f, "'{v}'"),
            Argument::Number(v) => write!(f, "{v}"),
            Argument::Malformed(v) => write!(f, "{v}"),
        }
    }
}

/// Positional view over a call's arguments, handed to built-in functions.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    values: &'a [Argument],
}

impl<'a> Args<'a> {
    #[must_use]
    pub fn new(values: &'a [Argument]) -> Self {
        Self { values }
    }

    /// The string literal at `position`, if that argument is a string.
    #[must_use]
    pub fn string(&self, position: usize) -> Option<&'a str> {
        match self.values.get(position)? {
            Argument::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The number at `position`, if that argument is a number.
    #[must_use]
    pub fn number(&self, position: usize) -> Option<u32> {
        match self.values.get(position)? {
            Argument::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
