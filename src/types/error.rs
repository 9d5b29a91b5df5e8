use thiserror::Error;

use super::DataType;

/// A call that does not match any registered function signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SignatureError {
    #[error("'{name}' is not a usable function")]
    UnknownFunction { name: String },

    #[error("'{name}' expects {expected} argument(s) but was given {found}")]
    ArgumentCount {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("argument {position} of '{name}' must be a {expected}, found {found}")]
    ArgumentType {
        name: String,
        position: usize,
        expected: DataType,
        found: String,
    },
}

/// A malformed function table passed to
/// [`FunctionRegistry::from_table()`](super::FunctionRegistry::from_table).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("function table contains an entry with an empty name")]
    EmptyName,

    #[error("'{name}' declares {names} parameter name(s) but {types} parameter type(s)")]
    ParameterMismatch {
        name: String,
        names: usize,
        types: usize,
    },

    #[error("duplicate overload '{signature}'")]
    DuplicateOverload { signature: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_function_message() {
        let err = SignatureError::UnknownFunction {
            name: "isBranch".into(),
        };
        assert_eq!(err.to_string(), "'isBranch' is not a usable function");
    }

    #[test]
    fn argument_count_message() {
        let err = SignatureError::ArgumentCount {
            name: "existsTotal".into(),
            expected: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "'existsTotal' expects 2 argument(s) but was given 1"
        );
    }

    #[test]
    fn argument_type_message() {
        let err = SignatureError::ArgumentType {
            name: "isCharNum".into(),
            position: 1,
            expected: DataType::Number,
            found: "string".into(),
        };
        assert_eq!(
            err.to_string(),
            "argument 1 of 'isCharNum' must be a number, found string"
        );
    }

    #[test]
    fn empty_name_message() {
        assert_eq!(
            RegistryError::EmptyName.to_string(),
            "function table contains an entry with an empty name"
        );
    }

    #[test]
    fn parameter_mismatch_message() {
        let err = RegistryError::ParameterMismatch {
            name: "isBefore".into(),
            names: 1,
            types: 2,
        };
        assert_eq!(
            err.to_string(),
            "'isBefore' declares 1 parameter name(s) but 2 parameter type(s)"
        );
    }

    #[test]
    fn duplicate_overload_message() {
        let err = RegistryError::DuplicateOverload {
            signature: "contains(value: string)".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate overload 'contains(value: string)'"
        );
    }
}
