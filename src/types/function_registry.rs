use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use super::argument::{Args, Argument, DataType};
use super::error::RegistryError;

/// Implementation of a built-in predicate: branch name and arguments in, verdict out.
///
/// Returns `None` when the arguments are not shaped as the signature declares,
/// which the evaluator treats as `false`.
pub type BuiltinFn = fn(&str, &Args<'_>) -> Option<bool>;

/// One overload of a registered function.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSignature {
    name: &'static str,
    param_names: &'static [&'static str],
    param_types: &'static [DataType],
    func: BuiltinFn,
}

impl FunctionSignature {
    #[must_use]
    pub const fn new(
        name: &'static str,
        param_names: &'static [&'static str],
        param_types: &'static [DataType],
        func: BuiltinFn,
    ) -> Self {
        Self {
            name,
            param_names,
            param_types,
            func,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.param_types.len()
    }

    #[must_use]
    pub fn param_types(&self) -> &'static [DataType] {
        self.param_types
    }

    #[must_use]
    pub fn param_names(&self) -> &'static [&'static str] {
        self.param_names
    }

    #[must_use]
    pub fn func(&self) -> BuiltinFn {
        self.func
    }

    /// Index of the first argument whose type differs from the declared parameter
    /// type, or `None` if every position matches. Assumes equal arity.
    pub(crate) fn first_mismatch(&self, args: &[Argument]) -> Option<usize> {
        self.param_types
            .iter()
            .zip(args)
            .position(|(expected, arg)| arg.data_type() != Some(*expected))
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, ty) in self.param_types.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.param_names().get(i) {
                Some(name) => write!(f, "{name}: {ty}")?,
                None => write!(f, "{ty}")?,
            }
        }
        write!(f, ")")
    }
}

/// Maps function names to their overloads, in registration order.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    signatures: HashMap<&'static str, Vec<FunctionSignature>>,
    order: Vec<&'static str>,
}

static BUILTIN: LazyLock<FunctionRegistry> = LazyLock::new(|| {
    FunctionRegistry::from_table(crate::builtins::TABLE)
        .unwrap_or_else(|e| panic!("built-in function table is malformed: {e}"))
});

impl FunctionRegistry {
    /// The registry of built-in branch predicates, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table violates a registry invariant.
    #[must_use]
    pub fn builtin() -> &'static FunctionRegistry {
        &BUILTIN
    }

    /// Build a registry from a table with one entry per overload.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if an entry has an empty name, its parameter
    /// names and types disagree in length, or it repeats an existing overload.
    pub fn from_table(table: &[FunctionSignature]) -> Result<Self, RegistryError> {
        let mut signatures: HashMap<&'static str, Vec<FunctionSignature>> = HashMap::new();
        let mut order = Vec::new();

        for sig in table {
            if sig.name.trim().is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if sig.param_names.len() != sig.param_types.len() {
                return Err(RegistryError::ParameterMismatch {
                    name: sig.name.to_owned(),
                    names: sig.param_names.len(),
                    types: sig.param_types.len(),
                });
            }
            let overloads = signatures.entry(sig.name).or_insert_with(|| {
                order.push(sig.name);
                Vec::new()
            });
            if overloads
                .iter()
                .any(|existing| existing.param_types == sig.param_types)
            {
                return Err(RegistryError::DuplicateOverload {
                    signature: sig.to_string(),
                });
            }
            overloads.push(*sig);
        }

        Ok(Self { signatures, order })
    }

    /// All overloads registered under `name`; empty if the name is unknown.
    #[must_use]
    pub fn signatures(&self, name: &str) -> &[FunctionSignature] {
        self.signatures.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.signatures.contains_key(name)
    }

    /// Arity of the first overload of `name`.
    #[must_use]
    pub fn total_params(&self, name: &str) -> Option<usize> {
        self.signatures(name).first().map(FunctionSignature::arity)
    }

    /// Declared type at 0-based `position` of the first overload of `name`.
    #[must_use]
    pub fn param_type(&self, name: &str, position: usize) -> Option<DataType> {
        self.signatures(name)
            .first()
            .and_then(|sig| sig.param_types.get(position).copied())
    }

    /// Registered function names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
