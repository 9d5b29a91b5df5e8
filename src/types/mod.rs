mod argument;
mod call;
mod error;
mod evaluation_outcome;
mod function_registry;
mod policy;
mod validation_outcome;

pub use argument::{Args, Argument, DataType};
pub use call::{Expression, FunctionCall, Segment};
pub use error::{RegistryError, SignatureError};
pub use evaluation_outcome::{EvaluationOutcome, TraceEntry};
pub use function_registry::{BuiltinFn, FunctionRegistry, FunctionSignature};
pub use policy::Policy;
pub(crate) use policy::ResolvedCall;
pub use validation_outcome::ValidationOutcome;
