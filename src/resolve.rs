use crate::types::ResolvedCall;
use crate::{Expression, FunctionCall, FunctionRegistry, FunctionSignature, Policy, SignatureError};

pub(crate) fn resolve(
    expression: Expression,
    registry: &FunctionRegistry,
) -> Result<Policy, SignatureError> {
    let mut segments = Vec::with_capacity(expression.segments().len());
    for segment in expression.segments() {
        let mut resolved = Vec::with_capacity(segment.calls().len());
        for call in segment.calls() {
            let signature = resolve_call(call, registry)?;
            tracing::trace!(call = %call, signature = %signature, "resolved");
            resolved.push(ResolvedCall {
                call: call.clone(),
                func: signature.func(),
            });
        }
        segments.push(resolved);
    }
    Ok(Policy {
        segments,
        expression,
    })
}

impl FunctionRegistry {
    /// Resolve a single call to the overload it would dispatch to.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError`] if the name is unknown, no overload takes that
    /// many arguments, or no overload accepts the argument types.
    pub fn resolve(&self, call: &FunctionCall) -> Result<&FunctionSignature, SignatureError> {
        resolve_call(call, self)
    }
}

/// Select the overload `call` dispatches to: the first, in registration order,
/// matching both arity and every argument type.
pub(crate) fn resolve_call<'r>(
    call: &FunctionCall,
    registry: &'r FunctionRegistry,
) -> Result<&'r FunctionSignature, SignatureError> {
    let overloads = registry.signatures(&call.name);
    if overloads.is_empty() {
        return Err(SignatureError::UnknownFunction {
            name: call.name.clone(),
        });
    }

    // Closest partial match: the overload whose first mismatch is furthest right.
    let mut closest: Option<(&FunctionSignature, usize)> = None;
    for sig in overloads.iter().filter(|s| s.arity() == call.args.len()) {
        match sig.first_mismatch(&call.args) {
            None => return Ok(sig),
            Some(pos) => {
                if closest.map_or(true, |(_, best)| pos > best) {
                    closest = Some((sig, pos));
                }
            }
        }
    }

    match closest {
        Some((sig, pos)) => Err(SignatureError::ArgumentType {
            name: call.name.clone(),
            position: pos + 1,
            expected: sig.param_types()[pos],
            found: call.args[pos].describe(),
        }),
        None => Err(SignatureError::ArgumentCount {
            name: call.name.clone(),
            expected: registry.total_params(&call.name).unwrap_or_default(),
            found: call.args.len(),
        }),
    }
}
