use crate::types::{Args, EvaluationOutcome, ResolvedCall, TraceEntry};

/// OR across segments of the AND of each segment's calls.
///
/// Every call is dispatched and traced even once the result is decided.
pub(crate) fn evaluate(segments: &[Vec<ResolvedCall>], branch: &str) -> EvaluationOutcome {
    let mut trace = Vec::with_capacity(segments.iter().map(Vec::len).sum());
    let mut overall = false;

    for segment in segments {
        let mut segment_result = true;
        for resolved in segment {
            let result = (resolved.func)(branch, &Args::new(&resolved.call.args)).unwrap_or(false);
            tracing::debug!(call = %resolved.call, result, "dispatched");
            trace.push(TraceEntry::new(resolved.call.text.clone(), result));
            segment_result &= result;
        }
        overall |= segment_result;
    }

    EvaluationOutcome::evaluated(overall, trace)
}

#[cfg(test)]
mod tests {
    use crate::Policy;

    fn eval(expression: &str, branch: &str) -> (bool, Vec<String>) {
        let outcome = Policy::from_expression(expression).unwrap().evaluate(branch);
        let trace = outcome.trace().iter().map(ToString::to_string).collect();
        (outcome.result(), trace)
    }

    #[test]
    fn eval_single_call_true() {
        let (result, trace) = eval("equalTo('test-branch')", "test-branch");
        assert!(result);
        assert_eq!(trace, ["equalTo('test-branch') -> true"]);
    }

    #[test]
    fn eval_single_call_false() {
        let (result, _) = eval("equalTo('test-branch')", "other-branch");
        assert!(!result);
    }

    #[test]
    fn eval_and_logic() {
        let (result, _) = eval("contains('-') && isSectionNum(8,'-')", "feature/123-test-branch");
        assert!(result);
        let (result, trace) = eval("contains('-') && isCharNum(0)", "feature/123-test-branch");
        assert!(!result);
        assert_eq!(trace, ["contains('-') -> true", "isCharNum(0) -> false"]);
    }

    #[test]
    fn eval_or_traces_every_call() {
        let (result, trace) = eval(
            "startsWith('feature/') || startsWith('preview')",
            "feature/123-branch",
        );
        assert!(result);
        assert_eq!(
            trace,
            [
                "startsWith('feature/') -> true",
                "startsWith('preview') -> false"
            ]
        );
    }

    #[test]
    fn eval_and_failure_still_traces_rest() {
        let (result, trace) = eval("equalTo('main') && lenLessThan(100)", "develop");
        assert!(!result);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[1], "lenLessThan(100) -> true");
    }

    #[test]
    fn eval_or_of_ands() {
        // false && true || true  ==  (false && true) || true
        let (result, _) = eval("equalTo('x') && contains('a') || contains('b')", "ab");
        assert!(result);
        // true || false && false  ==  true || (false && false)
        let (result, _) = eval("contains('a') || equalTo('x') && equalTo('y')", "ab");
        assert!(result);
        // true && false || false && true
        let (result, _) = eval("contains('a') && equalTo('x') || equalTo('y') && contains('b')", "ab");
        assert!(!result);
    }

    #[test]
    fn eval_char_num_out_of_range() {
        let (result, trace) = eval("isCharNum(400)", "feature/123-test-branch");
        assert!(!result);
        assert_eq!(trace, ["isCharNum(400) -> false"]);
    }
}
