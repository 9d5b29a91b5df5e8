use std::sync::Arc;
use std::thread;

use branchgate::{execute, EvaluationOutcome, Policy};

#[test]
fn evaluate_across_threads() {
    let policy = Arc::new(
        Policy::from_expression(
            "startsWith('feature/') && isSectionNum(8, '-') || equalTo('main')",
        )
        .unwrap(),
    );

    let branches = [
        "feature/123-login",
        "main",
        "feature/abc-login",
        "release/1.0",
    ];

    let handles: Vec<_> = branches
        .iter()
        .map(|&branch| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || policy.evaluate(branch))
        })
        .collect();

    let results: Vec<EvaluationOutcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results[0].result());
    assert!(results[1].result());
    assert!(!results[2].result());
    assert!(!results[3].result());
    for outcome in &results {
        assert_eq!(outcome.trace().len(), 3);
    }
}

#[test]
fn concurrent_execute_matches_sequential() {
    let expression = "contains('-') && lenLessThan(20) || endsWith('-hotfix')";
    let branches: Vec<String> = (0..64)
        .map(|i| match i % 3 {
            0 => format!("feature/{i}-x"),
            1 => format!("release-{i}-hotfix-with-long-name"),
            _ => format!("b{i}"),
        })
        .collect();

    let sequential: Vec<EvaluationOutcome> =
        branches.iter().map(|b| execute(expression, b)).collect();

    let concurrent: Vec<EvaluationOutcome> = thread::scope(|s| {
        let handles: Vec<_> = branches
            .iter()
            .map(|b| s.spawn(move || execute(expression, b)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}
