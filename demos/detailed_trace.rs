use branchgate::{execute, validate_syntax};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=branchgate=debug shows every dispatched call.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let expression = "startsWith('release/#') || startsWith('feature/') && isCharNum(8) && lenLessThan(40)";
    let branch = "feature/123-test-branch";

    println!("syntax: {}", validate_syntax(expression));
    println!();

    let outcome = execute(expression, branch);
    println!("{outcome}");
    println!();

    let failed: Vec<&str> = outcome
        .trace()
        .iter()
        .filter(|entry| !entry.result())
        .map(|entry| entry.call())
        .collect();
    println!("Calls that returned false: {failed:?}");

    println!();
    println!("{}", execute("isSectionNum(8, 'x', 1)", branch));
}
