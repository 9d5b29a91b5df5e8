use branchgate::Policy;

fn main() {
    let policy = Policy::from_expression("startsWith('feature/') && isSectionNum(8, '-')")
        .expect("failed to build policy");

    println!("{policy}");

    for branch in ["feature/123-login", "feature/login", "main"] {
        let outcome = policy.evaluate(branch);
        println!("{branch}: {}", outcome.result());
    }
}
