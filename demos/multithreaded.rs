use std::sync::Arc;
use std::thread;

use branchgate::Policy;

fn main() {
    let policy = Arc::new(
        Policy::from_expression("contains('-') && existsLessThan('/', 2) || equalTo('main')")
            .expect("failed to build policy"),
    );

    let handles: Vec<_> = ["main", "feature/1-x", "a/b/c-d", "develop"]
        .into_iter()
        .enumerate()
        .map(|(i, branch)| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || {
                let outcome = policy.evaluate(branch);
                println!("Thread {i}: {branch} -> {}", outcome.result());
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
