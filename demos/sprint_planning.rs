//! Plan a few sprints over a small sample backlog.
//!
//! Run with `cargo run --example sprint_planning`.

use backlog::storage::MemoryDatastore;
use backlog::{Backlog, BacklogError, Story};

fn main() -> Result<(), BacklogError> {
    let backlog = Backlog::new(MemoryDatastore::new());
    for story in [
        Story::new("1", 3, 1),
        Story::new("2", 13, 1),
        Story::new("3", 1, 3),
        Story::new("4", 3, 10),
        Story::new("5", 20, 3),
        Story::new("6", 5, 3),
    ] {
        backlog.add(&story)?;
    }

    for capacity in [100, 13, 3, 1, -1] {
        let plan = backlog.plan_sprint(capacity)?;
        let picked: Vec<String> = plan.stories.iter().map(ToString::to_string).collect();
        println!(
            "capacity {capacity:>3}: {} ({} committed)",
            if picked.is_empty() { "-".to_string() } else { picked.join(", ") },
            plan.committed_points
        );
    }

    let removed = backlog.remove("1")?;
    println!("removed {removed}");
    let after: Vec<String> = backlog.sprint(100)?.iter().map(ToString::to_string).collect();
    println!("capacity 100: {}", after.join(", "));

    Ok(())
}
