use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use flakeid::FlakeID;

fn main() {
    // One shared generator serving several logical workers, the way a
    // request-handling pool would: each thread stamps its own worker tag.
    let generator = Arc::new(FlakeID::new(1, 0).unwrap());
    let mut handles = vec![];

    for worker in 0..4u8 {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.next_id_with(worker).unwrap();
                let (ts, datacenter, w, seq) = generator.extract.decompose(id);

                println!(
                    "Worker {} generated ID #{} (ts={}, dc={}, worker={}, seq={})",
                    worker, i, ts, datacenter, w, seq
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    // Collect all generated IDs
    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());

    let mut ids: Vec<_> = all_ids.into_iter().collect();
    ids.sort_unstable();
    for i in 1..ids.len() {
        assert!(ids[i] > ids[i - 1], "IDs not strictly increasing!");
    }
    println!("All IDs are unique and sortable!");
}
