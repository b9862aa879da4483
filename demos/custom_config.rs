use flakeid::{FlakeID, FlakeIDConfig};

fn main() {
    // Measure timestamps from 2024-01-01 instead of the default 2021-01-01.
    // A more recent epoch extends how long the 41-bit field lasts (~69 years
    // past the epoch).
    let config = FlakeIDConfig::builder()
        .epoch(1_704_067_200_000)
        .spin_yield_every(32)
        .build();

    let generator = FlakeID::with_config(2, 5, config).unwrap();

    let id = generator.next_id().unwrap();
    let (ts, datacenter, worker, seq) = generator.extract.decompose(id);

    println!("ID: {id}");
    println!("  {} ms since 2024-01-01", ts);
    println!("  Datacenter: {datacenter}, Worker: {worker}, Sequence: {seq}");
    println!("  Wall clock: {}", generator.extract.datetime(id).unwrap());

    // A generator that pins the datacenter but draws a random worker tag
    let drawn = FlakeID::with_random_worker(2).unwrap();
    println!(
        "Randomly drawn worker tag for datacenter 2: {}",
        drawn.worker_id
    );
}
