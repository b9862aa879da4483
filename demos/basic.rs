use flakeid::FlakeID;

fn main() {
    // Create a generator for datacenter 1, worker 1
    let generator = FlakeID::new(1, 1).unwrap();

    // Generate some IDs
    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    println!("Generated IDs (time-sorted):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components individually
    let ts = generator.extract.timestamp(id3);
    let datacenter = generator.extract.datacenter(id3);
    let worker = generator.extract.worker(id3);
    let seq = generator.extract.sequence(id3);
    println!("\nComponents of ID3 (extracted individually):");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  Datacenter ID: {datacenter}");
    println!("  Worker ID: {worker}");
    println!("  Sequence: {seq}");
}

fn print_id(id: u64, generator: &FlakeID) {
    let (since_epoch, datacenter, worker, sequence) = generator.extract.decompose(id);
    let datetime = generator.extract.datetime(id).unwrap();

    println!(
        "  ID: {id}, Timestamp: {since_epoch}, Human date: {datetime}, Datacenter: {datacenter}, Worker: {worker}, Sequence: {sequence}"
    );
}
