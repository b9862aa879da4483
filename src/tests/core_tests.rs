use std::sync::atomic::Ordering;

use crate::*;

#[test]
fn test_generates_distinct_increasing_ids() {
    let generator = FlakeID::new(1, 1).unwrap();

    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    assert!(id1 < id2 && id2 < id3);
}

#[test]
fn test_known_encoding_vector() {
    // epoch 2021-01-01, commit 123 ms later, datacenter 3, worker 7, seq 5:
    // 123 << 22 | 3 << 17 | 7 << 12 | 5 == 516321285
    let config = FlakeIDConfig::builder().epoch(1_609_459_200_000).build();
    let generator = FlakeID::with_config(3, 7, config).unwrap();

    let id = generator.assemble_id(123, 7, 5);
    assert_eq!(id, 516_321_285);

    let (timestamp, datacenter, worker, sequence) = generator.extract.decompose(516_321_285);
    assert_eq!(timestamp, 123);
    assert_eq!(datacenter, 3);
    assert_eq!(worker, 7);
    assert_eq!(sequence, 5);
}

#[test]
fn test_commit_order_is_lexicographic_on_timestamp_then_sequence() {
    let generator = FlakeID::new(0, 0).unwrap();
    let mut previous: Option<(u64, u16)> = None;

    for _ in 0..10_000 {
        let id = generator.next_id().unwrap();
        let (timestamp, _, _, sequence) = generator.extract.decompose(id);

        if let Some((prev_ts, prev_seq)) = previous {
            assert!(
                (timestamp, sequence) > (prev_ts, prev_seq),
                "Commit ({timestamp}, {sequence}) does not follow ({prev_ts}, {prev_seq})"
            );
        }
        previous = Some((timestamp, sequence));
    }
}

#[test]
fn test_first_commit_replaces_sentinel() {
    let generator = FlakeID::new(0, 0).unwrap();
    assert_eq!(generator.last_timestamp.load(Ordering::SeqCst), -1);

    let id = generator.next_id().unwrap();

    let committed = generator.last_timestamp.load(Ordering::SeqCst);
    assert!(committed > 0);
    assert_eq!(generator.extract.sequence(id), 0);
}

#[test]
fn test_recovers_from_small_forward_skew_of_committed_state() {
    let generator = FlakeID::new(0, 0).unwrap();
    let id1 = generator.next_id().unwrap();

    // Push committed state a few ms ahead of the real clock; the next call
    // observes "time went backwards" and must wait the skew out.
    let skewed = generator.last_timestamp.load(Ordering::SeqCst) + 3;
    generator.last_timestamp.store(skewed, Ordering::SeqCst);

    let id2 = generator.next_id().unwrap();
    assert!(id2 > id1);

    let recovered = generator.extract.timestamp(id2) as i64 + generator.config.epoch();
    assert!(
        recovered > skewed,
        "Recovered timestamp {recovered} did not pass the skewed state {skewed}"
    );
    assert_eq!(generator.extract.sequence(id2), 0);
}
