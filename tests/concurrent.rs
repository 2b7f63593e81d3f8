//! Concurrent writer scenarios.
//!
//! Many tasks write one record each; all writes must succeed, the assigned
//! offsets must form a contiguous block, and no task may ever observe a
//! sentinel or inverted range once the first write has landed.

use std::collections::BTreeSet;
use std::sync::Arc;

use bytes::Bytes;

use memlog::{Log, LogConfig, Offset, OFFSET_NONE};

/// Spawns one writer task per payload and returns the offsets they were
/// assigned.
async fn run_writers(log: Arc<Log>, workers: usize) -> BTreeSet<Offset> {
    let mut handles = Vec::with_capacity(workers);
    for i in 0..workers {
        let log = Arc::clone(&log);
        let data = Bytes::from(format!("worker-{i}"));
        handles.push(tokio::spawn(async move {
            let offset = log.write(data).await.expect("write failed");
            assert!(offset >= 0);

            // Once any write has completed, range never reports sentinels
            // and never inverts.
            let (earliest, latest) = log.range().await;
            assert_ne!(earliest, OFFSET_NONE);
            assert_ne!(latest, OFFSET_NONE);
            assert!(earliest <= latest);

            offset
        }));
    }

    let mut offsets = BTreeSet::new();
    for handle in handles {
        let offset = handle.await.expect("writer task panicked");
        assert!(offsets.insert(offset), "offset {offset} assigned twice");
    }
    offsets
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_writers_without_purge() {
    let config = LogConfig::default()
        .with_start_offset(0)
        .with_max_segment_size(100);
    let log = Arc::new(Log::new(config).unwrap());

    let offsets = run_writers(Arc::clone(&log), 100).await;

    // All 100 offsets assigned, contiguously from the start offset.
    assert_eq!(offsets, (0..100).collect());
    assert_eq!(log.range().await, (0, 99));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_writers_with_purge() {
    let config = LogConfig::default()
        .with_start_offset(100)
        .with_max_segment_size(10);
    let log = Arc::new(Log::new(config).unwrap());

    let offsets = run_writers(Arc::clone(&log), 50).await;

    // Every write succeeded and got a distinct offset, even though the
    // earliest segments were purged along the way.
    assert_eq!(offsets, (100..150).collect());
    assert_eq!(log.range().await, (130, 149));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_reads_succeed_for_every_retained_offset_during_writes() {
    let config = LogConfig::default().with_max_segment_size(10);
    let log = Arc::new(Log::new(config).unwrap());

    let writer = {
        let log = Arc::clone(&log);
        tokio::spawn(async move {
            for i in 0..200 {
                log.write(Bytes::from(format!("record-{i}")))
                    .await
                    .expect("write failed");
            }
        })
    };

    let reader = {
        let log = Arc::clone(&log);
        tokio::spawn(async move {
            loop {
                let (earliest, latest) = log.range().await;
                if earliest == OFFSET_NONE {
                    tokio::task::yield_now().await;
                    continue;
                }
                // The snapshot bounds may have been purged by the time the
                // reads run, but they can never be in the future.
                for offset in [earliest, latest] {
                    match log.read(offset).await {
                        Ok(record) => assert_eq!(record.metadata.offset, offset),
                        Err(memlog::Error::OutOfRange(_)) => {} // purged since the snapshot
                        Err(err) => panic!("unexpected read error: {err}"),
                    }
                }
                if latest == 199 {
                    break;
                }
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.expect("writer panicked");
    reader.await.expect("reader panicked");
}
