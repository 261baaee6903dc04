// A small single-producer/single-consumer demo: one thread pushes a batch
// of jobs into a plain in-process Vec<i64> the demo owns, a second thread
// pops and sums them, and the demo checks the two sums agree. The payload
// array here is just a Vec the demo owns for its own lifetime; there is no
// cross-process shared-memory transport involved.

use slotq::SpscQueue;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const FACTOR: u32 = 6;
const JOB_COUNT: i64 = 10_000;

fn main() {
    let queue = Arc::new(SpscQueue::new());
    let slots = Arc::new((0..(1usize << FACTOR)).map(|_| AtomicI64::new(0)).collect::<Vec<_>>());
    let produced_sum = Arc::new(AtomicI64::new(0));

    let producer = {
        let queue = queue.clone();
        let slots = slots.clone();
        let produced_sum = produced_sum.clone();
        thread::spawn(move || {
            let mut sent = 0;
            while sent < JOB_COUNT {
                let (idx, full) = queue.push(FACTOR);
                if full {
                    thread::sleep(Duration::from_micros(50));
                    continue;
                }
                slots[idx as usize].store(sent, Ordering::Release);
                queue.push_commit();
                produced_sum.fetch_add(sent, Ordering::Relaxed);
                sent += 1;
            }
        })
    };

    let consumer = thread::spawn(move || {
        let mut consumed = 0i64;
        let mut received = 0;
        while received < JOB_COUNT {
            let (idx, empty) = queue.pop(FACTOR);
            if empty {
                thread::sleep(Duration::from_micros(50));
                continue;
            }
            consumed += slots[idx as usize].load(Ordering::Acquire);
            queue.pop_commit();
            received += 1;
        }
        consumed
    });

    producer.join().expect("producer thread panicked");
    let consumed_sum = consumer.join().expect("consumer thread panicked");
    let produced_sum = produced_sum.load(Ordering::SeqCst);

    println!("produced sum: {produced_sum}");
    println!("consumed sum: {consumed_sum}");
    assert_eq!(produced_sum, consumed_sum, "sum mismatch between producer and consumer");
    println!("ok: sums match across {JOB_COUNT} jobs");
}
