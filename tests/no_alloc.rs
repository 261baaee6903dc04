// Allocation tracking for property 8 ("no interior allocation"): push, pop,
// and their commits must never touch the heap. Verified two ways, mirroring
// this codebase's usual dual-method approach — a dhat-backed global
// allocator that counts allocation events precisely, and a coarser
// before/after RSS delta via memory-stats as a corroborating signal.
//
// Run the dhat test with:
//   cargo test --test no_alloc track_allocations_with_dhat -- --nocapture

use slotq::{SpmcQueue, SpmcSizedQueue, SpscQueue};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

const FACTOR: u32 = 6;
const ITERATIONS: usize = 5_000;

#[test]
#[serial_test::serial]
fn track_allocations_with_dhat() {
    println!("\n--- Running push/pop allocation check with dhat ---");
    let _profiler = dhat::Profiler::new_heap();

    let spsc = SpscQueue::new();
    let spmc = SpmcQueue::new();
    let sized = SpmcSizedQueue::new(FACTOR).unwrap();

    println!("Running {ITERATIONS} push/pop/commit cycles across all three queue types...");
    let before = dhat::HeapStats::get();
    for _ in 0..ITERATIONS {
        let (idx, full) = spsc.push(FACTOR);
        if !full {
            spsc.push_commit();
            let (_idx, empty) = spsc.pop(FACTOR);
            if !empty {
                spsc.pop_commit();
            }
        }
        std::hint::black_box(idx);

        let (idx, full) = spmc.push(FACTOR);
        if !full {
            spmc.push_commit();
            let (_idx, savepoint, empty) = spmc.pop(FACTOR);
            if !empty {
                spmc.pop_commit(savepoint);
            }
        }
        std::hint::black_box(idx);

        let (idx, full) = sized.push();
        if !full {
            sized.push_commit();
            let (_idx, savepoint, empty) = sized.pop();
            if !empty {
                sized.pop_commit(savepoint);
            }
        }
        std::hint::black_box(idx);
    }

    let after = dhat::HeapStats::get();
    println!("Heap stats before: {:?}", before);
    println!("Heap stats after: {:?}", after);
    assert_eq!(
        after.total_blocks, before.total_blocks,
        "queue operations must not allocate"
    );
    println!("✓ Zero allocations detected across {ITERATIONS} push/pop cycles - this is expected!");
    println!("  Check dhat output above for detailed allocation stats.");
}

#[test]
#[serial_test::serial]
fn track_allocations_with_memory_stats() {
    use memory_stats::memory_stats;

    println!("\n--- Running push/pop allocation check with memory-stats ---");
    let spsc = SpscQueue::new();
    let before = memory_stats();
    println!("Memory before: {:?}", before);

    println!("Running {ITERATIONS} push/pop/commit cycles...");
    for _ in 0..ITERATIONS {
        let (idx, full) = spsc.push(FACTOR);
        if !full {
            spsc.push_commit();
        }
        let (_idx, empty) = spsc.pop(FACTOR);
        if !empty {
            spsc.pop_commit();
        }
        std::hint::black_box(idx);
    }

    let after = memory_stats();
    println!("Memory after: {:?}", after);
    if let (Some(before), Some(after)) = (before, after) {
        let delta = after.physical_mem as i64 - before.physical_mem as i64;
        println!("Physical memory delta: {delta} bytes");
        // Generous bound: real allocation-per-op would show up as far more
        // than a few pages of RSS growth over this many iterations. This is
        // a coarse corroborating signal, not a precise count — dhat above
        // gives the precise one.
        assert!(
            delta.abs() < 4 * 1024 * 1024,
            "unexpectedly large RSS growth for allocation-free operations: {delta} bytes"
        );
        println!("  ✓ Minimal memory change indicates zero-allocation operations!");
    }
}
