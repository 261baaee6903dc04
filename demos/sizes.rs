// Prints the in-memory size of each queue variant, useful for sanity
// checking padding and embedded-factor overhead on a given target.

use slotq::{SpmcQueue, SpmcSizedQueue, SpscQueue};

fn main() {
    let spsc = SpscQueue::new();
    let spmc = SpmcQueue::new();
    let sized = SpmcSizedQueue::new(6).unwrap();

    println!("=========================== Queue Memory Sizes ===========================");
    println!("SpscQueue:      {} bits", std::mem::size_of_val(&spsc) * 8);
    println!("SpmcQueue:      {} bits", std::mem::size_of_val(&spmc) * 8);
    println!("SpmcSizedQueue: {} bits", std::mem::size_of_val(&sized) * 8);
    println!("============================================================================");
}
