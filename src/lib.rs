//! typed-hashtab: a single-threaded, policy-driven open-addressing
//! hash table with double hashing, tombstones, and slot-level access.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one associative container usable for interning, symbol
//!   lookup, and deduplication, where the caller controls hashing,
//!   equality, and disposal through a compile-time policy and can work
//!   at the level of individual slots (lookup-then-mutate idioms).
//! - Layers:
//!   - primes: the prime-size service. Maps a requested capacity to a
//!     prime table size and derives the two probe moduli (primary slot
//!     and increment) for a hash value; the increment is coprime with
//!     the size, so every probe sequence covers the whole array.
//!   - Descriptor: the element policy. Associated `Value`/`Compare`
//!     types plus static `hash`/`equal`/`dispose` functions; `Compare`
//!     may differ from `Value` for lookup by proxy.
//!   - SlotAlloc: the allocator policy for the raw slot array.
//!   - HashTable<D, A>: the table core. Probing, tombstone-based
//!     deletion, load-factor driven rehashing, destructive clear,
//!     traversal, and the slot-handle API (`find_slot_with_hash` /
//!     `fill_slot` / `clear_slot`).
//!   - Iter: forward cursor over live slots, in array order.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` by design (no atomics).
//! - The table owns every stored value; `dispose` runs exactly once
//!   per evicted or destroyed live value.
//! - Table sizes are always primes from the internal prime table;
//!   live + deleted entries never exceed the size.
//! - Not-found is `Option::None`; contract violations (clearing a
//!   non-occupied slot, out-of-range handles) and allocation failure
//!   are fatal, never recoverable errors.
//! - Stored values must not change their hash while in the table.
//!
//! Reentrancy policy
//! - The table invokes policy code (`hash`, `equal`, `dispose`) while
//!   probing or rehashing. Policy code must not reach back into the
//!   same table; a debug-only tripwire panics on such reentry.
//!
//! Notes and non-goals
//! - Iteration order is slot order, not insertion order, and any
//!   rehash invalidates handles and iterators (the borrow checker
//!   enforces the iterator half of that).
//! - Slot handles are positional, not generational: using a handle
//!   across a structural mutation is a caller bug the table may only
//!   detect as a fatal assertion.
//! - No concurrent use; callers needing that must wrap the table in
//!   their own locking or pick a different structure.

mod alloc;
mod descriptor;
pub mod primes;
mod reentrancy;
mod table;
mod table_proptest;

// Public surface
pub use alloc::{HeapAlloc, SlotAlloc};
pub use descriptor::{Descriptor, StdDescriptor};
pub use table::{HashTable, InsertMode, Iter, Slot, SlotHandle};
