//! Element policy: how stored values are hashed, compared, and
//! disposed of.

use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use rustc_hash::FxHasher;

/// Policy describing the element type of a [`HashTable`].
///
/// A descriptor binds four things at compile time:
///
/// - `Value`: the stored type. The table owns each value from the
///   moment it is written into a slot until it is disposed.
/// - `Compare`: the lookup-key type. Usually the same as `Value`; a
///   different type (for example `str` against a stored `String`)
///   enables lookup by proxy, in which case callers compute hash
///   values themselves and use the `*_with_hash` operations.
/// - `hash` / `equal`: the hash function and the equality predicate.
///   Two values with equal hashes need not be equal; equal values must
///   hash identically, and a stored value must never change its hash.
/// - `dispose`: consumes a value evicted from the table (on removal,
///   destructive clear, or teardown). The default drops it, which
///   frees owned values and is a no-op for `Copy` and reference types.
///   `dispose` must not reenter the table it is being called from.
///
/// [`HashTable`]: crate::HashTable
pub trait Descriptor {
    type Value;
    type Compare: ?Sized;

    fn hash(value: &Self::Value) -> u32;

    fn equal(value: &Self::Value, candidate: &Self::Compare) -> bool;

    fn dispose(value: Self::Value) {
        drop(value);
    }
}

/// Ready-made descriptor for any `T: Hash + Eq`.
///
/// Hashes with `FxHasher`, compares with `==`, disposes by drop.
pub struct StdDescriptor<T>(PhantomData<T>);

impl<T: Hash + Eq> Descriptor for StdDescriptor<T> {
    type Value = T;
    type Compare = T;

    fn hash(value: &T) -> u32 {
        let mut hasher = FxHasher::default();
        value.hash(&mut hasher);
        let h = hasher.finish();
        // Fold the high half in; the probe moduli only see 32 bits.
        (h ^ (h >> 32)) as u32
    }

    fn equal(value: &T, candidate: &T) -> bool {
        value == candidate
    }
}
