// HashTable property tests (public API).
//
// Property 1: operation sequences match a HashSet model.
//  - Model: std::collections::HashSet<u64> over a small key space.
//  - Invariant: find parity after every op; elements() == model.len();
//    live + deleted entries never exceed the size.
//  - Operations: insert, remove, find, clear.
//
// Property 2: single-slot churn stays bounded.
//  - Repeated insert/remove cycles over a handful of keys must recycle
//    tombstones through rehashes instead of growing the table.
use proptest::prelude::*;
use typed_hashtab::{HashTable, InsertMode, StdDescriptor};

fn insert_u64(table: &mut HashTable<StdDescriptor<u64>>, value: u64) -> bool {
    let handle = table.find_slot(&value, InsertMode::Insert).unwrap();
    if table.slot(handle).is_some() {
        return false;
    }
    table.fill_slot(handle, value);
    true
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u64),
    Remove(u64),
    Find(u64),
    Clear,
}

prop_compose! {
    fn arb_ops()(ops in proptest::collection::vec(
        prop_oneof![
            8 => (0u64..64).prop_map(Op::Insert),
            5 => (0u64..64).prop_map(Op::Remove),
            4 => (0u64..64).prop_map(Op::Find),
            1 => Just(Op::Clear),
        ], 1..300)) -> Vec<Op> { ops }
}

proptest! {
    #[test]
    fn prop_matches_set_model(ops in arb_ops()) {
        let mut sut: HashTable<StdDescriptor<u64>> = HashTable::new(0);
        let mut model: std::collections::HashSet<u64> = Default::default();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    let fresh = insert_u64(&mut sut, v);
                    prop_assert_eq!(fresh, model.insert(v));
                }
                Op::Remove(v) => {
                    sut.remove(&v);
                    model.remove(&v);
                }
                Op::Find(v) => {
                    prop_assert_eq!(sut.find(&v).is_some(), model.contains(&v));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(sut.elements(), model.len());
            prop_assert!(sut.elements_with_deleted() <= sut.size());
        }

        for v in 0u64..64 {
            prop_assert_eq!(sut.find(&v).is_some(), model.contains(&v));
        }
    }

    #[test]
    fn prop_churn_keeps_table_small(cycles in 1usize..200, keys in 1u64..8) {
        let mut sut: HashTable<StdDescriptor<u64>> = HashTable::new(0);

        for _ in 0..cycles {
            for k in 0..keys {
                insert_u64(&mut sut, k);
            }
            for k in 0..keys {
                sut.remove(&k);
            }
        }

        prop_assert_eq!(sut.elements(), 0);
        // Tombstones are recycled by rehashes; a live set this small
        // never justifies a larger prime.
        prop_assert!(sut.size() <= 23, "size grew to {}", sut.size());
    }
}
