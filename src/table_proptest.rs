#![cfg(test)]

// Property tests for the table core kept inside the crate so they can
// call the internal integrity check after every operation.

use crate::table::{HashTable, InsertMode};
use crate::Descriptor;
use proptest::prelude::*;
use std::collections::HashMap;

// Collision-heavy policy: eight primary chains for the whole key
// space, so tombstone reuse and probe skipping are constantly hit.
struct Clustered;

fn key_hash(key: u8) -> u32 {
    (key % 8) as u32
}

impl Descriptor for Clustered {
    type Value = (u8, i32);
    type Compare = u8;

    fn hash(value: &Self::Value) -> u32 {
        key_hash(value.0)
    }

    fn equal(value: &Self::Value, candidate: &u8) -> bool {
        value.0 == *candidate
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u8, i32),
    Remove(u8),
    Find(u8),
    Traverse,
    Clear,
}

prop_compose! {
    fn arb_ops()(ops in proptest::collection::vec(
        prop_oneof![
            8 => (0u8..32, any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
            4 => (0u8..32).prop_map(Op::Remove),
            4 => (0u8..32).prop_map(Op::Find),
            2 => Just(Op::Traverse),
            1 => Just(Op::Clear),
        ], 1..200)) -> Vec<Op> { ops }
}

// State machine against a std::collections::HashMap model. The model
// has upsert semantics; inserts into an occupied slot replace.
proptest! {
    #[test]
    fn prop_state_machine(ops in arb_ops()) {
        let mut sut: HashTable<Clustered> = HashTable::new(0);
        let mut model: HashMap<u8, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let handle = sut
                        .find_slot_with_hash(&k, key_hash(k), InsertMode::Insert)
                        .unwrap();
                    let displaced = sut.fill_slot(handle, (k, v));
                    let modeled = model.insert(k, v);
                    prop_assert_eq!(displaced.map(|(_, dv)| dv), modeled);
                }
                Op::Remove(k) => {
                    sut.remove_with_hash(&k, key_hash(k));
                    model.remove(&k);
                }
                Op::Find(k) => {
                    let found = sut.find_with_hash(&k, key_hash(k));
                    prop_assert_eq!(found.map(|v| v.1), model.get(&k).copied());
                }
                Op::Traverse => {
                    let mut seen: HashMap<u8, i32> = HashMap::new();
                    sut.traverse(|_, &(k, v)| {
                        seen.insert(k, v);
                        true
                    });
                    prop_assert_eq!(&seen, &model);
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }

            sut.check_integrity();
            prop_assert_eq!(sut.elements(), model.len());
            prop_assert!(sut.elements_with_deleted() <= sut.size());
        }

        // Final parity over the whole key space.
        for k in 0u8..32 {
            prop_assert_eq!(
                sut.find_with_hash(&k, key_hash(k)).map(|v| v.1),
                model.get(&k).copied()
            );
        }
    }
}
