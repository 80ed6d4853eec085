//! End-to-end scenarios (spec.md §8).

use std::cell::Cell;
use std::rc::Rc;

use avl_map::AvlMap;
use rand::seq::SliceRandom;
use rand::thread_rng;

const N: i64 = 2048;

fn permutation(n: i64) -> Vec<i64> {
    let mut v: Vec<i64> = (0..n).collect();
    v.shuffle(&mut thread_rng());
    v
}

/// S1. Sorted insert + ordered readback.
#[test]
fn s1_sorted_insert_and_ordered_readback() {
    let mut map = AvlMap::new();
    for i in 0..N {
        map.insert(i, i);
        assert_eq!(map.size(), (i + 1) as usize);
    }
    for i in 0..N {
        assert_eq!(map.get(&i), Some(&i));
    }
    assert_eq!(map.get(&N), None);

    let readback: Vec<i64> = map.iter().map(|(&k, _)| k).collect();
    let expected: Vec<i64> = (0..N).collect();
    assert_eq!(readback, expected);
    assert!(map.check_invariants().is_ok());
}

/// S2. Sorted insert + random removal.
#[test]
fn s2_sorted_insert_then_random_removal() {
    let mut map: AvlMap<i64, i64> = (0..N).map(|i| (i, i)).collect();
    let removal_order = permutation(N);
    let mut removed: Vec<i64> = Vec::new();

    for &key in &removal_order {
        assert_eq!(map.remove(&key), Some(key));
        removed.push(key);

        assert!(!map.contains_key(&key), "removed key {key} still reachable");
        for &still_present in &removal_order {
            if !removed.contains(&still_present) {
                assert!(
                    map.contains_key(&still_present),
                    "key {still_present} lost before its own removal"
                );
            }
        }
    }

    assert!(map.is_empty());
}

/// S3. Random insert + random remove, tracking deleter-call multiplicity.
#[test]
fn s3_random_insert_then_random_remove_drops_each_value_once() {
    #[derive(Clone)]
    struct Counted(Rc<Cell<u32>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let insert_order = permutation(N);
    let remove_order = permutation(N);

    let counters: Vec<Rc<Cell<u32>>> = (0..N).map(|_| Rc::new(Cell::new(0))).collect();

    let mut map = AvlMap::new();
    for &key in &insert_order {
        map.insert(key, Counted(counters[key as usize].clone()));
    }

    for &key in &remove_order {
        let entry = map.remove(&key);
        assert!(entry.is_some(), "key {key} missing at removal time");
        drop(entry);
        assert_eq!(
            counters[key as usize].get(),
            1,
            "key {key}'s value was not dropped exactly once by its own removal"
        );
    }

    assert!(map.is_empty());
    for (key, counter) in counters.iter().enumerate() {
        assert_eq!(counter.get(), 1, "key {key}'s value dropped {} times, expected 1", counter.get());
    }
}

/// S4. `get_or_insert_with` preserves move semantics: the factory runs
/// at most once, only on the first call for a given key.
#[test]
fn s4_get_or_insert_with_runs_factory_once() {
    let mut map: AvlMap<String, String> = AvlMap::new();
    let key = "a moderately long key that would be expensive to rebuild".to_string();

    let mut first_call_count = 0;
    let (value, inserted) = map.get_or_insert_with(key.clone(), || {
        first_call_count += 1;
        "payload".to_string()
    });
    assert!(inserted);
    assert_eq!(value, "payload");

    let mut second_call_count = 0;
    let (value, inserted) = map.get_or_insert_with(key.clone(), || {
        second_call_count += 1;
        "should never be produced".to_string()
    });
    assert!(!inserted);
    assert_eq!(value, "payload");
    assert_eq!(first_call_count, 1);
    assert_eq!(second_call_count, 0);

    value.push_str("-updated");
    assert_eq!(map.get(&key), Some(&"payload-updated".to_string()));
}

/// S5. Duplicate-key insert returns the previous value; size stays at 1.
#[test]
fn s5_duplicate_key_insert_returns_previous() {
    let mut map = AvlMap::new();
    assert_eq!(map.insert("foo", 5), None);
    assert_eq!(map.insert("foo", 6), Some(5));
    assert_eq!(map.get("foo"), Some(&6));
    assert_eq!(map.len(), 1);
}

/// S6. Height stays logarithmic under strictly ascending (adversarial) input.
#[test]
fn s6_height_stays_logarithmic() {
    for &n in &[1usize, 16, 256, 4096] {
        let mut map = AvlMap::new();
        for i in 0..n as i64 {
            map.insert(i, i);
        }
        let bound = ((1.44 * ((n as f64 + 2.0).log2())).ceil()) as usize;
        assert!(
            map.height() <= bound,
            "height {} exceeded bound {} for n = {}",
            map.height(),
            bound,
            n
        );
    }
}

/// Boundary case: empty tree operations are all safe no-ops.
#[test]
fn boundary_empty_tree_is_safe() {
    let mut map: AvlMap<i32, i32> = AvlMap::new();
    assert_eq!(map.get(&1), None);
    assert_eq!(map.remove(&1), None);
    map.traverse(|_, _| panic!("empty map has no entries to traverse"));
    map.clear();
    assert_eq!(map.size(), 0);
}

/// Boundary case: all three delete sub-cases on a single-node tree.
#[test]
fn boundary_single_node_deletion_subcases() {
    let mut leaf: AvlMap<i32, i32> = AvlMap::new();
    leaf.insert(1, 1);
    assert_eq!(leaf.remove(&1), Some(1));
    assert!(leaf.is_empty());

    let mut one_child: AvlMap<i32, i32> = [2, 1].into_iter().map(|k| (k, k)).collect();
    assert_eq!(one_child.remove(&2), Some(2));
    assert!(one_child.check_invariants().is_ok());

    let mut two_children: AvlMap<i32, i32> = [2, 1, 3].into_iter().map(|k| (k, k)).collect();
    assert_eq!(two_children.remove(&2), Some(2));
    assert!(two_children.check_invariants().is_ok());
}

/// Boundary case: deleting a node whose successor is its immediate right child.
#[test]
fn boundary_successor_is_immediate_right_child() {
    let mut map: AvlMap<i32, i32> = [2, 1, 3].into_iter().map(|k| (k, k)).collect();
    assert_eq!(map.remove(&2), Some(2));
    assert!(map.contains_key(&3));
    assert!(map.check_invariants().is_ok());
}

/// Algebraic law: insert then remove of a previously absent key restores
/// the same key/value content. This crate's internal `map` module tests
/// carry the stronger version of this law (same tree shape and balance
/// factors, not just same content), since only code inside the crate can
/// see the arena to check that.
#[test]
fn law_insert_then_remove_is_identity() {
    let mut map: AvlMap<i32, i32> = [10, 5, 15, 3, 7].into_iter().map(|k| (k, k)).collect();
    let before: Vec<(i32, i32)> = map.iter().map(|(&k, &v)| (k, v)).collect();

    map.insert(100, 100);
    assert_eq!(map.remove(&100), Some(100));

    let after: Vec<(i32, i32)> = map.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(before, after);
    assert!(map.check_invariants().is_ok());
}

/// Algebraic law: deleting an absent key is a no-op.
#[test]
fn law_delete_of_absent_key_is_noop() {
    let mut map: AvlMap<i32, i32> = [10, 5, 15].into_iter().map(|k| (k, k)).collect();
    let len_before = map.len();
    assert_eq!(map.remove(&999), None);
    assert_eq!(map.len(), len_before);
}
