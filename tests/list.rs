extern crate pooled_list;

use std::cell::RefCell;

use pooled_list::space::BASELINE_POOL;
use pooled_list::PooledList;
use pretty_assertions::assert_eq;

#[test]
fn cleanup_runs_head_to_tail() {
    let collected = RefCell::new(Vec::new());
    let mut list =
        PooledList::<&str>::boxed_with_cleanup(0, |value| collected.borrow_mut().push(value));

    list.push("a");
    list.push("b");
    list.push("c");
    assert_eq!(list.len(), 3);

    PooledList::destroy_boxed(Some(list));
    assert_eq!(*collected.borrow(), ["a", "b", "c"]);
}

#[test]
fn one_past_pool_is_one_heap_node() {
    let words: Vec<String> = (0..=BASELINE_POOL).map(|i| format!("word-{}", i)).collect();

    let mut list = PooledList::<&str>::boxed(BASELINE_POOL);
    for word in &words {
        list.push(word);
    }

    assert_eq!(list.heap_len(), 1);
    assert_eq!(list.get(BASELINE_POOL), Some(&words[BASELINE_POOL].as_str()));
}

#[test]
fn index_of_str_prefers_first() {
    let list = pooled_list::pooled_list!["x", "y", "x"];
    assert_eq!(list.index_of_str("x"), Some(0));
    assert_eq!(list.index_of_str("y"), Some(1));
    assert_eq!(list.index_of_str("z"), None);
}

#[test]
fn index_of_str_on_owned_strings() {
    let list: PooledList<String> = ["alpha", "beta", "gamma"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(list.index_of_str("gamma"), Some(2));
    assert_eq!(list.index_of_str(&String::from("beta")), Some(1));
    assert_eq!(list.index_of_str("Gamma"), None);
}

#[test]
fn get_across_pool_boundary() {
    let mut list: PooledList<usize> = PooledList::new();
    list.extend(0..3 * BASELINE_POOL);

    for i in 0..3 * BASELINE_POOL {
        assert_eq!(list.get(i), Some(&i));
    }
    assert_eq!(list.heap_len(), 2 * BASELINE_POOL);
}

#[test]
fn get_from_resumes_scan() {
    let list: PooledList<u32> = (100..130).collect();

    let cursor = list.cursor_at(5).unwrap();
    assert_eq!(list.get_from(cursor, 0), Some(&105));
    assert_eq!(list.get_from(cursor, 10), Some(&115));
    assert_eq!(list.get_from(cursor, 24), Some(&129));
    assert_eq!(list.get_from(cursor, 25), None);
}

#[test]
fn cleanup_once_per_value_with_heap_nodes() {
    let released = RefCell::new(Vec::new());
    {
        let mut list = PooledList::<u32>::with_cleanup(|value| released.borrow_mut().push(value));
        list.extend(0..20);
        assert_eq!(list.heap_len(), 20 - BASELINE_POOL);
    }
    assert_eq!(*released.borrow(), (0..20).collect::<Vec<_>>());
}

#[test]
fn destroyed_list_rejects_everything() {
    use pooled_list::Fault;

    let mut list: PooledList<&str> = pooled_list::pooled_list!["a", "b"];
    let cursor = list.front().unwrap();
    assert_eq!(list.try_destroy(), Ok(2));

    assert_eq!(list.len(), 0);
    assert!(list.is_destroyed());
    assert_eq!(list.try_get(0), Err(Fault::Destroyed));
    assert_eq!(list.try_get_from(cursor, 0), Err(Fault::Destroyed));
    assert_eq!(list.try_index_of_str("a"), Err(Fault::Destroyed));
    assert_eq!(list.try_push("c").unwrap_err(), Fault::Destroyed);
    assert_eq!(list.try_destroy(), Err(Fault::Destroyed));
}

#[test]
#[should_panic(expected = "list has been destroyed")]
fn get_after_destroy_panics() {
    let mut list: PooledList<u8> = (0..4).collect();
    list.destroy();
    list.get(0);
}

#[test]
#[should_panic(expected = "cursor does not reference a live item")]
fn foreign_cursor_panics() {
    let a: PooledList<u8> = (0..4).collect();
    let b: PooledList<u8> = (0..4).collect();
    let cursor = a.front().unwrap();
    b.is_live(Some(cursor));
}

#[test]
fn destroy_boxed_none_is_noop() {
    PooledList::<u8>::destroy_boxed(None);
}

#[test]
fn panicking_cleanup_unwinds_cleanly() {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    let released = RefCell::new(Vec::new());
    let mut list = PooledList::<usize>::with_cleanup(|value| {
        if value == 1 {
            panic!("cleanup failed");
        }
        released.borrow_mut().push(value);
    });
    list.extend(0..2 * BASELINE_POOL);

    let result = catch_unwind(AssertUnwindSafe(|| list.destroy()));
    assert!(result.is_err());
    assert_eq!(*released.borrow(), [0]);
    assert!(list.is_destroyed());
    assert_eq!(list.len(), 0);
    assert_eq!(list.heap_len(), 0);
    assert_eq!(list.try_destroy(), Err(pooled_list::Fault::Destroyed));
}

#[test]
fn panicking_cleanup_in_drop_propagates() {
    use std::panic::catch_unwind;

    let result = catch_unwind(|| {
        let mut list = PooledList::<u32>::with_cleanup(|_| panic!("cleanup failed"));
        list.extend(0..4);
    });
    assert!(result.is_err());
}
