//! Counts heap traffic to check that a list hands back every cell it owns.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
    ptr,
};

use int_list::{List, ListError, Node};

struct Counting;

thread_local! {
    static ALLOCS: Cell<usize> = const { Cell::new(0) };
    static FREES: Cell<usize> = const { Cell::new(0) };
    static FAIL_NEXT: Cell<bool> = const { Cell::new(false) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<usize>>) {
    let _ = counter.try_with(|c| c.set(c.get() + 1));
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAIL_NEXT.try_with(|f| f.replace(false)).unwrap_or(false) {
            return ptr::null_mut();
        }
        bump(&ALLOCS);
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        bump(&FREES);
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

/// (allocations, releases) made on this thread so far.
fn counts() -> (usize, usize) {
    (ALLOCS.with(Cell::get), FREES.with(Cell::get))
}

/// Makes the next allocation on this thread come back null.
fn fail_next_alloc() {
    FAIL_NEXT.with(|f| f.set(true));
}

#[test]
fn exhausted_allocator_is_reported() {
    let mut list = List::create().unwrap();
    list.push(1).unwrap();
    list.push(2).unwrap();

    let (_, f0) = counts();

    fail_next_alloc();
    assert!(matches!(Node::create(1), Err(ListError::Allocation)));

    fail_next_alloc();
    assert!(matches!(List::create(), Err(ListError::Allocation)));

    fail_next_alloc();
    assert_eq!(list.push(3), Err(ListError::Allocation));
    assert_eq!(list.len(), 2);

    assert_eq!(counts().1, f0);
    assert_eq!(list.values(), vec![1, 2]);

    // The flag is one-shot.
    assert!(Node::create(4).is_ok());
}

#[test]
fn destroy_releases_every_node_and_the_list() {
    for n in [0usize, 1, 5, 64] {
        let (a0, f0) = counts();

        let mut list = List::create().unwrap();
        for i in 0..n {
            list.append(Node::create(i as i32).unwrap()).unwrap();
        }

        let (a1, f1) = counts();
        assert_eq!(a1 - a0, n + 1);
        assert_eq!(f1 - f0, 0);

        drop(list);

        let (a2, f2) = counts();
        assert_eq!(a2, a1);
        assert_eq!(f2 - f1, n + 1);
    }
}

#[test]
fn remove_releases_exactly_one_node() {
    let mut list = List::new();
    for i in 0..4 {
        list.push(i).unwrap();
    }

    let (a0, f0) = counts();
    assert_eq!(list.remove_at(2), Ok(2));
    let (a1, f1) = counts();
    assert_eq!(a1, a0);
    assert_eq!(f1 - f0, 1);

    assert!(list.remove_at(-1).is_err());
    assert!(list.remove_at(3).is_err());
    assert_eq!(counts(), (a1, f1));
}

#[test]
fn rejected_append_leaves_list_alone() {
    let mut list = List::new();
    list.push(1).unwrap();

    let chain = Node::with_next(2, Node::create(3).unwrap()).unwrap();

    let (a0, f0) = counts();
    assert_eq!(list.append(chain), Err(ListError::InvalidArgument));
    let (a1, f1) = counts();

    // Nothing new is allocated; the rejected chain's two cells are released.
    assert_eq!(a1, a0);
    assert_eq!(f1 - f0, 2);
    assert_eq!(list.len(), 1);
    assert_eq!(list.values(), vec![1]);
}
