use std::{
    alloc::{self, Layout},
    fmt,
    io::{self, Write},
    mem,
    ptr::NonNull,
};

use log::trace;

use crate::error::ListError;

/// Rusty pointers to nodes.
type Link = Option<Box<Node>>;

/// Single list cell.
pub struct Node {
    value: i32,
    next: Link,
}

/// Moves `value` onto the heap, reporting an exhausted allocator as
/// [`ListError::Allocation`] instead of aborting.
fn try_box<T>(value: T) -> Result<Box<T>, ListError> {
    let layout = Layout::new::<T>();

    if layout.size() == 0 {
        return Ok(Box::new(value));
    }

    let ptr = unsafe { alloc::alloc(layout) } as *mut T;

    match NonNull::new(ptr) {
        Some(ptr) => unsafe {
            ptr.as_ptr().write(value);
            // `Box` frees with the global allocator and `Layout::new::<T>()`,
            // the same pair used above.
            Ok(Box::from_raw(ptr.as_ptr()))
        },
        None => Err(ListError::Allocation),
    }
}

impl Node {
    /// Allocates a new cell holding `value` with no successor.
    pub fn create(value: i32) -> Result<Box<Self>, ListError> {
        try_box(Node { value, next: None })
    }

    /// Allocates a cell holding `value` that already leads into `next`.
    pub fn with_next(value: i32, next: Box<Node>) -> Result<Box<Self>, ListError> {
        try_box(Node {
            value,
            next: Some(next),
        })
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns `true` if a successor hangs off this node.
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }
}

/// Singly linked list of integers. Owns its chain exclusively and keeps no
/// tail pointer, so appending walks the whole chain.
pub struct List {
    head: Link,
    len: usize,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl List {
    /// Creates an empty list.
    pub fn new() -> Self {
        List { head: None, len: 0 }
    }

    /// Creates an empty list behind a heap handle.
    pub fn create() -> Result<Box<Self>, ListError> {
        try_box(List::new())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Links `node` after the last element.
    ///
    /// `node` must be a lone cell fresh from [`Node::create`]; a node that
    /// already heads a chain is rejected with [`ListError::InvalidArgument`]
    /// and the list is left as it was.
    pub fn append(&mut self, node: Box<Node>) -> Result<(), ListError> {
        if node.is_linked() {
            return Err(ListError::InvalidArgument);
        }

        let mut link = &mut self.head;

        while let Some(cur) = link {
            link = &mut cur.next;
        }

        *link = Some(node);
        self.len += 1;

        trace!("appended node, size is now {}", self.len);
        Ok(())
    }

    /// Allocates a node for `value` and appends it.
    pub fn push(&mut self, value: i32) -> Result<(), ListError> {
        let node = Node::create(value)?;
        self.append(node)
    }

    /// Unlinks and frees the node at zero-based `index`, returning its value.
    pub fn remove_at(&mut self, index: i64) -> Result<i32, ListError> {
        let out_of_range = ListError::IndexOutOfRange {
            index,
            len: self.len,
        };

        let pos = match usize::try_from(index) {
            Ok(pos) if pos < self.len => pos,
            _ => return Err(out_of_range),
        };

        let mut link = &mut self.head;

        for _ in 0..pos {
            link = &mut link.as_mut().ok_or(out_of_range)?.next;
        }

        let mut removed = link.take().ok_or(out_of_range)?;
        *link = removed.next.take();
        self.len -= 1;

        trace!("removed index {}, size is now {}", pos, self.len);
        Ok(removed.value)
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Collects the values from head to tail.
    pub fn values(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Writes the size and contents line to `out`.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list contents (size {}):", self.len)?;

        if self.is_empty() {
            return write!(f, " NULL");
        }

        for value in self.iter() {
            write!(f, " {}", value)?;
        }

        Ok(())
    }
}

impl Drop for List {
    fn drop(&mut self) {
        // Unlink one node at a time so long chains don't recurse.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = mem::take(&mut node.next);
        }
    }
}

/// Borrowing iterator over a [`List`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}
