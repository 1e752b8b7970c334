//! End-to-end behavior of the public API.

use cairn_collections::{EmptyStack, Heap, List, OutOfBounds, Set, Stack};

fn min_first(a: &i32, b: &i32) -> bool {
    a < b
}

fn max_first(a: &i32, b: &i32) -> bool {
    a > b
}

fn drain<T, F: Fn(&T, &T) -> bool>(heap: &mut Heap<T, F>) -> Vec<T> {
    core::iter::from_fn(|| heap.pop()).collect()
}

// ============================================================================
// Heap
// ============================================================================

#[test]
fn min_heap_construction_pops_smallest() {
    let mut heap = Heap::with_elements(min_first, [5, 3, 8, 1]);
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.pop_or_default(), 1);
}

#[test]
fn max_heap_push_sequence() {
    let mut heap = Heap::new(max_first);

    heap.push(10);
    heap.push(20);
    heap.push(5);
    assert_eq!(heap.pop_or_default(), 20);

    heap.push(1_000_000);
    heap.push(-1_000_000);
    assert_eq!(drain(&mut heap), [1_000_000, 10, 5, -1_000_000]);
}

#[test]
fn min_heap_drains_then_yields_zero() {
    let mut heap = Heap::with_elements(min_first, [15, 10, 30, 5]);

    assert_eq!(heap.pop_or_default(), 5);
    assert_eq!(heap.pop_or_default(), 10);
    assert_eq!(heap.pop_or_default(), 15);
    assert_eq!(heap.pop_or_default(), 30);

    assert_eq!(heap.len(), 0);
    assert_eq!(heap.pop_or_default(), 0);
    assert_eq!(heap.len(), 0);
}

#[test]
fn empty_construction() {
    let heap = Heap::with_elements(min_first, []);
    assert_eq!(heap.len(), 0);

    let heap = Heap::new(min_first);
    assert!(heap.is_empty());
}

#[test]
fn max_heap_by_struct_field_keeps_record_intact() {
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Task {
        priority: i32,
        name: String,
    }

    let task = |priority, name: &str| Task {
        priority,
        name: name.to_string(),
    };

    let mut heap = Heap::new(|a: &Task, b: &Task| a.priority > b.priority);
    heap.push(task(3, "Alice"));
    heap.push(task(5, "Bob"));
    heap.push(task(1, "Charlie"));

    assert_eq!(heap.pop_or_default(), task(5, "Bob"));
    heap.pop();
    heap.pop();
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.pop_or_default(), Task::default());
}

#[test]
fn named_fn_predicate_fits_default_type() {
    // A plain fn item coerces to the default predicate type
    let mut heap: Heap<i32> = Heap::new(max_first);
    heap.extend([4, 9, 2]);
    assert_eq!(heap.peek(), Some(&9));
}

#[test]
fn duplicates_all_come_back() {
    let mut heap = Heap::with_elements(min_first, [7, 3, 7, 7, 3, 9]);
    heap.push(7);

    assert_eq!(heap.len(), 7);
    assert_eq!(drain(&mut heap), [3, 3, 7, 7, 7, 7, 9]);
}

#[test]
fn extraction_is_sorted_for_any_input() {
    let input: Vec<i32> = (0..500).map(|i| (i * 7919) % 613 - 300).collect();

    let mut expected = input.clone();
    expected.sort_unstable();

    let mut heap = Heap::from_vec(min_first, input);
    assert_eq!(drain(&mut heap), expected);
}

// ============================================================================
// Collaborators
// ============================================================================

#[test]
fn list_positional_inserts() {
    let mut list = List::new();
    list.insert_at(0, 10).unwrap();
    list.insert_at(1, 20).unwrap();
    list.insert_at(1, 25).unwrap();

    assert_eq!(
        list.insert_at(5, 30),
        Err(OutOfBounds {
            position: 5,
            len: 3
        })
    );
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 25, 20]);
}

#[test]
fn stack_reports_empty_pop() {
    let mut stack = Stack::new();
    assert_eq!(stack.pop(), Err::<i32, _>(EmptyStack));
    assert_eq!(stack.top_or_default(), 0);

    stack.push(1);
    assert_eq!(stack.pop(), Ok(1));
}

#[test]
fn set_ignores_duplicates() {
    let mut set = Set::new();
    set.add("a");
    set.add("a");
    set.remove(&"missing");
    assert_eq!(set.len(), 1);
}

#[test]
fn containers_cooperate() {
    // Visit tasks by priority, remember what was seen, unwind in reverse
    let mut pending = Heap::with_elements(max_first, [2, 9, 4, 9, 1]);
    let mut seen = Set::new();
    let mut order = List::new();
    let mut undo = Stack::new();

    while let Some(priority) = pending.pop() {
        if seen.add(priority) {
            order.push_back(priority);
            undo.push(priority);
        }
    }

    assert_eq!(order.iter().copied().collect::<Vec<_>>(), [9, 4, 2, 1]);
    assert_eq!(undo.pop(), Ok(1));
    assert_eq!(seen.len(), 4);
}
