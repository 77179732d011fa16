use nexus_deque::{ByteQueue, Direction, IterError, handle};
use tracing_subscriber::EnvFilter;

const NAMES: [&str; 5] = ["antonio", "bingbing", "catherine", "deandre", "emir"];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn word(n: usize) -> [u8; 8] {
    (n as u64).to_le_bytes()
}

fn read_word(bytes: &[u8]) -> usize {
    u64::from_le_bytes(bytes.try_into().unwrap()) as usize
}

#[test]
fn init_and_length() {
    init_tracing();
    let queue = ByteQueue::new();
    assert_eq!(queue.len(), 0);
    assert_eq!(handle::length(Some(&queue)), 0);
    assert_eq!(handle::length(None), 0);
}

#[test]
fn push_back_numbers() {
    init_tracing();
    let mut queue = ByteQueue::new();
    assert_eq!(queue.peek_back(), None);
    for i in 0..10 {
        assert_eq!(queue.len(), i);
        let stored = queue.push_back(&word(i));
        assert_eq!(read_word(stored), i);
        assert_eq!(read_word(queue.peek_back().unwrap()), i);
    }
    assert_eq!(queue.len(), 10);
}

#[test]
fn push_front_strings() {
    init_tracing();
    let mut queue = ByteQueue::new();
    assert_eq!(queue.peek_front(), None);
    for (i, name) in NAMES.iter().enumerate() {
        assert_eq!(queue.len(), i);
        assert_eq!(queue.push_front(name.as_bytes()), name.as_bytes());
        assert_eq!(queue.peek_front(), Some(name.as_bytes()));
    }
    assert_eq!(queue.len(), NAMES.len());
}

#[test]
fn push_mixed_ends() {
    init_tracing();
    let mut queue = ByteQueue::new();
    for i in 0..100 {
        assert_eq!(queue.len(), i);
        let stored = if i % 2 == 0 {
            queue.push_front(&word(i))
        } else {
            queue.push_back(&word(i))
        };
        assert_eq!(read_word(stored), i);
    }
    assert_eq!(queue.len(), 100);

    let drained: Vec<usize> = queue.drain().map(|buf| read_word(&buf)).collect();
    let evens = (0..100).step_by(2).rev();
    let odds = (1..100).step_by(2);
    let expected: Vec<usize> = evens.chain(odds).collect();
    assert_eq!(drained, expected);
}

#[test]
fn pop_back_after_push_front() {
    init_tracing();
    let mut queue = ByteQueue::new();
    for name in NAMES {
        queue.push_front(name.as_bytes());
    }
    for (i, name) in NAMES.iter().enumerate() {
        assert_eq!(queue.len(), NAMES.len() - i);
        assert_eq!(queue.peek_back(), Some(name.as_bytes()));
        let owned = queue.pop_back().unwrap();
        assert_eq!(&*owned, name.as_bytes());
        if let Some(back) = queue.peek_back() {
            assert_ne!(back, name.as_bytes());
        }
    }
    assert_eq!(queue.len(), 0);
}

#[test]
fn pop_front_after_push_back() {
    init_tracing();
    let mut queue = ByteQueue::new();
    for name in NAMES {
        queue.push_back(name.as_bytes());
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.peek_back(), Some(&b"emir"[..]));

    let popped: Vec<Box<[u8]>> = std::iter::from_fn(|| queue.pop_front()).collect();
    let expected: Vec<&[u8]> = NAMES.iter().map(|n| n.as_bytes()).collect();
    assert_eq!(popped.iter().map(|b| &**b).collect::<Vec<_>>(), expected);
    assert_eq!(queue.len(), 0);
}

#[test]
fn popped_buffer_outlives_queue() {
    init_tracing();
    let owned = {
        let mut queue = ByteQueue::new();
        queue.push_back(b"kept");
        queue.push_back(b"freed with the queue");
        queue.pop_front().unwrap()
    };
    assert_eq!(&*owned, b"kept");
}

#[test]
fn iter_init_rules() {
    init_tracing();

    // Absent queue.
    assert!(handle::iter_init(None, Direction::FrontToBack.into_repr()).is_none());
    assert!(handle::iter_init(None, Direction::BackToFront.into_repr()).is_none());

    // Empty queue.
    let mut queue = ByteQueue::new();
    assert_eq!(queue.try_iter_init(Direction::FrontToBack).unwrap_err(), IterError::Empty);
    assert_eq!(queue.try_iter_init(Direction::BackToFront).unwrap_err(), IterError::Empty);

    // Duplicate iterator.
    queue.push_back(&word(137));
    let it = queue.iter_init(Direction::FrontToBack).unwrap();
    assert!(queue.iter_init(Direction::BackToFront).is_none());
    queue.iter_free(it);

    // Unknown direction code.
    assert!(handle::iter_init(Some(&queue), 2).is_none());
    handle::iter_free(Some(&queue), None);

    assert_eq!(read_word(&queue.pop_front().unwrap()), 137);
}

#[test]
fn iter_step_both_directions() {
    init_tracing();
    let queue: ByteQueue = (0..100).map(word).collect();

    let mut it = queue.iter_init(Direction::FrontToBack).unwrap();
    let mut idx = 0;
    while let Some(bytes) = queue.iter_step(&mut it) {
        assert_eq!(read_word(bytes), idx);
        idx += 1;
    }
    assert_eq!(idx, 100);
    queue.iter_free(it);

    let mut it = queue.iter_init(Direction::BackToFront).unwrap();
    let mut idx = 0;
    while let Some(bytes) = queue.iter_step(&mut it) {
        assert_eq!(read_word(bytes), 100 - idx - 1);
        idx += 1;
    }
    assert_eq!(idx, 100);
    queue.iter_free(it);
}

#[test]
fn directions_are_reverses() {
    init_tracing();
    let queue: ByteQueue = NAMES.into_iter().collect();
    let forward: Vec<&[u8]> = queue.walk(Direction::FrontToBack).unwrap().collect();
    let mut backward: Vec<&[u8]> = queue.walk(Direction::BackToFront).unwrap().collect();
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(forward.len(), NAMES.len());
}

#[test]
fn mutation_during_iteration_is_detected() {
    init_tracing();
    let mut queue: ByteQueue = (0..4).map(word).collect();
    let mut it = queue.iter_init(Direction::FrontToBack).unwrap();
    assert_eq!(read_word(queue.iter_step(&mut it).unwrap()), 0);

    // Removes the node the cursor points at.
    let _ = queue.pop_front();
    let _ = queue.pop_front();
    assert_eq!(queue.iter_step(&mut it), None);
    assert!(it.is_exhausted());

    queue.iter_free(it);
    let rest: Vec<usize> = queue.walk(Direction::FrontToBack).unwrap().map(read_word).collect();
    assert_eq!(rest, vec![2, 3]);
}
