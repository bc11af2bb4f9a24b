use parking_lot::{Condvar, Mutex};
use std::{
    collections::VecDeque,
    fmt,
    iter::FromIterator,
    time::{Duration, Instant},
};

/// An unbounded FIFO queue that blocks consumers until an item is available.
///
/// Any number of producer threads may [`push`] while any number of consumer
/// threads retrieve items, either by parking until one arrives
/// ([`wait_and_pop`]) or by returning immediately ([`try_pop`]). All state is
/// guarded by a single mutex paired with a condition variable; a consumer
/// never busy-waits and never holds the lock while parked.
///
/// Items come out in exactly the order they went in. When several consumers
/// are parked at once, which of them receives the next item is unspecified:
/// a push wakes at most one waiter, and a waiter that finds the queue drained
/// again (its wakeup stolen by another consumer, or spurious) goes back to
/// sleep after re-checking the predicate under the lock.
///
/// # Differences from a channel
///
/// - There is no disconnection: `wait_and_pop` on a queue that never receives
///   another item blocks forever. Callers that need an upper bound use
///   [`wait_and_pop_until`] or [`wait_and_pop_for`].
/// - Cloning does not alias the queue. [`Clone`] takes a point-in-time
///   snapshot of the items under the lock and produces an independent queue
///   with its own lock and condition variable.
///
/// [`push`]: BlockingQueue::push
/// [`wait_and_pop`]: BlockingQueue::wait_and_pop
/// [`try_pop`]: BlockingQueue::try_pop
/// [`wait_and_pop_until`]: BlockingQueue::wait_and_pop_until
/// [`wait_and_pop_for`]: BlockingQueue::wait_and_pop_for
///
/// # Examples
///
/// ```
/// use uqueue::BlockingQueue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue = Arc::new(BlockingQueue::new());
/// let consumer = {
///     let queue = Arc::clone(&queue);
///     thread::spawn(move || {
///         let mut received = Vec::new();
///         loop {
///             match queue.wait_and_pop() {
///                 0 => break,
///                 item => received.push(item),
///             }
///         }
///         received
///     })
/// };
///
/// for item in 1..=3 {
///     queue.push(item);
/// }
/// queue.push(0); // sentinel
///
/// assert_eq!(consumer.join().unwrap(), vec![1, 2, 3]);
/// ```
pub struct BlockingQueue<T> {
    items: Mutex<VecDeque<T>>,
    not_empty: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
        }
    }

    /// Appends `value` to the back of the queue and wakes one parked
    /// consumer, if any.
    ///
    /// Never suspends the caller. The notification is fire-and-forget: if no
    /// consumer is parked it goes unobserved, which is safe because every
    /// waiter re-checks the queue under the lock before parking.
    pub fn push(&self, value: T) {
        let mut items = self.items.lock();
        items.push_back(value);
        drop(items);
        self.not_empty.notify_one();
    }

    /// Removes the front item, parking the calling thread until one is
    /// available.
    ///
    /// The lock is released for the duration of each park and re-acquired
    /// before the emptiness check runs again, so a wakeup whose item was
    /// already claimed by another consumer simply parks again.
    ///
    /// Blocks forever if nothing is ever pushed; see
    /// [`wait_and_pop_until`](Self::wait_and_pop_until) for a bounded wait.
    pub fn wait_and_pop(&self) -> T {
        let mut items = self.items.lock();
        loop {
            if let Some(value) = items.pop_front() {
                return value;
            }
            self.not_empty.wait(&mut items);
        }
    }

    /// Like [`wait_and_pop`](Self::wait_and_pop), but gives up at `deadline`.
    ///
    /// Returns `None` if the queue is still empty once the deadline passes.
    /// The deadline is absolute and re-applied after every wakeup, so
    /// repeated spurious or stolen wakeups cannot stretch the total wait.
    pub fn wait_and_pop_until(&self, deadline: Instant) -> Option<T> {
        let mut items = self.items.lock();
        loop {
            if let Some(value) = items.pop_front() {
                return Some(value);
            }
            if self.not_empty.wait_until(&mut items, deadline).timed_out() {
                // A push can race the timeout; take the item if it did.
                return items.pop_front();
            }
        }
    }

    /// Like [`wait_and_pop_until`](Self::wait_and_pop_until) with a deadline
    /// of `timeout` from now.
    pub fn wait_and_pop_for(&self, timeout: Duration) -> Option<T> {
        self.wait_and_pop_until(Instant::now() + timeout)
    }

    /// Removes and returns the front item, or `None` if the queue is empty.
    ///
    /// Never suspends the caller.
    pub fn try_pop(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    /// Returns whether the queue was empty at the instant of the check.
    ///
    /// Even this read takes the lock; the items are never inspected outside
    /// it. The answer can be stale by the time it reaches the caller, so it
    /// must not gate a later unsynchronized access: use
    /// [`try_pop`](Self::try_pop) to test and take in one step.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Returns the number of queued items at the instant of the check.
    ///
    /// The same staleness caveat as [`is_empty`](Self::is_empty) applies.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }
}

/// Snapshot duplication: locks `self`, clones the items it holds at that
/// instant, and builds a queue around the copy with a fresh mutex and
/// condition variable. The clone is not a live view; later pushes to either
/// queue are invisible to the other.
impl<T: Clone> Clone for BlockingQueue<T> {
    fn clone(&self) -> Self {
        let items = self.items.lock();
        Self {
            items: Mutex::new(items.clone()),
            not_empty: Condvar::new(),
        }
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bulk append. Exclusive access means no consumer can be parked on the
/// queue, so the items go in without touching the condition variable.
impl<T> Extend<T> for BlockingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.get_mut().extend(iter);
    }
}

impl<T> FromIterator<T> for BlockingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Mutex::new(VecDeque::from_iter(iter)),
            not_empty: Condvar::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BlockingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.items.try_lock() {
            Some(items) => f
                .debug_struct("BlockingQueue")
                .field("items", &*items)
                .finish(),
            None => {
                struct LockedPlaceholder;
                impl fmt::Debug for LockedPlaceholder {
                    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str("<locked>")
                    }
                }
                f.debug_struct("BlockingQueue")
                    .field("items", &LockedPlaceholder)
                    .finish()
            }
        }
    }
}
