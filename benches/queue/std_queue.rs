use std::{
    collections::VecDeque,
    sync::{Condvar, Mutex},
};

pub struct Queue {
    items: Mutex<VecDeque<u64>>,
    not_empty: Condvar,
}

impl super::MpmcQueue for Queue {
    const NAME: &'static str = "std Mutex+Condvar";

    fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
        }
    }

    fn push(&self, value: u64) {
        let mut items = self.items.lock().unwrap();
        items.push_back(value);
        drop(items);
        self.not_empty.notify_one();
    }

    fn pop(&self) -> u64 {
        let mut items = self.items.lock().unwrap();
        loop {
            if let Some(value) = items.pop_front() {
                return value;
            }
            items = self.not_empty.wait(items).unwrap();
        }
    }
}
