use uqueue::BlockingQueue;

pub struct Queue(BlockingQueue<u64>);

impl super::MpmcQueue for Queue {
    const NAME: &'static str = "uqueue::BlockingQueue";

    fn new() -> Self {
        Self(BlockingQueue::new())
    }

    fn push(&self, value: u64) {
        self.0.push(value);
    }

    fn pop(&self) -> u64 {
        self.0.wait_and_pop()
    }
}
