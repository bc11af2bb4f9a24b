use crossbeam_channel::{unbounded, Receiver, Sender};

pub struct Queue {
    tx: Sender<u64>,
    rx: Receiver<u64>,
}

impl super::MpmcQueue for Queue {
    const NAME: &'static str = "crossbeam-channel";

    fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    fn push(&self, value: u64) {
        self.tx.send(value).expect("channel disconnected");
    }

    fn pop(&self) -> u64 {
        self.rx.recv().expect("channel disconnected")
    }
}
