#![warn(rust_2018_idioms, unreachable_pub)]

mod queue;

pub use self::queue::BlockingQueue;
