pub mod algorithms;

pub use algorithms::intervals::{producer_intervals, ProducerIntervalEntry, ProducerIntervalReport};
