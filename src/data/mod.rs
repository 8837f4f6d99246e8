//! Data module - Benchmark records and sample measurements

mod records;
pub mod samples;

pub use records::{
    split_gemm, split_queue, split_threads, GemmTiming, QueueColumns, QueueTiming, ThreadTiming,
};
