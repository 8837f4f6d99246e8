//! Record types for the benchmark datasets.

/// Execution time of one GEMM variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GemmTiming {
    pub variant: &'static str,
    /// Seconds.
    pub time: f64,
}

/// Execution time of the parallel matrix multiply at a given thread count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadTiming {
    pub threads: u32,
    /// Seconds.
    pub time: f64,
}

/// Execution time of one producer/consumer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueTiming {
    pub producers: u32,
    pub consumers: u32,
    /// Seconds.
    pub time: f64,
}

/// Split GEMM timings into category names and bar heights.
pub fn split_gemm(records: &[GemmTiming]) -> (Vec<&'static str>, Vec<f64>) {
    records.iter().map(|r| (r.variant, r.time)).unzip()
}

/// Split thread timings into x (thread count) and y (time) columns.
pub fn split_threads(records: &[ThreadTiming]) -> (Vec<f64>, Vec<f64>) {
    records.iter().map(|r| (r.threads as f64, r.time)).unzip()
}

/// Producer, consumer and time columns of a producer/consumer grid.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueColumns {
    pub producers: Vec<f64>,
    pub consumers: Vec<f64>,
    pub times: Vec<f64>,
}

/// Split producer/consumer timings into parallel columns, one entry per
/// record; duplicate (producer, consumer) pairs are kept.
pub fn split_queue(records: &[QueueTiming]) -> QueueColumns {
    let mut columns = QueueColumns {
        producers: Vec::with_capacity(records.len()),
        consumers: Vec::with_capacity(records.len()),
        times: Vec::with_capacity(records.len()),
    };
    for r in records {
        columns.producers.push(r.producers as f64);
        columns.consumers.push(r.consumers as f64);
        columns.times.push(r.time);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_record_order() {
        let records = [
            ThreadTiming { threads: 4, time: 2.0 },
            ThreadTiming { threads: 1, time: 8.0 },
        ];
        let (x, y) = split_threads(&records);
        assert_eq!(x, vec![4.0, 1.0]);
        assert_eq!(y, vec![2.0, 8.0]);
    }

    #[test]
    fn split_queue_keeps_duplicates() {
        let records = [
            QueueTiming { producers: 1, consumers: 1, time: 5.0 },
            QueueTiming { producers: 1, consumers: 1, time: 4.0 },
        ];
        let cols = split_queue(&records);
        assert_eq!(
            cols,
            QueueColumns {
                producers: vec![1.0, 1.0],
                consumers: vec![1.0, 1.0],
                times: vec![5.0, 4.0],
            }
        );
        assert!(format!("{cols:?}").contains("producers"));
    }
}
