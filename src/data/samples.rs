//! Hand-entered measurements from the benchmark runs.
//! Replace these with the numbers printed by the C programs.

use super::records::{GemmTiming, QueueTiming, ThreadTiming};
use crate::charts::Rgb;

pub const GEMM_TIMINGS: &[GemmTiming] = &[
    GemmTiming { variant: "Gemm_IP", time: 1.23 },
    GemmTiming { variant: "Gemm_OP", time: 0.98 },
    GemmTiming { variant: "Gemm_ML", time: 1.45 },
    GemmTiming { variant: "Gemm_Tiling", time: 0.75 },
];

pub const GEMM_COLORS: &[Rgb] = &[Rgb::SKYBLUE, Rgb::ORANGE, Rgb::GREEN, Rgb::RED];

pub const THREAD_TIMINGS: &[ThreadTiming] = &[
    ThreadTiming { threads: 1, time: 15.23 },
    ThreadTiming { threads: 2, time: 8.12 },
    ThreadTiming { threads: 4, time: 4.23 },
    ThreadTiming { threads: 8, time: 2.56 },
    ThreadTiming { threads: 16, time: 1.45 },
];

pub const QUEUE_TIMINGS: &[QueueTiming] = &[
    QueueTiming { producers: 1, consumers: 1, time: 5.1 },
    QueueTiming { producers: 2, consumers: 1, time: 4.3 },
    QueueTiming { producers: 1, consumers: 2, time: 4.5 },
    QueueTiming { producers: 2, consumers: 2, time: 3.8 },
    QueueTiming { producers: 3, consumers: 1, time: 3.9 },
    QueueTiming { producers: 1, consumers: 3, time: 4.0 },
    QueueTiming { producers: 3, consumers: 3, time: 3.5 },
    QueueTiming { producers: 4, consumers: 2, time: 3.2 },
    QueueTiming { producers: 2, consumers: 4, time: 3.3 },
    QueueTiming { producers: 4, consumers: 4, time: 3.1 },
];
