// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Bench knobs read from `TRITON_BENCH_*` variables.
///
/// Values that fail to parse fall back to the default; all of them are
/// clamped so a typo cannot turn a bench run into an hour-long one.
struct BenchSettings {
    profile_hz: i32,
    samples: usize,
    warm_up: Duration,
    measurement: Duration,
}

impl BenchSettings {
    fn from_env() -> Self {
        let read = |name: &str| std::env::var(format!("TRITON_BENCH_{name}")).ok();
        let number = |name: &str, default: u64, max: u64| {
            let parsed = read(name).and_then(|raw| raw.trim().parse::<u64>().ok());
            parsed.unwrap_or(default).clamp(1, max)
        };

        Self {
            profile_hz: number("PROFILE_HZ", 100, 1000) as i32,
            samples: number("SAMPLES", 50, 200).max(10) as usize,
            warm_up: Duration::from_millis(number("WARMUP_MS", 1500, 60_000)),
            measurement: Duration::from_millis(number("MEASURE_MS", 4000, 120_000)),
        }
    }
}

/// Criterion configured from the environment. A flamegraph is written per
/// layout group when running with `--profile-time`.
pub fn criterion() -> Criterion {
    let settings = BenchSettings::from_env();
    Criterion::default()
        .sample_size(settings.samples)
        .warm_up_time(settings.warm_up)
        .measurement_time(settings.measurement)
        .with_profiler(PProfProfiler::new(settings.profile_hz, Output::Flamegraph(None)))
}
