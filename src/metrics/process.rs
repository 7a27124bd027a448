// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process-level resource metrics gathered from procfs at scrape time
//!
//! Exposes the standard `process_*` metric names (CPU time, memory,
//! file descriptors, start time). On platforms without `/proc` the
//! collector contributes nothing instead of failing the scrape.

use prometheus_client::collector::Collector;
use prometheus_client::encoding::{DescriptorEncoder, EncodeMetric};
use prometheus_client::metrics::counter::ConstCounter;
use prometheus_client::metrics::gauge::ConstGauge;

/// Kernel USER_HZ; fixed at 100 on every supported Linux target
const CLOCK_TICKS_PER_SECOND: f64 = 100.0;

/// Memory page size assumed when converting the rss field
const PAGE_SIZE_BYTES: f64 = 4096.0;

/// Scrape-time collector for process resource metrics
#[derive(Debug, Default)]
pub struct ProcessCollector;

impl ProcessCollector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Collector for ProcessCollector {
    fn encode(&self, mut encoder: DescriptorEncoder) -> Result<(), std::fmt::Error> {
        let Some(stats) = ProcessStats::read() else {
            return Ok(());
        };

        let cpu = ConstCounter::new(stats.cpu_seconds);
        let metric_encoder = encoder.encode_descriptor(
            "process_cpu_seconds",
            "Total user and system CPU time spent in seconds",
            None,
            cpu.metric_type(),
        )?;
        cpu.encode(metric_encoder)?;

        let virtual_memory = ConstGauge::new(stats.virtual_memory_bytes);
        let metric_encoder = encoder.encode_descriptor(
            "process_virtual_memory_bytes",
            "Virtual memory size in bytes",
            None,
            virtual_memory.metric_type(),
        )?;
        virtual_memory.encode(metric_encoder)?;

        let resident_memory = ConstGauge::new(stats.resident_memory_bytes);
        let metric_encoder = encoder.encode_descriptor(
            "process_resident_memory_bytes",
            "Resident memory size in bytes",
            None,
            resident_memory.metric_type(),
        )?;
        resident_memory.encode(metric_encoder)?;

        let start_time = ConstGauge::new(stats.start_time_seconds);
        let metric_encoder = encoder.encode_descriptor(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            None,
            start_time.metric_type(),
        )?;
        start_time.encode(metric_encoder)?;

        if let Some(open_fds) = stats.open_fds {
            let open = ConstGauge::new(open_fds);
            let metric_encoder = encoder.encode_descriptor(
                "process_open_fds",
                "Number of open file descriptors",
                None,
                open.metric_type(),
            )?;
            open.encode(metric_encoder)?;
        }

        if let Some(max_fds) = stats.max_fds {
            let max = ConstGauge::new(max_fds);
            let metric_encoder = encoder.encode_descriptor(
                "process_max_fds",
                "Maximum number of open file descriptors",
                None,
                max.metric_type(),
            )?;
            max.encode(metric_encoder)?;
        }

        Ok(())
    }
}

/// One scrape-time snapshot of the current process
struct ProcessStats {
    cpu_seconds: f64,
    virtual_memory_bytes: f64,
    resident_memory_bytes: f64,
    start_time_seconds: f64,
    open_fds: Option<i64>,
    max_fds: Option<i64>,
}

impl ProcessStats {
    fn read() -> Option<Self> {
        let stat = std::fs::read_to_string("/proc/self/stat").ok()?;
        let fields = parse_stat(&stat)?;
        let boot_time = std::fs::read_to_string("/proc/stat")
            .ok()
            .and_then(|s| parse_boot_time(&s))?;

        Some(Self {
            cpu_seconds: (fields.utime + fields.stime) / CLOCK_TICKS_PER_SECOND,
            virtual_memory_bytes: fields.vsize,
            resident_memory_bytes: fields.rss_pages * PAGE_SIZE_BYTES,
            start_time_seconds: boot_time + fields.starttime / CLOCK_TICKS_PER_SECOND,
            open_fds: count_open_fds(),
            max_fds: std::fs::read_to_string("/proc/self/limits")
                .ok()
                .and_then(|l| parse_max_fds(&l)),
        })
    }
}

struct StatFields {
    utime: f64,
    stime: f64,
    starttime: f64,
    vsize: f64,
    rss_pages: f64,
}

/// Parses the needed fields out of `/proc/self/stat`
///
/// The executable name (second field) is wrapped in parentheses and may
/// itself contain spaces or parentheses, so everything up to the last
/// `)` is skipped before splitting.
fn parse_stat(stat: &str) -> Option<StatFields> {
    let (_, rest) = stat.rsplit_once(')')?;
    let fields: Vec<&str> = rest.split_whitespace().collect();

    // `rest` starts at field 3 of proc(5): utime is field 14, stime 15,
    // starttime 22, vsize 23, rss 24.
    Some(StatFields {
        utime: fields.get(11)?.parse().ok()?,
        stime: fields.get(12)?.parse().ok()?,
        starttime: fields.get(19)?.parse().ok()?,
        vsize: fields.get(20)?.parse().ok()?,
        rss_pages: fields.get(21)?.parse().ok()?,
    })
}

/// Extracts the boot time (`btime`, seconds since the epoch) from `/proc/stat`
fn parse_boot_time(stat: &str) -> Option<f64> {
    stat.lines()
        .find_map(|line| line.strip_prefix("btime "))
        .and_then(|value| value.trim().parse().ok())
}

/// Soft limit from the "Max open files" row of `/proc/self/limits`
fn parse_max_fds(limits: &str) -> Option<i64> {
    let line = limits.lines().find(|l| l.starts_with("Max open files"))?;
    line.split_whitespace().nth(3)?.parse().ok()
}

fn count_open_fds() -> Option<i64> {
    let count = std::fs::read_dir("/proc/self/fd").ok()?.count();
    i64::try_from(count).ok()
}
