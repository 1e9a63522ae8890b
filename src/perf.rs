use std::cell::Cell;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::Instant;

// 0 = 未初始化, 1 = 关闭, 2 = 开启
static PERF_STATE: AtomicU8 = AtomicU8::new(0);
static PERF_FORCED: AtomicBool = AtomicBool::new(false);

thread_local! {
    static PERF_DEPTH: Cell<u32> = Cell::new(0);
    static SERIES_EVAL_COUNT: Cell<u64> = Cell::new(0);
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 性能日志开关
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭（可通过环境变量开启）
/// - `AM_LCA_PERF=1` 强制开启，`AM_LCA_PERF=0` 强制关闭
fn perf_enabled() -> bool {
    if PERF_FORCED.load(Ordering::Relaxed) {
        return true;
    }
    match PERF_STATE.load(Ordering::Relaxed) {
        1 => false,
        2 => true,
        _ => {
            let enabled = match std::env::var("AM_LCA_PERF") {
                Ok(v) => is_true(&v),
                Err(_) => cfg!(debug_assertions),
            };
            PERF_STATE.store(if enabled { 2 } else { 1 }, Ordering::Relaxed);
            enabled
        }
    }
}

/// 强制开启性能日志（忽略环境变量，主要用于命令行 `--perf`）
pub fn force_enable() {
    PERF_FORCED.store(true, Ordering::Relaxed);
}

/// 记录一次回收级数求值（由 engine::series 调用）
pub fn record_series_eval() {
    let active = PERF_DEPTH.with(|d| d.get() > 0);
    if !active {
        return;
    }
    SERIES_EVAL_COUNT.with(|c| c.set(c.get().saturating_add(1)));
}

/// 当前线程累计的级数求值次数（仅统计 PerfGuard 作用域内）
pub fn series_eval_count() -> u64 {
    SERIES_EVAL_COUNT.with(|c| c.get())
}

/// 性能统计 Guard：记录 elapsed_us + 级数求值次数
///
/// 使用方式：
/// ```ignore
/// let _perf = am_lca::perf::PerfGuard::new("evaluate_chain");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    eval_start: u64,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        PERF_DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        Self {
            op,
            start: Instant::now(),
            eval_start: series_eval_count(),
        }
    }

    /// 作用域内到目前为止的级数求值次数
    pub fn series_evals(&self) -> u64 {
        series_eval_count().saturating_sub(self.eval_start)
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_us = self.start.elapsed().as_micros() as u64;
        let series_evals = self.series_evals();

        if perf_enabled() {
            tracing::info!(
                target: "perf",
                op = self.op,
                elapsed_us,
                series_evals,
                "done"
            );
        }

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
