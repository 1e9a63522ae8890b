// ==========================================
// 增材制造物料平衡 - 核心库
// ==========================================
// 工序: 原料 -> 粉末制备 -> AM 粉末 -> LPBF -> 零件
// 核心: 废料回收循环的几何级数求和（不回收 / 固定次数 / 无限）
// 定位: 稳态物料比例计算,LCA 指标仅透传
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 物料平衡计算
pub mod engine;

// 配置层 - 场景配置
pub mod config;

// 错误类型
pub mod error;

// 报表输出
pub mod report;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    AmPowder, LabeledMetric, LcaMetrics, LpbfMachine, MaterialFlowResult, Part, PowderFab,
    RawFeedstock, RecyclePolicy, StageYieldModel,
};

// 计算
pub use engine::{
    calc_ampowder_per_kg_part, calc_feedstock_per_kg_ampowder, derive_splits, evaluate_chain,
    sweep_am, sweep_powderfab, BuildSplits, ChainInput, ChainResult, SweepPoint,
};

// 配置
pub use config::{ConfigError, Scenario, ScenarioConfigManager};

// 错误
pub use error::{YieldError, YieldResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "增材制造物料平衡";
