// ==========================================
// 增材制造物料平衡 - 引擎层
// ==========================================
// 职责: 回收级数、几何预处理、分工序计算、全链路组合
// 红线: 纯函数,不修改输入,不缓存结果
// ==========================================

pub mod am;
pub mod chain;
pub mod geometry;
pub mod powderfab;
pub mod series;
pub mod sweep;

// 重导出核心计算
pub use am::{apply_part_yield, calc_ampowder_for_splits, calc_ampowder_per_kg_part};
pub use chain::{evaluate_chain, ChainInput, ChainResult};
pub use geometry::{derive_splits, BuildSplits};
pub use powderfab::calc_feedstock_per_kg_ampowder;
pub use series::{recycled_sum, SeriesInput};
pub use sweep::{sweep_am, sweep_powderfab, SweepPoint};
