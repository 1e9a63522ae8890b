// ==========================================
// 增材制造物料平衡 - 领域模型层
// ==========================================
// 职责: 定义工序、设备、零件、结果等领域实体
// 红线: 不含计算逻辑（计算在 engine 层）
// ==========================================

pub mod am;
pub mod flow;
pub mod lca;
pub mod powderfab;
pub mod stage;
pub mod types;

// 重导出核心类型
pub use am::{LpbfMachine, Part};
pub use flow::MaterialFlowResult;
pub use lca::{LabeledMetric, LcaMetrics};
pub use powderfab::{AmPowder, PowderFab, RawFeedstock};
pub use stage::StageYieldModel;
pub use types::RecyclePolicy;
