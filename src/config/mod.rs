// ==========================================
// 增材制造物料平衡 - 配置层
// ==========================================
// 职责: 场景配置加载与校验
// 存储: 场景 JSON 文件
// ==========================================

pub mod config_manager;
pub mod scenario_profile;

// 重导出核心配置管理器
pub use config_manager::{ConfigError, ConfigResult, Scenario, ScenarioConfigManager};
pub use scenario_profile::{
    FeedstockProfile, LcaProfile, PowderFabProfile, RecycleTimes, ScenarioProfile,
};
