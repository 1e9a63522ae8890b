// ==========================================
// 增材制造物料平衡 - 场景配置管理器
// ==========================================
// 职责: 场景 JSON 加载、校验、构造领域对象
// 存储: 场景 JSON 文件（或内置演示场景）
// ==========================================

use crate::config::scenario_profile::{
    FeedstockProfile, LcaProfile, PowderFabProfile, RecycleTimes, ScenarioProfile,
};
use crate::domain::am::{LpbfMachine, Part};
use crate::domain::powderfab::{AmPowder, PowderFab, RawFeedstock};
use crate::domain::stage::StageYieldModel;
use crate::domain::types::RecyclePolicy;
use crate::engine::chain::ChainInput;
use crate::error::{ensure_fraction, YieldError};
use std::path::Path;
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("场景文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("场景 JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("场景参数无效: {0}")]
    Invalid(#[from] YieldError),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// Scenario - 已校验的场景（领域对象）
// ==========================================
#[derive(Debug, Clone)]
pub struct Scenario {
    pub scenario_id: String,
    pub feedstock: RawFeedstock,
    pub powderfab: PowderFab,
    pub powder: AmPowder,
    pub machine: LpbfMachine,
    pub part: Part,
    pub powderfab_policy: RecyclePolicy,
    pub am_policy: RecyclePolicy,
}

impl Scenario {
    pub fn chain_input(&self) -> ChainInput<'_> {
        ChainInput {
            feedstock: &self.feedstock,
            powderfab: &self.powderfab,
            powder: &self.powder,
            machine: &self.machine,
            part: &self.part,
            powderfab_policy: self.powderfab_policy,
            am_policy: self.am_policy,
        }
    }
}

// ==========================================
// ScenarioConfigManager - 场景配置管理器
// ==========================================
pub struct ScenarioConfigManager {
    profile: ScenarioProfile,
}

impl ScenarioConfigManager {
    /// 从 JSON 文件加载
    ///
    /// # 参数
    /// - path: 场景文件路径
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        tracing::info!("加载场景文件: {}", path.display());
        Self::from_json_str(&raw)
    }

    /// 从 JSON 字符串加载
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let profile: ScenarioProfile = serde_json::from_str(raw)?;
        Ok(Self { profile })
    }

    pub fn from_profile(profile: ScenarioProfile) -> Self {
        Self { profile }
    }

    /// 内置演示场景
    ///
    /// 棒材原料,收率 0.4 的粉末制备;250×250×325 成形舱,
    /// 合格率 0.9、回用 0.8、副产品 0.3 的 LPBF 打印
    pub fn builtin_demo() -> Self {
        Self::from_profile(ScenarioProfile {
            scenario_id: "demo".to_string(),
            description: Some("内置演示场景".to_string()),
            feedstock: FeedstockProfile {
                name: "material_test".to_string(),
                form: "bar".to_string(),
                lca: LcaProfile {
                    energy: 10.0,
                    co2: 50.0,
                    energy_unit: None,
                    co2_unit: None,
                },
            },
            powder_fab: PowderFabProfile {
                name: "powderfab_test".to_string(),
                stage: StageYieldModel {
                    yield_fraction: 0.4,
                    reuse_fraction: 0.0,
                    coproduct_fraction: 0.0,
                },
                lca: LcaProfile {
                    energy: 20.0,
                    co2: 100.0,
                    energy_unit: None,
                    co2_unit: None,
                },
                recycle_times: RecycleTimes::default(),
            },
            powder_name: "ampowder_test".to_string(),
            lpbf: LpbfMachine::new("machine_test", 325.0, 250.0, 250.0)
                .with_part_yield(0.9)
                .with_scrap_fractions(0.8, 0.3),
            part: Part::new("part_test", 150.0, 1_500_000.0, 10_000.0),
            am_recycle_times: RecycleTimes::default(),
        })
    }

    pub fn profile(&self) -> &ScenarioProfile {
        &self.profile
    }

    /// 序列化当前场景（用于导出/快照）
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.profile)?)
    }

    /// 校验并构造领域对象
    ///
    /// 比例、回收次数在此处校验;几何参数在计算时校验
    pub fn build(&self) -> ConfigResult<Scenario> {
        let p = &self.profile;

        p.powder_fab.stage.validate()?;
        ensure_fraction("part_yield", p.lpbf.part_yield)?;
        ensure_fraction("scrap_reuse_frac", p.lpbf.scrap_reuse_frac)?;
        ensure_fraction("scrap_coprod_frac", p.lpbf.scrap_coprod_frac)?;

        let powderfab_policy = p.powder_fab.recycle_times.to_policy()?;
        let am_policy = p.am_recycle_times.to_policy()?;

        tracing::debug!(
            scenario = %p.scenario_id,
            powderfab_policy = %powderfab_policy,
            am_policy = %am_policy,
            "场景校验通过"
        );

        Ok(Scenario {
            scenario_id: p.scenario_id.clone(),
            feedstock: RawFeedstock {
                name: p.feedstock.name.clone(),
                form: p.feedstock.form.clone(),
                lca_metrics: p.feedstock.lca.to_metrics(&p.feedstock.name),
            },
            powderfab: PowderFab::new(
                p.powder_fab.name.clone(),
                p.powder_fab.stage,
                p.powder_fab.lca.to_metrics(&p.powder_fab.name),
            ),
            powder: AmPowder {
                name: p.powder_name.clone(),
            },
            machine: p.lpbf.clone(),
            part: p.part.clone(),
            powderfab_policy,
            am_policy,
        })
    }
}
