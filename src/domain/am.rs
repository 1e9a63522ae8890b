// ==========================================
// 增材制造物料平衡 - LPBF 领域模型
// ==========================================
// 工序: AM 粉末 -> 激光粉末床熔融 (LPBF) 打印零件
// 约定: 单次打印仅一个零件
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// LpbfMachine - LPBF 设备与工艺参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpbfMachine {
    pub machine_name: String,

    // ===== 成形舱尺寸 (mm) =====
    pub build_env_height: f64,
    pub build_env_length: f64,
    pub build_env_width: f64,

    // ===== 工艺比例 =====
    #[serde(default = "default_part_yield")]
    pub part_yield: f64, // 合格零件比例 (按打印批次)
    #[serde(default)]
    pub scrap_reuse_frac: f64, // 废粉回用比例
    #[serde(default)]
    pub scrap_coprod_frac: f64, // 未回用废粉转副产品比例
}

fn default_part_yield() -> f64 {
    1.0
}

impl LpbfMachine {
    /// 创建设备（合格率 1.0,不回用,无副产品）
    pub fn new(
        machine_name: impl Into<String>,
        build_env_height: f64,
        build_env_length: f64,
        build_env_width: f64,
    ) -> Self {
        Self {
            machine_name: machine_name.into(),
            build_env_height,
            build_env_length,
            build_env_width,
            part_yield: default_part_yield(),
            scrap_reuse_frac: 0.0,
            scrap_coprod_frac: 0.0,
        }
    }

    pub fn with_part_yield(mut self, part_yield: f64) -> Self {
        self.part_yield = part_yield;
        self
    }

    pub fn with_scrap_fractions(mut self, reuse_frac: f64, coprod_frac: f64) -> Self {
        self.scrap_reuse_frac = reuse_frac;
        self.scrap_coprod_frac = coprod_frac;
        self
    }
}

// ==========================================
// Part - 待打印零件
// ==========================================
// 体积单位 mm^3,质量单位 kg（质量字段仅透传）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    pub max_height: f64, // 垂直于基板方向的最大高度 (mm)
    pub volume: f64,
    #[serde(default)]
    pub support_volume: f64,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub support_mass: Option<f64>,
}

impl Part {
    pub fn new(name: impl Into<String>, max_height: f64, volume: f64, support_volume: f64) -> Self {
        Self {
            name: name.into(),
            max_height,
            volume,
            support_volume,
            mass: None,
            support_mass: None,
        }
    }
}
