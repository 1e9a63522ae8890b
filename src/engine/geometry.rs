// ==========================================
// 增材制造物料平衡 - 成形舱几何预处理
// ==========================================
// 由成形舱尺寸与零件几何导出 LPBF 的粉末分配比例
// 铺粉体积 = 舱长 × 舱宽 × 零件最大高度
// ==========================================

use crate::domain::am::{LpbfMachine, Part};
use crate::error::{ensure_fraction, YieldError, YieldResult};
use serde::{Deserialize, Serialize};

/// 单次打印的粉末分配比例
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildSplits {
    pub fill_volume: f64,
    pub part_split: f64,               // 铺粉中固结为零件的比例
    pub chamber_scrap_split: f64,      // 铺粉中的废料比例
    pub scrap_volume: f64,
    pub melted_scrap_waste_split: f64, // 废料中熔融为支撑的比例（不可回收）
    pub powder_scrap_split: f64,       // 废料中仍为松散粉末的比例
}

impl BuildSplits {
    /// 可回用的废粉比例（以铺粉为基准）
    pub fn recyclable_scrap_split(&self) -> f64 {
        self.chamber_scrap_split * self.powder_scrap_split
    }
}

/// 导出粉末分配比例
///
/// # 错误
/// - InvalidGeometry: 铺粉体积 <= 0、零件体积/高度 <= 0、支撑体积 < 0、存在支撑但废料体积 <= 0
/// - InvalidFraction: 导出比例超出 [0, 1]（零件 + 支撑超出铺粉体积）
pub fn derive_splits(machine: &LpbfMachine, part: &Part) -> YieldResult<BuildSplits> {
    ensure_positive("max_height", part.max_height)?;
    ensure_positive("part_volume", part.volume)?;
    if !part.support_volume.is_finite() || part.support_volume < 0.0 {
        return Err(YieldError::InvalidGeometry {
            field: "support_volume",
            value: part.support_volume,
        });
    }

    if part.max_height > machine.build_env_height {
        tracing::warn!(
            machine = %machine.machine_name,
            part = %part.name,
            max_height = part.max_height,
            build_env_height = machine.build_env_height,
            "零件高度超出成形舱高度"
        );
    }

    let fill_volume = machine.build_env_length * machine.build_env_width * part.max_height;
    ensure_positive("fill_volume", fill_volume)?;

    let part_split = ensure_fraction("part_split", part.volume / fill_volume)?;
    let chamber_scrap_split = 1.0 - part_split;
    let scrap_volume = chamber_scrap_split * fill_volume;

    // 零件恰好填满铺粉且无支撑: 不存在废料
    let melted_scrap_waste_split = if scrap_volume <= 0.0 && part.support_volume == 0.0 {
        0.0
    } else {
        ensure_positive("scrap_volume", scrap_volume)?;
        ensure_fraction("melted_scrap_waste_split", part.support_volume / scrap_volume)?
    };

    let splits = BuildSplits {
        fill_volume,
        part_split,
        chamber_scrap_split,
        scrap_volume,
        melted_scrap_waste_split,
        powder_scrap_split: 1.0 - melted_scrap_waste_split,
    };

    tracing::debug!(
        part = %part.name,
        fill_volume,
        part_split,
        melted_scrap_waste_split,
        "成形舱粉末分配"
    );

    Ok(splits)
}

fn ensure_positive(field: &'static str, value: f64) -> YieldResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(YieldError::InvalidGeometry { field, value })
    }
}
