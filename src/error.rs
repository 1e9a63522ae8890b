// ==========================================
// 增材制造物料平衡 - 计算错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 纯数值计算,失败即整体失败,不返回部分结果,不重试
// ==========================================

use thiserror::Error;

/// 物料平衡计算错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YieldError {
    // ===== 分数/比例错误 =====
    #[error("比例超出范围 [0, 1] (字段 {field}): 值 {value}")]
    InvalidFraction { field: &'static str, value: f64 },

    #[error("无限回收发散: reuse_fraction={reuse_fraction} (废料全部回用且无泄漏)")]
    DegenerateRecycle { reuse_fraction: f64 },

    // ===== 几何错误 =====
    #[error("几何参数无效 (字段 {field}): 值 {value}")]
    InvalidGeometry { field: &'static str, value: f64 },

    // ===== 回收策略错误 =====
    #[error("回收次数无效: {0}（必须 >= 0）")]
    InvalidRecycleCount(i64),

    #[error("无法识别的回收策略: {0}（可选: inf / none / 非负整数）")]
    InvalidRecyclePolicy(String),

    // ===== 产出错误 =====
    #[error("工序无有效产出 (工序 {stage}): 有效产出={effective_output}")]
    NoEffectiveOutput {
        stage: &'static str,
        effective_output: f64,
    },

    #[error("零件合格率为 0: 无法产出合格零件")]
    ZeroPartYield,
}

/// Result 类型别名
pub type YieldResult<T> = Result<T, YieldError>;

/// 校验比例位于 [0, 1]
///
/// # 参数
/// - `field`: 字段名（写入错误信息）
/// - `value`: 待校验值
pub fn ensure_fraction(field: &'static str, value: f64) -> YieldResult<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(YieldError::InvalidFraction { field, value })
    }
}
