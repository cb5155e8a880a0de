//! 维度坐标标签.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 附着在某一维度某个位置上的坐标标签, 例如通道名或时间戳.
///
/// 坐标与 1-based 序号无关: 第 2 个通道的坐标可以是 `Name("GFP")`.
///
/// 浮点坐标按 [`f64::total_cmp`] 判等, 因此 `NaN` 时间戳等于自身,
/// 同一堆栈切出的两部分总能通过坐标一致性检查.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coord {
    /// 整数坐标.
    Index(i64),

    /// 浮点坐标, 常用于时间戳.
    Value(f64),

    /// 名称坐标.
    Name(String),
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Index(a), Self::Index(b)) => a == b,
            (Self::Value(a), Self::Value(b)) => a.total_cmp(b).is_eq(),
            (Self::Name(a), Self::Name(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Coord {}

impl From<i64> for Coord {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<f64> for Coord {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Coord {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for Coord {
    #[inline]
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Value(v) => write!(f, "{v}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}
