//! 堆栈维度布局.

use ndarray::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::dim;

/// 堆栈支持的两种维度布局.
///
/// 所有依赖维度个数的操作都对该枚举做穷尽匹配, 不存在第三种布局.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StackLayout {
    /// `(y, x, Channel)`, 没有时间维度.
    ThreeD,

    /// `(Time, Channel, y, x)`.
    FourD,
}

impl StackLayout {
    /// 4D 布局中时间维度所在的轴.
    pub const TIME_AXIS: Axis = Axis(0);

    /// 根据维度个数推断布局. 只接受 3 或 4.
    #[inline]
    pub const fn from_ndim(ndim: usize) -> Option<Self> {
        match ndim {
            3 => Some(Self::ThreeD),
            4 => Some(Self::FourD),
            _ => None,
        }
    }

    /// 维度个数.
    #[inline]
    pub const fn ndim(&self) -> usize {
        match self {
            Self::ThreeD => 3,
            Self::FourD => 4,
        }
    }

    /// 按顺序排列的维度名称.
    #[inline]
    pub const fn dims(&self) -> &'static [&'static str] {
        match self {
            Self::ThreeD => &dim::THREE_D,
            Self::FourD => &dim::FOUR_D,
        }
    }

    /// Channel 维度所在的轴.
    #[inline]
    pub const fn channel_axis(&self) -> Axis {
        match self {
            Self::ThreeD => Axis(2),
            Self::FourD => Axis(1),
        }
    }

    /// Time 维度所在的轴. 3D 布局没有时间维度.
    #[inline]
    pub const fn time_axis(&self) -> Option<Axis> {
        match self {
            Self::ThreeD => None,
            Self::FourD => Some(Self::TIME_AXIS),
        }
    }

    /// 名为 `name` 的维度所在的轴.
    pub fn axis_of(&self, name: &str) -> Option<Axis> {
        self.dims().iter().position(|d| *d == name).map(Axis)
    }
}
