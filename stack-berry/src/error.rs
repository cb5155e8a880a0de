//! 运行时错误.

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::StackLayout;

/// 堆栈构造或编辑的运行时错误.
///
/// 所有错误都是终止性的: 出错的调用不产生任何结果, 也不会重试.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    /// 输入堆栈的维度布局不被该操作支持, 或缺少该操作需要的维度/坐标
    /// (例如对没有 Time 维度的堆栈做帧操作).
    UnsupportedShape {
        /// 出错的操作.
        op: &'static str,

        /// 人类可读的细节.
        detail: String,
    },

    /// 两个堆栈 (或数据与坐标) 在必须一致的维度上不一致.
    ShapeMismatch {
        /// 不一致的维度名称.
        dim: &'static str,

        /// 人类可读的细节.
        detail: String,
    },

    /// 两个堆栈的维度布局不同.
    LayoutMismatch {
        /// 左侧布局.
        left: StackLayout,

        /// 右侧布局.
        right: StackLayout,
    },

    /// 1-based 索引超出 `1..=len`.
    IndexOutOfRange {
        /// 索引所在的维度名称.
        dim: &'static str,

        /// 越界的 1-based 索引.
        index: usize,

        /// 该维度的长度.
        len: usize,
    },

    /// 帧范围首尾颠倒, 即 `first > last`.
    EmptyRange {
        /// 首帧 (1-based).
        first: usize,

        /// 末帧 (1-based).
        last: usize,
    },

    /// 帧步长为 0.
    ZeroStep,
}

impl StackError {
    /// 构造 [`StackError::UnsupportedShape`], `dims` 为输入堆栈的维度名称.
    pub(crate) fn unsupported<'a, I>(op: &'static str, why: &str, dims: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::UnsupportedShape {
            op,
            detail: format!("{why}: ({})", dims.into_iter().join(", ")),
        }
    }

    /// 构造 [`StackError::ShapeMismatch`], 描述两侧的长度.
    pub(crate) fn mismatch(dim: &'static str, left: usize, right: usize) -> Self {
        Self::ShapeMismatch {
            dim,
            detail: format!("{left} != {right}"),
        }
    }

    /// 通过 `log` 报告该错误, 然后原样返回.
    pub(crate) fn warned(self) -> Self {
        log::warn!("{self}");
        self
    }
}

impl Display for StackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedShape { op, detail } => {
                write!(f, "`{op}`: unsupported stack shape, {detail}")
            }
            Self::ShapeMismatch { dim, detail } => {
                write!(f, "shape mismatch along `{dim}`: {detail}")
            }
            Self::LayoutMismatch { left, right } => write!(
                f,
                "layout mismatch: ({}) vs ({})",
                left.dims().join(", "),
                right.dims().join(", ")
            ),
            Self::IndexOutOfRange { dim, index, len } => {
                write!(f, "`{dim}` index {index} out of range 1..={len}")
            }
            Self::EmptyRange { first, last } => {
                write!(f, "empty frame range {first}..={last}")
            }
            Self::ZeroStep => f.write_str("frame step must be positive"),
        }
    }
}

impl std::error::Error for StackError {}
