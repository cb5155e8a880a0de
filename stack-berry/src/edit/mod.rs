//! 堆栈编辑操作.
//!
//! 所有操作都是纯函数: 读取输入堆栈并返回新构造的堆栈, 输入保持不变.
//! 失败时返回 [`StackError`], 同时通过 `log` 以 `warn` 级别报告.
//!
//! 通道与帧序号均为 **1-based**.

mod channel;
mod frame;

pub use channel::{combine_channels, delete_channel, extract_channel};
pub use frame::{concatenate_frames, delete_frames, extract_frame, extract_frames};

use crate::{Stack, StackError};

/// 将 1-based 序号 `index` 转换为 0-based 下标.
///
/// `index` 不在 `1..=len` 范围内时返回 `Err(StackError::IndexOutOfRange)`.
fn zero_based(dim: &'static str, index: usize, len: usize) -> Result<usize, StackError> {
    if (1..=len).contains(&index) {
        Ok(index - 1)
    } else {
        Err(StackError::IndexOutOfRange { dim, index, len }.warned())
    }
}

/// 记录 `op` 产生的堆栈形状, 然后原样返回.
fn produced<A>(op: &str, stack: Stack<A>) -> Stack<A> {
    log::debug!(
        "{op} -> `{}` {:?} {:?}",
        stack.name(),
        stack.dims(),
        stack.shape()
    );
    stack
}

/// 方法形式的编辑操作, 与同名自由函数等价.
impl<A: Clone> Stack<A> {
    /// 见 [`combine_channels`].
    #[inline]
    pub fn combine_channels(&self, other: &Self) -> Result<Self, StackError> {
        combine_channels(self, other)
    }

    /// 见 [`extract_channel`].
    #[inline]
    pub fn extract_channel(&self, channel_number: usize) -> Result<Self, StackError> {
        extract_channel(self, channel_number)
    }

    /// 见 [`delete_channel`].
    #[inline]
    pub fn delete_channel(&self, channel_number: usize) -> Result<Self, StackError> {
        delete_channel(self, channel_number)
    }

    /// 见 [`extract_frame`].
    #[inline]
    pub fn extract_frame(&self, frame_number: usize) -> Result<Self, StackError> {
        extract_frame(self, frame_number)
    }

    /// 见 [`extract_frames`].
    #[inline]
    pub fn extract_frames(
        &self,
        first_frame: usize,
        last_frame: usize,
        step: usize,
    ) -> Result<Self, StackError> {
        extract_frames(self, first_frame, last_frame, step)
    }

    /// 见 [`delete_frames`].
    #[inline]
    pub fn delete_frames(
        &self,
        first_frame: usize,
        last_frame: usize,
        step: usize,
    ) -> Result<Self, StackError> {
        delete_frames(self, first_frame, last_frame, step)
    }

    /// 见 [`concatenate_frames`].
    #[inline]
    pub fn concatenate_frames(&self, other: &Self) -> Result<Self, StackError> {
        concatenate_frames(self, other)
    }
}
