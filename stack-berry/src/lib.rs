#![warn(missing_docs)]

//! 带标签的多维图像堆栈编辑工具.
//!
//! 图像堆栈 ([`Stack`]) 是一个维度带名称的多维数组, 支持两种布局:
//!
//! 1. 4D: `(Time, Channel, y, x)`, 常见于延时成像;
//! 2. 3D: `(y, x, Channel)`, 没有时间维度.
//!
//! Channel 与 Time 维度可以各自附带坐标标签 ([`Coord`]), 例如通道名或时间戳.
//! 坐标与 1-based 序号相互独立.
//!
//! # 提供的操作
//!
//! 均位于 [`edit`] 模块, 同时以同名方法的形式挂在 [`Stack`] 上:
//!
//! - 通道: [`combine_channels`], [`extract_channel`], [`delete_channel`];
//! - 帧: [`extract_frame`], [`extract_frames`], [`delete_frames`], [`concatenate_frames`].
//!
//! 所有操作都只读取输入并返回新构造的堆栈. 失败时返回 [`StackError`],
//! 并通过 `log` 报告; 本 crate 不会自行安装 logger.
//!
//! # 注意
//!
//! 1. 通道序号与帧序号均从 1 开始.
//! 2. 帧范围操作的首尾两端 **都包含** 在范围内.
//! 3. 帧操作要求 4D 堆栈携带时间坐标, 见 [`Stack::with_time_coords`].
//!
//! # Features
//!
//! - `serde`: 为 [`Stack`], [`StackLayout`], [`Coord`] 提供序列化/反序列化支持.
//! - `full` (默认): 打开上述全部功能.

mod data;
mod error;

pub mod consts;
pub mod edit;
pub mod prelude;

pub use data::{Coord, Stack, StackLayout};
pub use edit::{
    combine_channels, concatenate_frames, delete_channel, delete_frames, extract_channel,
    extract_frame, extract_frames,
};
pub use error::StackError;

#[cfg(test)]
mod fixture;
