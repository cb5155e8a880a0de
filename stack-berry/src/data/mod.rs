//! 图像堆栈数据结构.

use std::ops::Index;

use ndarray::{Array3, Array4, ArrayD, ArrayViewD, Slice};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::dim;
use crate::StackError;

pub mod coord;
pub mod layout;

pub use coord::Coord;
pub use layout::StackLayout;

/// 带标签的多维图像堆栈.
///
/// 维度顺序由 [`StackLayout`] 决定, 为 `(Time, Channel, y, x)` 或
/// `(y, x, Channel)`. Channel 与 Time 维度可以各自携带一组坐标标签,
/// 其长度总是等于对应维度的长度.
///
/// 该结构按值语义使用: 所有编辑操作都只读取输入并返回新的堆栈.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stack<A> {
    name: String,
    layout: StackLayout,
    data: ArrayD<A>,
    channels: Option<Vec<Coord>>,
    times: Option<Vec<Coord>>,
}

impl<A> Index<&[usize]> for Stack<A> {
    type Output = A;

    #[inline]
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[index]
    }
}

impl<A> Stack<A> {
    /// 以给定布局创建没有坐标的堆栈.
    ///
    /// 若 `data` 的维度个数与 `layout` 不符, 返回
    /// `Err(StackError::UnsupportedShape)`.
    pub fn new(
        name: impl Into<String>,
        layout: StackLayout,
        data: ArrayD<A>,
    ) -> Result<Self, StackError> {
        if data.ndim() != layout.ndim() {
            return Err(StackError::UnsupportedShape {
                op: "Stack::new",
                detail: format!(
                    "expected {} dimensions ({}), got shape {:?}",
                    layout.ndim(),
                    layout.dims().join(", "),
                    data.shape()
                ),
            }
            .warned());
        }
        Ok(Self::assemble(name.into(), layout, data, None, None))
    }

    /// 根据维度个数推断布局并创建堆栈. 只接受 3D 或 4D 数据.
    pub fn from_dyn(name: impl Into<String>, data: ArrayD<A>) -> Result<Self, StackError> {
        match StackLayout::from_ndim(data.ndim()) {
            Some(layout) => Self::new(name, layout, data),
            None => Err(StackError::UnsupportedShape {
                op: "Stack::from_dyn",
                detail: format!("no channel dimension in shape {:?}", data.shape()),
            }
            .warned()),
        }
    }

    /// 从 `(Time, Channel, y, x)` 数据创建 4D 堆栈.
    #[inline]
    pub fn from_4d(name: impl Into<String>, data: Array4<A>) -> Self {
        Self::assemble(name.into(), StackLayout::FourD, data.into_dyn(), None, None)
    }

    /// 从 `(y, x, Channel)` 数据创建 3D 堆栈.
    #[inline]
    pub fn from_3d(name: impl Into<String>, data: Array3<A>) -> Self {
        Self::assemble(name.into(), StackLayout::ThreeD, data.into_dyn(), None, None)
    }

    /// 为 Channel 维度附加坐标.
    ///
    /// 坐标个数必须等于通道个数, 否则返回 `Err(StackError::ShapeMismatch)`.
    pub fn with_channel_coords<C, I>(mut self, coords: I) -> Result<Self, StackError>
    where
        C: Into<Coord>,
        I: IntoIterator<Item = C>,
    {
        let coords: Vec<Coord> = coords.into_iter().map(Into::into).collect();
        if coords.len() != self.len_channel() {
            let err = StackError::mismatch(dim::CHANNEL, self.len_channel(), coords.len());
            return Err(err.warned());
        }
        self.channels = Some(coords);
        Ok(self)
    }

    /// 为 Time 维度附加坐标. 帧操作要求 4D 堆栈携带时间坐标.
    ///
    /// - 3D 堆栈没有 Time 维度, 返回 `Err(StackError::UnsupportedShape)`;
    /// - 坐标个数不等于帧数时, 返回 `Err(StackError::ShapeMismatch)`.
    pub fn with_time_coords<C, I>(mut self, coords: I) -> Result<Self, StackError>
    where
        C: Into<Coord>,
        I: IntoIterator<Item = C>,
    {
        let Some(len) = self.len_time() else {
            let dims = self.dims().iter().copied();
            let err = StackError::unsupported("with_time_coords", "no Time dimension", dims);
            return Err(err.warned());
        };
        let coords: Vec<Coord> = coords.into_iter().map(Into::into).collect();
        if coords.len() != len {
            return Err(StackError::mismatch(dim::TIME, len, coords.len()).warned());
        }
        self.times = Some(coords);
        Ok(self)
    }

    /// 内部构造. 调用者保证各部分一致.
    pub(crate) fn assemble(
        name: String,
        layout: StackLayout,
        data: ArrayD<A>,
        channels: Option<Vec<Coord>>,
        times: Option<Vec<Coord>>,
    ) -> Self {
        debug_assert_eq!(data.ndim(), layout.ndim());
        debug_assert!(channels
            .as_ref()
            .map_or(true, |c| c.len() == data.len_of(layout.channel_axis())));
        debug_assert!(match (layout.time_axis(), &times) {
            (Some(axis), Some(t)) => t.len() == data.len_of(axis),
            (_, None) => true,
            (None, Some(_)) => false,
        });
        Self {
            name,
            layout,
            data,
            channels,
            times,
        }
    }

    /// 堆栈名称.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 维度布局.
    #[inline]
    pub fn layout(&self) -> StackLayout {
        self.layout
    }

    /// 按顺序排列的维度名称.
    #[inline]
    pub fn dims(&self) -> &'static [&'static str] {
        self.layout.dims()
    }

    /// 数据形状, 与 [`Self::dims`] 一一对应.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// 获得数据的一份不可变 shallow copy.
    #[inline]
    pub fn data(&self) -> ArrayViewD<'_, A> {
        self.data.view()
    }

    /// 取出底层数据.
    #[inline]
    pub fn into_data(self) -> ArrayD<A> {
        self.data
    }

    /// Channel 坐标.
    #[inline]
    pub fn channel_coords(&self) -> Option<&[Coord]> {
        self.channels.as_deref()
    }

    /// Time 坐标. 3D 堆栈总是返回 `None`.
    #[inline]
    pub fn time_coords(&self) -> Option<&[Coord]> {
        self.times.as_deref()
    }

    /// 通道个数.
    #[inline]
    pub fn len_channel(&self) -> usize {
        self.data.len_of(self.layout.channel_axis())
    }

    /// 帧数. 3D 堆栈返回 `None`.
    #[inline]
    pub fn len_time(&self) -> Option<usize> {
        self.layout.time_axis().map(|axis| self.data.len_of(axis))
    }

    /// 是否为携带时间坐标的 4D 堆栈, 即能否进行帧操作.
    #[inline]
    pub fn has_time(&self) -> bool {
        self.layout == StackLayout::FourD && self.times.is_some()
    }

    /// 以新名称返回自身.
    #[inline]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<A: Clone> Stack<A> {
    /// 截取通道 `[start, end)`, 名称与其余维度保持不变.
    pub(crate) fn slice_channels(&self, start: usize, end: usize) -> Self {
        let axis = self.layout.channel_axis();
        let data = self.data.slice_axis(axis, Slice::from(start..end)).to_owned();
        let channels = self.channels.as_ref().map(|c| c[start..end].to_vec());
        Self::assemble(self.name.clone(), self.layout, data, channels, self.times.clone())
    }

    /// 以步长 `step` 截取帧 `[start, end)`, 名称与其余维度保持不变.
    ///
    /// 调用者保证 `self` 为 4D 堆栈.
    pub(crate) fn slice_frames(&self, start: usize, end: usize, step: usize) -> Self {
        debug_assert_eq!(self.layout, StackLayout::FourD);
        let slice = Slice::new(start as isize, Some(end as isize), step as isize);
        let data = self
            .data
            .slice_axis(StackLayout::TIME_AXIS, slice)
            .to_owned();
        let times = self
            .times
            .as_ref()
            .map(|t| t[start..end].iter().step_by(step).cloned().collect());
        Self::assemble(self.name.clone(), self.layout, data, self.channels.clone(), times)
    }
}
