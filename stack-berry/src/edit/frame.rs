use itertools::izip;

use super::{produced, zero_based};
use crate::consts::{self, dim};
use crate::{Stack, StackError, StackLayout};

/// 帧操作要求输入为携带时间坐标的 4D 堆栈. 成功时返回帧数.
fn frame_len<A>(op: &'static str, stack: &Stack<A>) -> Result<usize, StackError> {
    let dims = stack.dims().iter().copied();
    match (stack.len_time(), stack.time_coords()) {
        (Some(len), Some(_)) => Ok(len),
        (Some(_), None) => Err(StackError::unsupported(op, "no Time coordinates", dims).warned()),
        (None, _) => Err(StackError::unsupported(op, "no Time dimension", dims).warned()),
    }
}

/// 检查 1-based 闭区间 `[first_frame, last_frame]` 与步长, 返回 0-based 半开区间.
fn frame_range(
    first_frame: usize,
    last_frame: usize,
    step: usize,
    len: usize,
) -> Result<(usize, usize), StackError> {
    if step == 0 {
        return Err(StackError::ZeroStep.warned());
    }
    let start = zero_based(dim::TIME, first_frame, len)?;
    zero_based(dim::TIME, last_frame, len)?;
    if first_frame > last_frame {
        return Err(StackError::EmptyRange {
            first: first_frame,
            last: last_frame,
        }
        .warned());
    }
    Ok((start, last_frame))
}

/// 提取第 `frame_number` 个 (1-based) 帧, 结果的 Time 维度长度为 1.
///
/// # 返回值
///
/// - 输入不是携带时间坐标的 4D 堆栈时, 返回 `Err(StackError::UnsupportedShape)`;
/// - `frame_number` 越界时, 返回 `Err(StackError::IndexOutOfRange)`.
pub fn extract_frame<A: Clone>(
    stack: &Stack<A>,
    frame_number: usize,
) -> Result<Stack<A>, StackError> {
    let len = frame_len("extract_frame", stack)?;
    let index = zero_based(dim::TIME, frame_number, len)?;
    Ok(produced("extract_frame", stack.slice_frames(index, index + 1, 1)))
}

/// 以步长 `step` 提取第 `first_frame` 到第 `last_frame` 帧 (1-based, **两端都包含**).
///
/// `last_frame` 只有落在步长边界上时才会被包含, 例如 `(1, 4, 2)` 得到第 1, 3 帧.
/// 结果名称不变.
///
/// # 返回值
///
/// - 输入不是携带时间坐标的 4D 堆栈时, 返回 `Err(StackError::UnsupportedShape)`;
/// - `step == 0` 时, 返回 `Err(StackError::ZeroStep)`;
/// - 任一端点越界时, 返回 `Err(StackError::IndexOutOfRange)`;
/// - `first_frame > last_frame` 时, 返回 `Err(StackError::EmptyRange)`.
pub fn extract_frames<A: Clone>(
    stack: &Stack<A>,
    first_frame: usize,
    last_frame: usize,
    step: usize,
) -> Result<Stack<A>, StackError> {
    let len = frame_len("extract_frames", stack)?;
    let (start, end) = frame_range(first_frame, last_frame, step, len)?;
    Ok(produced("extract_frames", stack.slice_frames(start, end, step)))
}

/// 删除第 `first_frame` 到第 `last_frame` 帧 (1-based, 两端都包含).
///
/// 剩余部分分为前缀 (`first_frame` 之前的帧) 和后缀 (`last_frame` 之后的帧),
/// 两者都从各自的起点按 `step` 跨步选取, 再通过 [`concatenate_frames`]
/// 按时间顺序拼接, 结果命名为 `"concatenated"`. 删除全部帧得到帧数为 0 的堆栈.
///
/// 错误条件与 [`extract_frames`] 相同.
pub fn delete_frames<A: Clone>(
    stack: &Stack<A>,
    first_frame: usize,
    last_frame: usize,
    step: usize,
) -> Result<Stack<A>, StackError> {
    let len = frame_len("delete_frames", stack)?;
    let (start, end) = frame_range(first_frame, last_frame, step, len)?;
    let prefix = stack.slice_frames(0, start, step);
    let suffix = stack.slice_frames(end, len, step);
    concatenate_frames(&prefix, &suffix)
}

/// 沿 Time 维度按 `a`, `b` 的顺序拼接两个堆栈, 结果命名为 `"concatenated"`.
///
/// # 返回值
///
/// - 任一输入不是携带时间坐标的 4D 堆栈时, 返回 `Err(StackError::UnsupportedShape)`;
/// - Channel, y, x 任一维度长度不同, 或通道坐标不同时, 返回 `Err(StackError::ShapeMismatch)`.
pub fn concatenate_frames<A: Clone>(a: &Stack<A>, b: &Stack<A>) -> Result<Stack<A>, StackError> {
    frame_len("concatenate_frames", a)?;
    frame_len("concatenate_frames", b)?;

    // Time 维度之外的维度必须一致.
    for (name, l, r) in izip!(a.dims(), a.shape(), b.shape()).skip(1) {
        if l != r {
            return Err(StackError::mismatch(*name, *l, *r).warned());
        }
    }
    if a.channel_coords() != b.channel_coords() {
        return Err(StackError::ShapeMismatch {
            dim: dim::CHANNEL,
            detail: "channel coordinates differ".to_owned(),
        }
        .warned());
    }

    let data = ndarray::concatenate(StackLayout::TIME_AXIS, &[a.data(), b.data()])
        .map_err(|e| {
            StackError::ShapeMismatch {
                dim: dim::TIME,
                detail: e.to_string(),
            }
            .warned()
        })?;
    let times = a
        .time_coords()
        .zip(b.time_coords())
        .map(|(l, r)| [l, r].concat());
    let channels = a.channel_coords().map(<[_]>::to_vec);
    Ok(produced(
        "concatenate_frames",
        Stack::assemble(
            consts::CONCATENATED.to_owned(),
            StackLayout::FourD,
            data,
            channels,
            times,
        ),
    ))
}
