use itertools::izip;

use super::{produced, zero_based};
use crate::consts::{self, dim};
use crate::{Coord, Stack, StackError};

/// 沿 Channel 维度按 `a`, `b` 的顺序拼接两个堆栈, 结果命名为 `"merged"`.
///
/// # 返回值
///
/// - 两者布局不同时, 返回 `Err(StackError::LayoutMismatch)`;
/// - 任一非 Channel 维度长度不同, 或只有一侧携带通道坐标, 或时间坐标不同时,
///   返回 `Err(StackError::ShapeMismatch)`;
/// - 其他情况下成功. 若两侧都携带通道坐标, 结果的通道坐标为两者依次拼接.
pub fn combine_channels<A: Clone>(a: &Stack<A>, b: &Stack<A>) -> Result<Stack<A>, StackError> {
    let layout = a.layout();
    if layout != b.layout() {
        return Err(StackError::LayoutMismatch {
            left: layout,
            right: b.layout(),
        }
        .warned());
    }

    let axis = layout.channel_axis();
    for (i, name, l, r) in izip!(0.., layout.dims(), a.shape(), b.shape()) {
        if i != axis.index() && l != r {
            return Err(StackError::mismatch(*name, *l, *r).warned());
        }
    }

    let channels = match (a.channel_coords(), b.channel_coords()) {
        (Some(l), Some(r)) => Some([l, r].concat()),
        (None, None) => None,
        _ => {
            return Err(StackError::ShapeMismatch {
                dim: dim::CHANNEL,
                detail: "channel coordinates present on one side only".to_owned(),
            }
            .warned())
        }
    };
    if a.time_coords() != b.time_coords() {
        return Err(StackError::ShapeMismatch {
            dim: dim::TIME,
            detail: "time coordinates differ".to_owned(),
        }
        .warned());
    }

    merge_channels(a, b, channels)
}

/// 沿 Channel 维度拼接 `a`, `b`, 不检查坐标. 时间坐标取自 `a`.
///
/// 调用者保证两者布局与非 Channel 维度长度一致.
fn merge_channels<A: Clone>(
    a: &Stack<A>,
    b: &Stack<A>,
    channels: Option<Vec<Coord>>,
) -> Result<Stack<A>, StackError> {
    let layout = a.layout();
    let data = ndarray::concatenate(layout.channel_axis(), &[a.data(), b.data()])
        .map_err(|e| {
            StackError::ShapeMismatch {
                dim: dim::CHANNEL,
                detail: e.to_string(),
            }
            .warned()
        })?;
    let times = a.time_coords().map(<[_]>::to_vec);
    Ok(produced(
        "combine_channels",
        Stack::assemble(consts::MERGED.to_owned(), layout, data, channels, times),
    ))
}

/// 提取第 `channel_number` 个 (1-based) 通道, 结果命名为 `"Channel {channel_number}"`.
///
/// 结果保留长度为 1 的 Channel 维度, 维度顺序与输入一致, 以便下游仍能按名称访问该维度.
/// 结果恰有一个通道坐标: 输入携带通道坐标时为被选中通道的坐标,
/// 否则为 `Coord::Index(channel_number)`.
///
/// `channel_number` 不在 `1..=通道数` 范围内时返回 `Err(StackError::IndexOutOfRange)`.
pub fn extract_channel<A: Clone>(
    stack: &Stack<A>,
    channel_number: usize,
) -> Result<Stack<A>, StackError> {
    let index = zero_based(dim::CHANNEL, channel_number, stack.len_channel())?;
    let layout = stack.layout();
    let axis = layout.channel_axis();

    // 选中单个通道后在原位置重新插入 Channel 维度.
    let data = stack
        .data()
        .index_axis_move(axis, index)
        .insert_axis(axis)
        .to_owned();
    let label = match stack.channel_coords() {
        Some(c) => c[index].clone(),
        None => Coord::Index(channel_number as i64),
    };
    let times = stack.time_coords().map(<[_]>::to_vec);
    Ok(produced(
        "extract_channel",
        Stack::assemble(
            consts::channel_name(channel_number),
            layout,
            data,
            Some(vec![label]),
            times,
        ),
    ))
}

/// 删除第 `channel_number` 个 (1-based) 通道, 其余通道保持原有相对顺序.
///
/// - 删除首通道时直接截取其后的所有通道, 名称不变;
/// - 否则将目标前后两段按 [`combine_channels`] 的方式依次拼接, 结果命名为 `"merged"`.
///   两段取自同一堆栈, 因此跳过坐标一致性检查.
///
/// `channel_number` 不在 `1..=通道数` 范围内时返回 `Err(StackError::IndexOutOfRange)`.
pub fn delete_channel<A: Clone>(
    stack: &Stack<A>,
    channel_number: usize,
) -> Result<Stack<A>, StackError> {
    let len = stack.len_channel();
    let index = zero_based(dim::CHANNEL, channel_number, len)?;
    if index == 0 {
        return Ok(produced("delete_channel", stack.slice_channels(1, len)));
    }
    let before = stack.slice_channels(0, index);
    let after = stack.slice_channels(index + 1, len);
    let channels = stack.channel_coords().map(|c| {
        let mut c = c.to_vec();
        c.remove(index);
        c
    });
    merge_channels(&before, &after, channels)
}

#[cfg(test)]
mod tests {
    use super::{combine_channels, delete_channel, extract_channel};
    use crate::fixture::{stack_3d, stack_4d};
    use crate::{Coord, Stack, StackError, StackLayout};
    use ndarray::{Array3, Array4};

    fn coords(stack: &Stack<i32>) -> Vec<String> {
        stack
            .channel_coords()
            .unwrap()
            .iter()
            .map(Coord::to_string)
            .collect()
    }

    /// 3D 堆栈 `(0, 0, *)` 处各通道的像素值, 即原通道下标.
    fn channel_values_3d(stack: &Stack<i32>) -> Vec<i32> {
        (0..stack.len_channel())
            .map(|c| stack[&[0, 0, c][..]])
            .collect()
    }

    #[test]
    fn test_delete_first_channel_3d() {
        let s = stack_3d(2, 3, 3);
        let before = s.clone();
        let d = delete_channel(&s, 1).unwrap();
        assert_eq!(s, before);

        assert_eq!(d.layout(), StackLayout::ThreeD);
        assert_eq!(d.shape(), &[2, 3, 2]);
        assert_eq!(d.name(), "stack");
        assert_eq!(coords(&d), ["C2", "C3"]);
        assert_eq!(channel_values_3d(&d), [1, 2]);
        assert_eq!(d[&[1, 2, 1][..]], 122);
    }

    #[test]
    fn test_delete_middle_and_last_channel_4d() {
        let s = stack_4d(2, 4, 2, 2);

        let d = delete_channel(&s, 3).unwrap();
        assert_eq!(d.name(), "merged");
        assert_eq!(d.dims(), &["Time", "Channel", "y", "x"]);
        assert_eq!(d.shape(), &[2, 3, 2, 2]);
        assert_eq!(coords(&d), ["C1", "C2", "C4"]);
        let got: Vec<i32> = (0..3).map(|c| d[&[1, c, 1, 0][..]]).collect();
        assert_eq!(got, [1010, 1110, 1310]);
        assert_eq!(d.time_coords(), s.time_coords());

        let d = delete_channel(&s, 4).unwrap();
        assert_eq!(coords(&d), ["C1", "C2", "C3"]);
    }

    /// 删除任一通道后, 其余通道逐个提取的结果与原堆栈对应通道一致.
    #[test]
    fn test_delete_then_extract_keeps_order() {
        for s in [stack_3d(2, 2, 4), stack_4d(3, 4, 2, 2)] {
            let len = s.len_channel();
            for n in 1..=len {
                let d = delete_channel(&s, n).unwrap();
                assert_eq!(d.len_channel(), len - 1);
                for k in 1..len {
                    let origin = if k < n { k } else { k + 1 };
                    let got = extract_channel(&d, k).unwrap();
                    let expected = extract_channel(&s, origin).unwrap();
                    assert_eq!(got.data(), expected.data());
                    assert_eq!(got.channel_coords(), expected.channel_coords());
                }
            }
        }
    }

    #[test]
    fn test_extract_channel_keeps_dims() {
        let s = stack_3d(2, 3, 3);
        let e = extract_channel(&s, 2).unwrap();
        assert_eq!(e.name(), "Channel 2");
        assert_eq!(e.dims(), &["y", "x", "Channel"]);
        assert_eq!(e.shape(), &[2, 3, 1]);
        assert_eq!(coords(&e), ["C2"]);
        assert_eq!(e[&[1, 2, 0][..]], 121);

        let s = stack_4d(3, 2, 2, 2);
        let e = s.extract_channel(1).unwrap();
        assert_eq!(e.name(), "Channel 1");
        assert_eq!(e.shape(), &[3, 1, 2, 2]);
        assert_eq!(e.len_time(), Some(3));
        assert!(e.has_time());
        assert_eq!(e[&[2, 0, 1, 1][..]], 2011);
    }

    #[test]
    fn test_combine_then_extract_round_trip() {
        let a = stack_3d(2, 2, 1);
        let b = Stack::from_3d("other", Array3::from_shape_fn((2, 2, 1), |(y, x, _)| {
            -((y * 10 + x) as i32)
        }))
        .with_channel_coords(["GFP"])
        .unwrap();

        let m = combine_channels(&a, &b).unwrap();
        assert_eq!(m.name(), "merged");
        assert_eq!(m.shape(), &[2, 2, 2]);
        assert_eq!(coords(&m), ["C1", "GFP"]);

        let first = extract_channel(&m, 1).unwrap();
        assert_eq!(first.data(), a.data());
        assert_eq!(first.channel_coords(), a.channel_coords());
        let second = m.extract_channel(2).unwrap();
        assert_eq!(second.data(), b.data());
        assert_eq!(second.channel_coords(), b.channel_coords());
    }

    #[test]
    fn test_channel_index_out_of_range() {
        let s = stack_3d(2, 2, 3);
        for n in [0, 4] {
            let expected = StackError::IndexOutOfRange {
                dim: "Channel",
                index: n,
                len: 3,
            };
            assert_eq!(extract_channel(&s, n).unwrap_err(), expected);
            assert_eq!(delete_channel(&s, n).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_combine_channels_mismatch() {
        let err = combine_channels(&stack_3d(2, 2, 1), &stack_4d(1, 1, 2, 2)).unwrap_err();
        assert_eq!(
            err,
            StackError::LayoutMismatch {
                left: StackLayout::ThreeD,
                right: StackLayout::FourD,
            }
        );

        let err = combine_channels(&stack_3d(2, 2, 1), &stack_3d(3, 2, 1)).unwrap_err();
        assert!(matches!(err, StackError::ShapeMismatch { dim: "y", .. }));

        let err = stack_4d(2, 1, 2, 2)
            .combine_channels(&stack_4d(3, 1, 2, 2))
            .unwrap_err();
        assert!(matches!(err, StackError::ShapeMismatch { dim: "Time", .. }));

        let bare = Stack::from_3d("bare", Array3::<i32>::zeros((2, 2, 1)));
        let err = combine_channels(&stack_3d(2, 2, 1), &bare).unwrap_err();
        assert!(matches!(err, StackError::ShapeMismatch { dim: "Channel", .. }));

        let m = combine_channels(&bare, &bare).unwrap();
        assert_eq!(m.channel_coords(), None);
        assert_eq!(m.len_channel(), 2);
    }

    /// 时间坐标含 `NaN` 时, 删除中间通道仍然成功.
    #[test]
    fn test_delete_channel_nan_time_coords() {
        let s = Stack::from_4d("nan", Array4::<i32>::zeros((2, 3, 2, 2)))
            .with_time_coords([0.0, f64::NAN])
            .unwrap();
        let d = delete_channel(&s, 2).unwrap();
        assert_eq!(d.shape(), &[2, 2, 2, 2]);
        assert_eq!(d.time_coords(), s.time_coords());
        assert_eq!(d.channel_coords(), None);

        let s = s.with_channel_coords([1.0, f64::NAN, 3.0]).unwrap();
        let d = delete_channel(&s, 3).unwrap();
        let expected = [Coord::from(1.0), Coord::from(f64::NAN)];
        assert_eq!(d.channel_coords().unwrap(), &expected);
    }

    /// 输入没有通道坐标时, 提取结果以序号作为唯一的通道坐标.
    #[test]
    fn test_extract_channel_ordinal_coord() {
        let bare = Stack::from_3d("bare", Array3::<i32>::zeros((2, 2, 3)));
        let e = extract_channel(&bare, 3).unwrap();
        assert_eq!(e.channel_coords().unwrap(), &[Coord::Index(3)]);

        let bare = Stack::from_4d("bare", Array4::<i32>::zeros((1, 2, 2, 2)));
        let e = bare.extract_channel(1).unwrap();
        assert_eq!(e.channel_coords().unwrap(), &[Coord::Index(1)]);
    }
}
