//! 测试用堆栈. 每个像素值按十进制位编码自身位置, 便于检查切片结果.

use ndarray::{Array3, Array4};

use crate::Stack;

/// 安装测试日志. 多次调用是安全的.
pub(crate) fn init_log() {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init();
}

/// `(y, x, Channel)` 堆栈, 像素值为 `y * 100 + x * 10 + c`,
/// 通道坐标为 `"C1"`, `"C2"`, ...
pub(crate) fn stack_3d(y: usize, x: usize, c: usize) -> Stack<i32> {
    init_log();
    let data = Array3::from_shape_fn((y, x, c), |(y, x, c)| (y * 100 + x * 10 + c) as i32);
    Stack::from_3d("stack", data)
        .with_channel_coords((1..=c).map(|i| format!("C{i}")))
        .unwrap()
}

/// `(Time, Channel, y, x)` 堆栈, 像素值为 `t * 1000 + c * 100 + y * 10 + x`,
/// 通道坐标为 `"C1"`, `"C2"`, ..., 时间坐标为 `0.0`, `1.0`, ...
pub(crate) fn stack_4d(t: usize, c: usize, y: usize, x: usize) -> Stack<i32> {
    init_log();
    let data = Array4::from_shape_fn((t, c, y, x), |(t, c, y, x)| {
        (t * 1000 + c * 100 + y * 10 + x) as i32
    });
    Stack::from_4d("stack", data)
        .with_channel_coords((1..=c).map(|i| format!("C{i}")))
        .unwrap()
        .with_time_coords((0..t).map(|i| i as f64))
        .unwrap()
}

/// 按行优先序收集 `stack` 在 Time 维度上每一帧的首个像素值,
/// 即 `t * 1000 + c0 * 100`.
pub(crate) fn frame_heads(stack: &Stack<i32>) -> Vec<i32> {
    stack
        .data()
        .outer_iter()
        .map(|frame| *frame.iter().next().unwrap())
        .collect()
}
