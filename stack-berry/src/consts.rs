//! 通用常量.

/// 维度名称.
pub mod dim {
    /// 时间维度.
    pub const TIME: &str = "Time";

    /// 通道维度.
    pub const CHANNEL: &str = "Channel";

    /// 图像垂直方向.
    pub const Y: &str = "y";

    /// 图像水平方向.
    pub const X: &str = "x";

    /// 4D 堆栈的维度顺序.
    pub const FOUR_D: [&str; 4] = [TIME, CHANNEL, Y, X];

    /// 3D 堆栈的维度顺序.
    pub const THREE_D: [&str; 3] = [Y, X, CHANNEL];
}

/// 合并通道后的堆栈名称.
pub const MERGED: &str = "merged";

/// 拼接帧后的堆栈名称.
pub const CONCATENATED: &str = "concatenated";

/// 帧范围操作的默认步长.
pub const FRAME_STEP_DEFAULT: usize = 1;

/// 单通道提取结果的名称, 例如 `"Channel 2"`.
#[inline]
pub fn channel_name(channel_number: usize) -> String {
    format!("Channel {channel_number}")
}
