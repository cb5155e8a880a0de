//! 涵盖了本 crate 一系列常用的功能.

pub use crate::consts::{dim, FRAME_STEP_DEFAULT};
pub use crate::edit::{
    combine_channels, concatenate_frames, delete_channel, delete_frames, extract_channel,
    extract_frame, extract_frames,
};
pub use crate::{Coord, Stack, StackError, StackLayout};
