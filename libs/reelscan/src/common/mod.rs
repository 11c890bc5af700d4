mod path_utils;
mod utils;

pub use path_utils::{list_frames, list_frames_with_extensions, to_verified_dir, FRAME_EXTENSIONS};
pub use utils::get_current_timestamp_str;
