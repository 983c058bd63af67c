pub mod system;
pub mod video;

pub use system::{SystemDetail, SystemRecord, VideoSegment};
pub use video::{VideoData, VideoKind, embed_loop_url, video_data};
