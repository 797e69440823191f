mod polyline_offset;

pub use polyline_offset::{offset_segment, OffsetDirection, PolylineOffset};
