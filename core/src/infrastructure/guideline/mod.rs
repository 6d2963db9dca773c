pub mod text_index;

pub use text_index::{GuidelineIndex, LazyGuidelineIndex};
