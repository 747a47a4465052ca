pub mod attachment;
pub mod centering;
pub mod result;

pub use attachment::AttachmentResolver;
pub use centering::should_center_step;
pub use result::{ResolveError, ResolvedAttachment};
