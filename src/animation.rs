pub mod ticker;
pub mod typing;

pub use ticker::{AnimationLoop, TimeoutScheduler};
pub use typing::{TypingFrame, TypingSession};
