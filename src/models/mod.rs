pub mod poster;
pub mod prompt;
pub mod text;

pub use poster::*;
pub use prompt::*;
pub use text::*;
