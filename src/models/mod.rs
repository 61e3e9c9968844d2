pub mod macros;
pub mod notification;
pub mod shift;
pub mod stats;
pub mod swap;
pub mod user;

// Re-export all models for easy importing
pub use notification::*;
pub use shift::*;
pub use stats::*;
pub use swap::*;
pub use user::*;
