pub mod events;
pub mod notifications;
pub mod offers;
pub mod shared;
pub mod shifts;
pub mod stats;
pub mod swaps;
