pub use filter::{visible_messages, CategoryFilter, FilterState, ParseCategoryFilterError};
pub use message::{Category, Message, Priority};
pub use seed::{load_messages, sample_messages, SeedError};
pub use store::MessageStore;

pub mod filter;
mod message;
pub mod seed;
mod store;
