pub mod mutate;
pub mod query;

pub use mutate::{del, new, update};
pub use query::{get, list};
