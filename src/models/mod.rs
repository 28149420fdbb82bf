pub mod audit;
pub mod user;

pub use audit::ActivityEntry;
pub use user::{NewUser, UserRecord};
