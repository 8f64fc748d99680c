pub mod me;
pub mod tags;
pub mod users;
