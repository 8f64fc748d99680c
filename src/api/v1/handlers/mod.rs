pub mod health;
pub mod me;
pub mod tags;
pub mod users;
