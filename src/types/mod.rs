mod user;

pub use user::{Address, Company, Geolocation, User};
