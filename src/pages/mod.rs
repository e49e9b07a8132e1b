mod home;
mod not_found;
mod subscribe;

pub use home::Home;
pub use not_found::NotFound;
pub use subscribe::Subscribe;
