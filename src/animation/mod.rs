pub mod bezier;
pub mod driver;
pub mod window;
