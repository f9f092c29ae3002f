pub mod image;
pub mod session;
