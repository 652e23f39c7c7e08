mod controller;

pub use controller::{Session, Stage};
