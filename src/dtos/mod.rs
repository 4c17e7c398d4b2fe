pub mod people;

pub use people::{PersonInput, PersonResponse};
