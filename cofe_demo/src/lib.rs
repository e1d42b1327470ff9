//! Fixtures shared by the tests of the other crates.

pub mod contact;
pub mod email;
