//! Value objects - small immutable types shared across layers

mod family;

pub use family::{Family, Operation, UnknownFamily};
