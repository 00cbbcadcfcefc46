//! Template engine adapters.

mod placeholder;

pub use placeholder::PlaceholderEngine;
