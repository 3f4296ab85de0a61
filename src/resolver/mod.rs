//! Resolver module reconciling price timelines

pub mod book;
pub mod builder;
pub mod core;
pub mod merge;

pub use book::*;
pub use builder::*;
pub use core::*;
pub use merge::*;
