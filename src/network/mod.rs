pub mod builder;
pub mod normalize;

pub use builder::*;
pub use normalize::*;
