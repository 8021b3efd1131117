pub mod network;
pub mod report;
pub mod transcript;

pub use network::*;
pub use report::*;
pub use transcript::*;
