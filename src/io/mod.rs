pub mod input;
pub mod output;

pub use input::{load_network, read_transcript_csv};
pub use output::write_json;
