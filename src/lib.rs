pub mod centrality;
pub mod error;
pub mod io;
pub mod models;
pub mod network;

pub use centrality::{TOP_RANKED, analyze};
pub use error::CastnetError;
pub use io::{load_network, read_transcript_csv, write_json};
pub use models::{CentralityReport, InteractionNetwork, TranscriptRow};
pub use network::{BuilderConfig, StopList, build_network, normalize_speaker, top_speakers};
