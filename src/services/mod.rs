// Service exports
pub mod cache;
pub mod file;
pub mod remote;
pub mod source;

pub use cache::RecordCache;
pub use file::{parse_records, FileSource};
pub use remote::RemoteSource;
pub use source::{RecordProvider, RecordSource, SourceError};
