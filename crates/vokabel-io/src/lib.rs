pub mod error;
pub mod provider;
pub mod read;
pub mod batch;
pub mod csv;
pub mod report;
pub mod lexicon;

pub use error::SourceError;
