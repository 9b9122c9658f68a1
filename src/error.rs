//! Error boundary for the ambient layer (file I/O, the CLI binary). The
//! core itself — classifier, segment builder, grid parser, graph model,
//! extractor — is total and never returns a `Result`; nothing in this
//! module is used by `src/{classify,segment_builder,parser,graph,
//! extractor}.rs`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read from stdin: {source}")]
    Stdin {
        #[source]
        source: std::io::Error,
    },
}
