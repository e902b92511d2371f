//! Reading text files behind a swappable seam.
//!
//! [`fs::read_text`] is the bare platform call. [`fs::FileAccessor`] wraps it
//! so tests can substitute [`fs::ScriptedFileAccessor`], and
//! [`reader::TextFileReader`] adds error logging through a [`logger::Logger`].

pub mod exceptions;
pub mod fs;
pub mod logger;
pub mod reader;

pub use fs::{FileAccessor, RealFileAccessor, ScriptedFileAccessor};
pub use logger::{LogFacadeLogger, LogLevel, Logger, RecordingLogger};
pub use reader::TextFileReader;
