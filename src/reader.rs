use std::io;
use std::path::Path;

use crate::fs::FileAccessor;
use crate::logger::{LogLevel, Logger};

/// Reads text files through an injected [`FileAccessor`], reporting failures
/// to an injected [`Logger`] before handing them back to the caller.
pub struct TextFileReader<'a, F: FileAccessor + ?Sized, L: Logger + ?Sized> {
    file: &'a F,
    logger: &'a L,
}

impl<'a, F: FileAccessor + ?Sized, L: Logger + ?Sized> TextFileReader<'a, F, L> {
    pub fn new(file: &'a F, logger: &'a L) -> Self {
        TextFileReader { file, logger }
    }

    /// Returns the full content of `path` as read by the accessor.
    ///
    /// On failure one `Error` entry is logged and the accessor's error is
    /// returned as is.
    pub fn read_text(&self, path: &Path) -> io::Result<String> {
        self.file.read_all_text(path).map_err(|e| {
            self.logger.log(
                LogLevel::Error,
                &format!("Error reading file {}", path.display()),
            );
            e
        })
    }
}
