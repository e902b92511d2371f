use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Reads a file straight from the platform, with no seam to swap out.
pub fn read_text(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

pub trait FileAccessor {
    fn read_all_text(&self, path: &Path) -> Result<String, io::Error>;
}

pub struct RealFileAccessor;

impl FileAccessor for RealFileAccessor {
    fn read_all_text(&self, path: &Path) -> Result<String, io::Error> {
        read_text(path)
    }
}

enum Scripted {
    Content(String),
    Failure(io::ErrorKind, String),
}

/// Stand-in accessor that answers from a fixed table and never touches disk.
///
/// Paths that were not scripted fail with `NotFound`.
pub struct ScriptedFileAccessor {
    responses: HashMap<PathBuf, Scripted>,
    calls: RefCell<Vec<PathBuf>>,
}

impl ScriptedFileAccessor {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_content<P: Into<PathBuf>, S: Into<String>>(mut self, path: P, content: S) -> Self {
        self.responses.insert(path.into(), Scripted::Content(content.into()));
        self
    }

    pub fn with_failure<P: Into<PathBuf>, S: Into<String>>(
        mut self,
        path: P,
        kind: io::ErrorKind,
        message: S,
    ) -> Self {
        self.responses.insert(path.into(), Scripted::Failure(kind, message.into()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl Default for ScriptedFileAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FileAccessor for ScriptedFileAccessor {
    fn read_all_text(&self, path: &Path) -> Result<String, io::Error> {
        self.calls.borrow_mut().push(path.to_path_buf());
        match self.responses.get(path) {
            Some(Scripted::Content(content)) => Ok(content.clone()),
            Some(Scripted::Failure(kind, message)) => Err(io::Error::new(*kind, message.as_str())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not scripted: {}", path.display()),
            )),
        }
    }
}
