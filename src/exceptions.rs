use std::{fmt, io};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ReadTextError {
    Io(io::Error),
    ReadFailed(PathBuf, io::Error),
}

impl fmt::Display for ReadTextError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::ReadFailed(x, err) => write!(f, "Unable to read {}: {}", x.display(), err),
        }
    }
}

impl From<io::Error> for ReadTextError {
    fn from(err: io::Error) -> ReadTextError {
        ReadTextError::Io(err)
    }
}

impl Error for ReadTextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) | Self::ReadFailed(_, err) => Some(err),
        }
    }
}
