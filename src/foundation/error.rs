use std::path::PathBuf;
use std::{error, fmt, io};

#[derive(Debug)]
pub enum GraphError {
    IoError { path: PathBuf, source: io::Error },
    WalkError(walkdir::Error),
    JsonParseError { path: PathBuf, source: serde_json::Error },
    MissingPlaylists { path: PathBuf },
    ConsoleError(io::Error),
}

impl GraphError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GraphError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        GraphError::JsonParseError {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphError::IoError { path, source } => {
                write!(f, "IO error at {}: {}", path.display(), source)
            }
            GraphError::WalkError(e) => write!(f, "Directory walk error: {}", e),
            GraphError::JsonParseError { path, source } => {
                write!(f, "JSON parse error in {}: {}", path.display(), source)
            }
            GraphError::MissingPlaylists { path } => {
                write!(f, "Missing key 'playlists' in {}", path.display())
            }
            GraphError::ConsoleError(e) => write!(f, "Console output error: {}", e),
        }
    }
}

impl error::Error for GraphError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GraphError::IoError { source, .. } => Some(source),
            GraphError::WalkError(e) => Some(e),
            GraphError::JsonParseError { source, .. } => Some(source),
            GraphError::MissingPlaylists { .. } => None,
            GraphError::ConsoleError(e) => Some(e),
        }
    }
}

impl From<walkdir::Error> for GraphError {
    fn from(error: walkdir::Error) -> Self {
        GraphError::WalkError(error)
    }
}
