use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Template(#[from] uri_template_core::Error),

    #[error("IO error with {} at `{}`: {}", .description, .path, .original)]
    Io {
        description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error decoding {} as JSON: {}", .description, .original)]
    Json {
        description: String,
        original: serde_json::Error,
    },

    #[error("Values document must be a JSON object, found {}", .0)]
    NotAnObject(&'static str),

    #[error("Unsupported value for `{}`: nested arrays and objects cannot be expanded", .0)]
    UnsupportedValue(String),

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn io_error(description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            description,
            path,
            original,
        }
    }

    pub fn json_error(description: String, original: serde_json::Error) -> Self {
        Self::Json {
            description,
            original,
        }
    }
}
