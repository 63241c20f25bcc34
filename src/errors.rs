use failure::Fail;

#[derive(Debug, Fail)]
pub enum NluClientError {
    #[fail(display = "Payload is not valid JSON: {}", _0)]
    InvalidJson(String),
    #[fail(display = "Payload has no 'results' object")]
    MissingResults,
    #[fail(display = "Unexpected shape for field '{}': {}", field, cause)]
    UnexpectedShape { field: &'static str, cause: String },
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
