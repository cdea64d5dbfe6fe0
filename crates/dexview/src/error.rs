#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status: {0}")]
    Status(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
