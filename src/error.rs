use thiserror::Error;

pub type RoadmapResult<T> = Result<T, RoadmapError>;

#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown project id: {0}")]
    UnknownProjectId(u32),

    #[error("duplicate project id: {0}")]
    DuplicateProjectId(u32),

    #[error("import rejected: {0}")]
    ImportRejected(String),
}
