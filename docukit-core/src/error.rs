use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("invalid items payload: {0}")]
    InvalidItems(#[source] serde_json::Error),

    #[error("PDF generation failed: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),

    #[error("template rendering failed: {0}")]
    Template(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tera::Error> for DocError {
    fn from(e: tera::Error) -> Self {
        DocError::Template(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DocError>;
