use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or plotting a control-loop trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("could not read csv file {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("csv line {line}: expected 3 comma-separated values, found {found}")]
    RowArity { line: usize, found: usize },
    #[error("csv line {line}: could not parse {token:?} as a number")]
    RowNumber { line: usize, token: String },
    #[error("cannot plot an empty trace")]
    EmptyTrace,
    #[error("failed to draw chart: {0}")]
    Draw(String),
    #[error("no interactive display available: {0}")]
    Display(#[from] eframe::Error),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for TraceError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        TraceError::Draw(format!("{value:?}"))
    }
}
