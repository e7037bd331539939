use thiserror::Error;

/// Reasons a single overlay draw call is aborted.
///
/// Both kinds are detected before any paint command is issued, so a failed
/// call leaves the paint context exactly as it found it. They are scoped to
/// the one call; the next redraw proceeds independently.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    /// The asset handed to the renderer breaks the drawing contract.
    #[error("invalid overlay asset: {0}")]
    InvalidOverlay(&'static str),

    /// A zero-extent rectangle leaves the viewport scale undefined. Expected
    /// transiently mid-zoom; the next redraw normally clears it.
    #[error("degenerate {0} region: rectangle has no usable extent")]
    DegenerateRegion(&'static str),
}
