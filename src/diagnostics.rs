//! Diagnostics for the entry points.
//!
//! Inside the core a failed rule is just a [`crate::Step::Miss`]; nothing
//! carries messages or positions through composition. The entry points are
//! the one place failures become caller-visible, and there we do know the
//! full source text, so errors render as `miette` diagnostics with a
//! labeled span instead of a bare boolean.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::Position;

pub type SourceArc = Arc<NamedSource<String>>;

/// A byte-offset range into the source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Source and span context attached to an entry-point error.
#[derive(Debug)]
pub struct ErrorContext {
    pub source: SourceArc,
    pub span: Span,
    pub help: Option<String>,
}

/// The failure modes of driving a rule to completion.
#[derive(Debug, Error)]
pub enum SkeinError {
    #[error("grammar did not match the input")]
    NoMatch { ctx: ErrorContext },
    #[error("unconsumed input after parse, stopped at {position}")]
    Leftover { position: Position, ctx: ErrorContext },
    #[error("value {atom:#x} does not decode to text")]
    BadEncoding {
        atom: u128,
        #[source]
        cause: std::string::FromUtf8Error,
    },
}

impl SkeinError {
    pub(crate) fn no_match(text: &str) -> Self {
        SkeinError::NoMatch {
            ctx: ErrorContext {
                source: to_error_source(text),
                span: Span {
                    start: 0,
                    end: text.len(),
                },
                help: None,
            },
        }
    }

    pub(crate) fn leftover(text: &str, position: Position, consumed: usize) -> Self {
        SkeinError::Leftover {
            position,
            ctx: ErrorContext {
                source: to_error_source(text),
                span: Span {
                    start: consumed,
                    end: text.len(),
                },
                help: Some("the grammar matched a prefix but input remained".to_string()),
            },
        }
    }

    fn ctx(&self) -> Option<&ErrorContext> {
        match self {
            SkeinError::NoMatch { ctx } | SkeinError::Leftover { ctx, .. } => Some(ctx),
            SkeinError::BadEncoding { .. } => None,
        }
    }
}

impl Diagnostic for SkeinError {
    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.ctx()?
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.ctx().map(|c| c.source.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ctx = self.ctx()?;
        let label = match self {
            SkeinError::NoMatch { .. } => "no rule matched this input",
            SkeinError::Leftover { .. } => "parsing stopped here",
            SkeinError::BadEncoding { .. } => return None,
        };
        // Widen zero-length spans to one byte so the caret is visible, but
        // never let the label run past the end of the source text.
        let source_len = ctx.source.inner().len();
        let len = (ctx.span.end - ctx.span.start)
            .max(1)
            .min(source_len.saturating_sub(ctx.span.start));
        Some(Box::new(std::iter::once(LabeledSpan::new(
            Some(label.to_string()),
            ctx.span.start,
            len,
        ))))
    }
}

/// Wraps source text for use in diagnostics.
pub fn to_error_source<S: AsRef<str>>(source: S) -> SourceArc {
    Arc::new(NamedSource::new("input", source.as_ref().to_string()))
}
