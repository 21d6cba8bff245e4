//! Error types for model loading and linting.

use crate::span::Span;
use thiserror::Error;

/// Class-model validation errors.
///
/// Rule violations are never errors; these cover documents the adapter
/// refuses to translate into descriptors.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Class entry has an empty name at {0}")]
    EmptyClassName(Span),

    #[error("Constructor of '{name}' declares an empty parameter type at {span}")]
    EmptyParameterType { name: String, span: Span },

    #[error("{message} at {span}")]
    General { message: String, span: Span },
}

impl ModelError {
    pub fn empty_class_name(span: Span) -> Self {
        Self::EmptyClassName(span)
    }

    pub fn empty_parameter_type(name: impl Into<String>, span: Span) -> Self {
        Self::EmptyParameterType {
            name: name.into(),
            span,
        }
    }

    pub fn general(message: impl Into<String>, span: Span) -> Self {
        Self::General {
            message: message.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::EmptyClassName(span) => *span,
            Self::EmptyParameterType { span, .. } => *span,
            Self::General { span, .. } => *span,
        }
    }
}

/// A unified error type for all phases.
#[derive(Debug, Error)]
pub enum CtrlintError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
