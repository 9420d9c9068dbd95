#![deny(unused_imports)]

use smallvec::SmallVec;

mod fmt;
mod kind;


pub use fmt::render_pair;
pub use kind::{FractionErrorKind, InvalidArgument};

#[derive(Clone, Debug, PartialEq)]
pub struct FractionError {
    pub kind: FractionErrorKind,

    // (numerator, denominator) of the values the failing operation was working on.
    // Binary operators have 2, everything else has 0 or 1.
    pub operands: SmallVec<[(i32, i32); 2]>,

    pub note: Option<String>,
}

impl FractionError {
    pub fn new(kind: FractionErrorKind) -> Self {
        FractionError {
            kind,
            operands: SmallVec::new(),
            note: None,
        }
    }

    pub fn divide_by_zero(operands: &[(i32, i32)]) -> Self {
        FractionError::new(FractionErrorKind::DivideByZero).with_operands(operands)
    }

    pub fn overflow(operands: &[(i32, i32)]) -> Self {
        FractionError::new(FractionErrorKind::Overflow).with_operands(operands)
    }

    pub fn invalid_argument(reason: InvalidArgument) -> Self {
        FractionError::new(FractionErrorKind::InvalidArgument(reason))
    }

    pub fn parse_error(text: String) -> Self {
        FractionError::new(FractionErrorKind::ParseError(text))
    }

    /// Inner helpers don't know which values they're working on, so the caller fills them in.
    /// It doesn't overwrite operands that are already there.
    pub fn with_operands(mut self, operands: &[(i32, i32)]) -> Self {
        if self.operands.is_empty() {
            self.operands = SmallVec::from_slice(operands);
        }

        self
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.note = Some(note);
        self
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, FractionErrorKind::Overflow)
    }

    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self.kind, FractionErrorKind::DivideByZero)
    }
}

impl std::error::Error for FractionError {}
