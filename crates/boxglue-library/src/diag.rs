//! Diagnostics.

use std::fmt::{self, Display, Formatter};

use ecow::EcoVec;

/// Return early with a formatted error.
///
/// Hints follow the message after `; hint:` and make the error a
/// [`HintedString`].
///
/// ```ignore
/// bail!("margin needs {} values", 4);
/// bail!(
///     "unknown image `{}`", key;
///     hint: "register it on the builder first"
/// );
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __bail {
    ($($tts:tt)*) => {
        return Err($crate::diag::error!($($tts)*))
    };
}

/// Format an error message without returning, see [`bail!`].
#[macro_export]
#[doc(hidden)]
macro_rules! __error {
    // Plain message.
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::diag::eco_format!($fmt, $($arg),*).into()
    };

    // Message with one or more hints.
    (
        $fmt:literal $(, $arg:expr)*
        $(; hint: $hint:literal $(, $hint_arg:expr)*)*
        $(,)?
    ) => {
        $crate::diag::HintedString::new(
            $crate::diag::eco_format!($fmt, $($arg),*)
        ) $(.with_hint($crate::diag::eco_format!($hint, $($hint_arg),*)))*
    };
}

#[rustfmt::skip]
#[doc(inline)]
pub use {
    crate::__bail as bail,
    crate::__error as error,
    ecow::{eco_format, EcoString},
};

/// The result of an operation that fails with a plain message.
pub type StrResult<T> = Result<T, EcoString>;

/// The result of an operation whose errors may carry hints.
pub type HintedStrResult<T> = Result<T, HintedString>;

/// An error message together with hints on how to avoid it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HintedString {
    message: EcoString,
    hints: EcoVec<EcoString>,
}

impl HintedString {
    pub fn new(message: EcoString) -> Self {
        Self { message, hints: EcoVec::new() }
    }

    /// What went wrong.
    pub fn message(&self) -> &EcoString {
        &self.message
    }

    /// Suggestions for fixing the input, in the order they were attached.
    pub fn hints(&self) -> &[EcoString] {
        &self.hints
    }

    pub fn hint(&mut self, hint: impl Into<EcoString>) {
        self.hints.push(hint.into());
    }

    /// Builder-style variant of [`hint`](Self::hint).
    pub fn with_hint(mut self, hint: impl Into<EcoString>) -> Self {
        self.hint(hint);
        self
    }
}

impl<S> From<S> for HintedString
where
    S: Into<EcoString>,
{
    fn from(value: S) -> Self {
        Self::new(value.into())
    }
}

impl Display for HintedString {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.message())?;
        for hint in self.hints() {
            write!(f, "\n  hint: {hint}")?;
        }
        Ok(())
    }
}

impl std::error::Error for HintedString {}

/// Attach a hint to the error of a result.
pub trait Hint<T> {
    fn hint(self, hint: impl Into<EcoString>) -> HintedStrResult<T>;
}

impl<T, S> Hint<T> for Result<T, S>
where
    S: Into<EcoString>,
{
    fn hint(self, hint: impl Into<EcoString>) -> HintedStrResult<T> {
        self.map_err(|message| HintedString::new(message.into()).with_hint(hint))
    }
}

impl<T> Hint<T> for HintedStrResult<T> {
    fn hint(self, hint: impl Into<EcoString>) -> HintedStrResult<T> {
        self.map_err(|mut error| {
            error.hint(hint.into());
            error
        })
    }
}
