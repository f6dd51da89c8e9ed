/*
 *  Copyright 2021 QuantumBadger
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

use backtrace::Backtrace;

/// An error, with an associated backtrace captured at the point where the
/// error was created.
#[derive(Clone)]
pub struct BacktraceError<E>
{
    error: E,
    backtrace: Rc<Backtrace>,
    cause: Option<Rc<dyn Error + 'static>>
}

impl<E> BacktraceError<E>
{
    /// Creates a new error, capturing the current backtrace.
    pub fn new(error: E) -> Self
    {
        Self {
            error,
            backtrace: Rc::new(Backtrace::new()),
            cause: None
        }
    }

    /// Creates a new error with the specified underlying cause, capturing
    /// the current backtrace.
    pub fn new_with_cause<Cause>(error: E, cause: Cause) -> Self
    where
        Cause: Error + 'static
    {
        Self {
            error,
            backtrace: Rc::new(Backtrace::new()),
            cause: Some(Rc::new(cause))
        }
    }

    /// The error itself, without the backtrace.
    #[inline]
    pub fn error(&self) -> &E
    {
        &self.error
    }

    /// The backtrace captured when the error was created.
    #[inline]
    pub fn backtrace(&self) -> &Backtrace
    {
        &self.backtrace
    }
}

impl<E: Display> Display for BacktraceError<E>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        Display::fmt(&self.error, f)
    }
}

impl<E: Debug> Debug for BacktraceError<E>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("BacktraceError")
            .field("error", &self.error)
            .finish()
    }
}

impl<E: Display + Debug> Error for BacktraceError<E>
{
    fn source(&self) -> Option<&(dyn Error + 'static)>
    {
        self.cause.as_deref()
    }
}

/// A diagnostic error indicating that a non-finite component was detected
/// in a value which should contain only real numbers.
///
/// This carries no payload beyond the failure indication: it is raised only
/// by [crate::dimen::Vector2::assert_finite], which callers use as a
/// checkpoint after a sequence of arithmetic which may have produced NaN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericError
{
    _private: ()
}

impl NumericError
{
    pub(crate) fn non_finite() -> BacktraceError<Self>
    {
        BacktraceError::new(Self { _private: () })
    }
}

impl Display for NumericError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        Display::fmt("Numeric error: non-finite component detected", f)
    }
}

#[cfg(test)]
mod test
{
    use super::*;

    #[test]
    fn numeric_error_message()
    {
        let err = NumericError::non_finite();
        assert_eq!(
            err.to_string(),
            "Numeric error: non-finite component detected"
        );
    }

    #[test]
    fn backtrace_error_preserves_cause()
    {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "inner");
        let err = BacktraceError::new_with_cause(
            NumericError { _private: () },
            cause
        );
        assert!(Error::source(&err).is_some());
    }
}
