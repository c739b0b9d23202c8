//! Generator contexts: infinite sequences produced by repeatedly applying a
//! transformation to an accumulator.

use inlay_common::{Result, error::Error};

use crate::{backtrack::BacktrackDetector, presence::Presence, sequence::Sequence};

/// Returns the infinite, non-restartable sequence
/// `seed, transform(seed), transform(transform(seed)), …`.
///
/// The transformation is a plain function pointer, so the whole sequence is a
/// single stack-resident value with no captured heap state. Removal has no
/// meaning for a generated sequence and always fails with
/// `UnsupportedOperation`.
///
/// # Examples
///
/// ```
/// use inlay_sequence::generate;
///
/// let mut naturals = generate(0i64, |x| x + 1);
/// assert_eq!(naturals.advance().unwrap().value().unwrap(), 0);
/// assert_eq!(naturals.advance().unwrap().value().unwrap(), 1);
/// assert_eq!(naturals.advance().unwrap().value().unwrap(), 2);
/// naturals.dispose().unwrap();
/// ```
pub fn generate<T: Clone>(seed: T, transform: fn(&T) -> T) -> Sequence<T, GeneratorContext<T>> {
    GeneratorContext::sequence(seed, transform)
}

/// Like [`generate`], threading a fixed extra parameter into every transform
/// application.
///
/// The parameter is stored in the context by value; no closure is allocated
/// over it.
///
/// # Examples
///
/// ```
/// use inlay_sequence::generate_with;
///
/// let mut seq = generate_with(10i64, |x, step| x + step, 3i64);
/// assert_eq!(seq.advance().unwrap().value().unwrap(), 10);
/// assert_eq!(seq.advance().unwrap().value().unwrap(), 13);
/// assert_eq!(seq.advance().unwrap().value().unwrap(), 16);
/// seq.dispose().unwrap();
/// ```
pub fn generate_with<T: Clone, P>(
    seed: T,
    transform: fn(&T, &P) -> T,
    parameter: P,
) -> Sequence<T, ParamGeneratorContext<T, P>> {
    ParamGeneratorContext::sequence(seed, transform, parameter)
}

/// Traversal state of a [`generate`] sequence.
#[derive(Clone)]
pub struct GeneratorContext<T> {
    /// False only before the first advance; the first advance yields the seed
    /// unchanged, every later one transforms the accumulator first.
    needs_move: bool,
    acc: T,
    transform: fn(&T) -> T,
    detector: BacktrackDetector,
}

impl<T: Clone> GeneratorContext<T> {
    fn sequence(seed: T, transform: fn(&T) -> T) -> Sequence<T, GeneratorContext<T>> {
        Sequence::new(
            GeneratorContext {
                needs_move: false,
                acc: seed,
                transform,
                detector: BacktrackDetector::borrow(),
            },
            Self::advance,
            Self::remove,
            Self::dispose,
        )
    }

    fn advance(context: &mut Self) -> Result<Presence<T>> {
        context.detector.detect_backtrack()?;

        if context.needs_move {
            context.acc = (context.transform)(&context.acc);
        } else {
            context.needs_move = true;
        }
        Ok(Presence::Present(context.acc.clone()))
    }

    fn remove(_context: &mut Self) -> Result<Presence<T>> {
        Err(Error::unsupported_operation(
            "remove_current on a generated sequence",
        ))
    }

    fn dispose(context: &mut Self) -> Result<Presence<T>> {
        context.detector.release()?;
        Ok(Presence::Absent)
    }
}

/// Traversal state of a [`generate_with`] sequence.
#[derive(Clone)]
pub struct ParamGeneratorContext<T, P> {
    needs_move: bool,
    acc: T,
    transform: fn(&T, &P) -> T,
    parameter: P,
    detector: BacktrackDetector,
}

impl<T: Clone, P> ParamGeneratorContext<T, P> {
    fn sequence(
        seed: T,
        transform: fn(&T, &P) -> T,
        parameter: P,
    ) -> Sequence<T, ParamGeneratorContext<T, P>> {
        Sequence::new(
            ParamGeneratorContext {
                needs_move: false,
                acc: seed,
                transform,
                parameter,
                detector: BacktrackDetector::borrow(),
            },
            Self::advance,
            Self::remove,
            Self::dispose,
        )
    }

    fn advance(context: &mut Self) -> Result<Presence<T>> {
        context.detector.detect_backtrack()?;

        if context.needs_move {
            context.acc = (context.transform)(&context.acc, &context.parameter);
        } else {
            context.needs_move = true;
        }
        Ok(Presence::Present(context.acc.clone()))
    }

    fn remove(_context: &mut Self) -> Result<Presence<T>> {
        Err(Error::unsupported_operation(
            "remove_current on a generated sequence",
        ))
    }

    fn dispose(context: &mut Self) -> Result<Presence<T>> {
        context.detector.release()?;
        Ok(Presence::Absent)
    }
}
