//! Transform pipeline infrastructure
//!
//! Cleaning is expressed as a chain of small stages. Each stage implements
//! [`Runnable<I, O>`], and [`Transform<I, O>`] glues stages together with
//! `.then()`, checking at compile time that every stage consumes what the
//! previous one produced:
//!
//! ```rust,ignore
//! let pipeline = Transform::identity()
//!     .then(Lowercase)          // String → String
//!     .then(SplitWhitespace)    // String → Vec<String>
//!     .then(JoinTokens);        // Vec<String> → String
//! ```
//!
//! - [`stages`]: the individual cleaning stages
//! - [`standard`]: the assembled cleaning pipeline

pub mod stages;
pub mod standard;

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> O;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` turns an `I` into an `O`. The boxed closure is
/// `Send + Sync` so assembled pipelines can live in statics and be shared.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> O + Send + Sync>,
}

impl<I: 'static> Transform<I, I> {
    /// Start a pipeline that passes its input through unchanged
    pub fn identity() -> Self {
        Transform::from_fn(|input| input)
    }
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage, returning a transform from `I` to the stage's output.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| stage.run(prev_run(input))),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> O {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> O {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Exclaim;
    impl Runnable<String, String> for Exclaim {
        fn run(&self, input: String) -> String {
            format!("{input}!")
        }
    }

    struct CharCount;
    impl Runnable<String, usize> for CharCount {
        fn run(&self, input: String) -> usize {
            input.chars().count()
        }
    }

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|s: String| s.len());
        assert_eq!(transform.run("four".to_string()), 4);
    }

    #[test]
    fn test_identity_passes_through() {
        let transform = Transform::<String, String>::identity();
        assert_eq!(transform.run("same".to_string()), "same");
    }

    #[test]
    fn test_stages_run_in_order() {
        let transform = Transform::identity()
            .then(Exclaim)
            .then(Exclaim)
            .then(CharCount);
        assert_eq!(transform.run("hey".to_string()), 5);
    }

    #[test]
    fn test_transform_is_a_stage() {
        let inner = Transform::identity().then(Exclaim);
        let outer = Transform::identity().then(inner).then(CharCount);
        assert_eq!(outer.run("ok".to_string()), 3);
    }
}
