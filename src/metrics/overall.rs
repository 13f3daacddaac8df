use super::{Evaluation, Evaluator, Orientation};
use crate::config::Configuration;
use crate::container::FactContainer;

/// Grades a container by how many of its measured metrics qualify.
///
/// The denominator is the number of available metrics and the numerator
/// the number of qualified ones. The container counts as qualified only
/// when every available metric is.
#[derive(Debug, Clone)]
pub struct RecipeEvaluator {
    evaluators: Vec<Evaluator>,
}

impl RecipeEvaluator {
    pub fn new(config: &Configuration) -> Self {
        Self {
            evaluators: Evaluator::all(config),
        }
    }

    pub fn evaluate(&self, c: &dyn FactContainer) -> Evaluation {
        let (available, qualified) =
            self.evaluators
                .iter()
                .fold((0, 0), |(available, qualified), evaluator| {
                    let e = evaluator.evaluate(c);
                    (
                        available + u64::from(e.is_available()),
                        qualified + u64::from(e.is_qualified()),
                    )
                });
        Evaluation::new(true, qualified, available, Orientation::Positive, 1.0, 0)
    }
}
