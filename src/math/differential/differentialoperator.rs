/// Turns a function into its derivative.
///
/// `T` is what the operator consumes: any [`MathFunction`] for the stepping
/// operators, a borrowed tabulated function for the tabulated one.
///
/// [`MathFunction`]: crate::math::function::mathfunction::MathFunction
pub trait DifferentialOperator<T> {
    type Output;

    fn derive(&self, function: T) -> Self::Output;
}
