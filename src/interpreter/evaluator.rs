/// Binary operation evaluation.
///
/// Applies the four arithmetic operators to runtime values: checked integer
/// arithmetic, truncating division with an explicit zero guard, and string
/// concatenation.
pub mod binary;
/// Core evaluation.
///
/// Declares the runtime environment and the statement and expression
/// evaluation entry points.
pub mod core;
