/// Alias to a scalar floating type.
pub type Float = f64;

/// Rounds value to the given amount of decimal places.
pub fn round_to(value: Float, decimals: i32) -> Float {
    let factor = (10 as Float).powi(decimals);

    (value * factor).round() / factor
}
