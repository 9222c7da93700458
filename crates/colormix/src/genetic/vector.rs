use rand::Rng;

use crate::Float;

/// Normalize the percentage vector in place.
///
/// This function divides every percentage by the vector's total, multiplies it
/// by 100, and then clamps it to `0..=100`. Clamping may leave the total
/// slightly off 100 for extreme inputs, which is accepted as is. If the total
/// is zero or not finite, as is the case for an empty vector, all percentages
/// become zero.
pub(crate) fn normalize(percentages: &mut [Float]) {
    let total: Float = percentages.iter().sum();
    if total == 0.0 || !total.is_finite() {
        percentages.fill(0.0);
        return;
    }

    for percentage in percentages.iter_mut() {
        *percentage = (*percentage / total * 100.0).clamp(0.0, 100.0);
    }
}

/// Create a normalized random percentage vector with the given length.
///
/// Each raw percentage is drawn uniformly from `0..1` before normalization.
pub(crate) fn random_percentages<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<Float> {
    let mut percentages: Vec<Float> = (0..length).map(|_| rng.random()).collect();
    normalize(&mut percentages);
    percentages
}

// ====================================================================================================================
