use rand::Rng;
use rand::seq::SliceRandom;

/// Returns `values` in uniformly random order.
pub fn shuffle<T, R: Rng + ?Sized>(mut values: Vec<T>, rng: &mut R) -> Vec<T> {
    values.shuffle(rng);
    values
}

/// Every symbol twice, in input order.
pub fn deal_pairs(symbols: &[String]) -> Vec<String> {
    symbols.iter().chain(symbols.iter()).cloned().collect()
}
