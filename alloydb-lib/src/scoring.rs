use crate::composition::Composition;

/// Similarity of two compositions in `[0, 1]`.
///
/// Only elements present in both compositions are compared: the score is
/// `1 - Σ|a[e] - b[e]| / 100`, clamped at 0. Compositions sharing no
/// element score 0. An element missing from one side does not lower the
/// score, so a query that lost a trace element to OCR noise still matches.
pub fn score(a: &Composition, b: &Composition) -> f64 {
    let mut shared = 0usize;
    let mut diff = 0.0_f64;
    for (element, pa) in a.iter() {
        if let Some(pb) = b.get(element) {
            shared += 1;
            diff += (pa - pb).abs();
        }
    }

    if shared == 0 {
        return 0.0;
    }
    (1.0 - diff / 100.0).max(0.0)
}
