use strsim::levenshtein;

/// Partial similarity score in [0, 100].
///
/// Lower-cases both inputs, slides a window the length of the shorter string
/// across the longer one, scores each window as
/// `100 * (len - levenshtein) / len`, and keeps the best alignment. An exact
/// substring therefore scores 100 regardless of surrounding text. Pure
/// function of its inputs; no state crosses calls.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let window_len = shorter.chars().count();
    if window_len == 0 {
        // Two empty strings are identical; an empty string against anything
        // else shares nothing
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    let longer_chars: Vec<char> = longer.chars().collect();
    let mut best = 0.0_f64;

    for window in longer_chars.windows(window_len) {
        let window: String = window.iter().collect();
        let distance = levenshtein(&shorter, &window).min(window_len);
        // Multiply before dividing so scores at exact fractions of 100
        // (the threshold comparison) stay exact
        let score = (window_len - distance) as f64 * 100.0 / window_len as f64;
        if score > best {
            best = score;
            if best == 100.0 {
                break;
            }
        }
    }

    best
}
