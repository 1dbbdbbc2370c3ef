// Moving-average smoothing
// Centered window clipped to the signal bounds

/// Smooth `signal` with a centered moving average of width `interval`
///
/// Output sample `i` is the mean of the inclusive window
/// `[i - interval/2, i + interval/2]` clipped to `[0, len - 1]`, so edge
/// samples average over fewer points. A window that collapses to one sample
/// (e.g. `interval < 2`) returns the input sample unchanged.
pub fn smooth_signal(signal: &[f32], interval: usize) -> Vec<f32> {
    if signal.is_empty() {
        return Vec::new();
    }

    let half = interval / 2;
    let last = signal.len() - 1;

    let smoothed = (0..signal.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = i.saturating_add(half).min(last);

            if start >= end {
                return signal[i];
            }

            let window = &signal[start..=end];
            let sum: f64 = window.iter().map(|&s| s as f64).sum();
            (sum / window.len() as f64) as f32
        })
        .collect();

    log::info!("Smoothing complete (interval {})", interval);

    smoothed
}
