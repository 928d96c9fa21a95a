#![no_main]

use libfuzzer_sys::fuzz_target;

// Within the documented parameter bounds the evaluators must never yield
// NaN/Inf, and invalid parameters must be rejected up front rather than
// propagated as NaN.
fuzz_target!(|input: (f64, f64, f64, f64)| {
    let (x, mpv, eta, sigma) = input;

    match lst_prob::landau::pdf(x, mpv, eta) {
        Ok(y) => {
            if (1e-6..=1e6).contains(&eta) {
                assert!(y.is_finite());
            }
        }
        Err(_) => assert!(!eta.is_finite() || eta <= 0.0 || !mpv.is_finite()),
    }

    // Keep the convolution cheap: bound the smearing ratio.
    if (1e-6..=1e6).contains(&eta) && sigma.is_finite() && (0.0..=10.0).contains(&sigma) {
        if let Ok(y) = lst_prob::langau::pdf(x, mpv, eta, sigma) {
            assert!(y.is_finite());
        }
    }
});
