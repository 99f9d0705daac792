#![no_main]

use codec::{decode_polyline_with_limits, encode_polyline, CodecLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = CodecLimits::for_testing();
    let Ok(points) = decode_polyline_with_limits(data, &limits) else {
        return;
    };

    // Anything that decodes must survive a re-encode.
    let bytes = encode_polyline(&points).expect("re-encode decoded polyline");
    let again = decode_polyline_with_limits(&bytes, &limits).expect("decode re-encoded polyline");
    assert_eq!(again.len(), points.len());
    for (a, b) in again.iter().zip(&points) {
        assert!(a == b || a.x.is_nan() || a.y.is_nan() || a.z.is_nan());
    }
});
