use codec::projection::face_pi_qi_to_xyz;
use codec::{
    best_snap_level, decode_polyline, decode_polyline_with_limits, encode_polyline,
    encode_polyline_compressed, encode_polyline_lossless, CodecLimits, NthDerivativeCoder, Point,
    MAX_LEVEL,
};
use proptest::prelude::*;

fn bits(points: &[Point]) -> Vec<[u64; 3]> {
    points
        .iter()
        .map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
        .collect()
}

fn unit_point() -> impl Strategy<Value = Point> {
    (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0)
        .prop_filter("non-zero", |(x, y, z)| x * x + y * y + z * z > 1e-6)
        .prop_map(|(x, y, z)| Point::new(x, y, z).normalize())
}

/// A cell center at a random level.
fn center_point() -> impl Strategy<Value = Point> {
    (0u8..6, 0..=MAX_LEVEL).prop_flat_map(|(face, level)| {
        let cells = 1i64 << level;
        (0..cells, 0..cells).prop_map(move |(pi, qi)| {
            let pi = i32::try_from(pi).unwrap();
            let qi = i32::try_from(qi).unwrap();
            face_pi_qi_to_xyz(face, pi, qi, level)
        })
    })
}

fn any_point() -> impl Strategy<Value = Point> {
    prop_oneof![unit_point(), center_point()]
}

proptest! {
    #[test]
    fn prop_encode_polyline_is_exact(points in prop::collection::vec(any_point(), 0..40)) {
        let bytes = encode_polyline(&points).unwrap();
        let decoded = decode_polyline(&bytes).unwrap();
        prop_assert_eq!(bits(&decoded), bits(&points));
    }

    #[test]
    fn prop_forced_compressed_is_exact(
        points in prop::collection::vec(unit_point(), 0..20),
        level in 0..=MAX_LEVEL,
    ) {
        let bytes = encode_polyline_compressed(&points, level).unwrap();
        let decoded = decode_polyline(&bytes).unwrap();
        prop_assert_eq!(bits(&decoded), bits(&points));
    }

    #[test]
    fn prop_forced_lossless_is_exact(points in prop::collection::vec(any_point(), 0..20)) {
        let bytes = encode_polyline_lossless(&points).unwrap();
        prop_assert_eq!(bytes.len(), 5 + 24 * points.len());
        let decoded = decode_polyline(&bytes).unwrap();
        prop_assert_eq!(bits(&decoded), bits(&points));
    }

    #[test]
    fn prop_snapped_polylines_beat_lossless(
        face in 0u8..6,
        level in 0..=MAX_LEVEL,
        steps in prop::collection::vec((0u32..64, 0u32..64), 1..40),
    ) {
        let mask = (1u64 << level) - 1;
        let points: Vec<Point> = steps
            .iter()
            .map(|&(dp, dq)| {
                let pi = i32::try_from(u64::from(dp) & mask).unwrap();
                let qi = i32::try_from(u64::from(dq) & mask).unwrap();
                face_pi_qi_to_xyz(face, pi, qi, level)
            })
            .collect();
        prop_assert!(best_snap_level(&points).is_some());
        let bytes = encode_polyline(&points).unwrap();
        prop_assert!(bytes.len() < 5 + 24 * points.len());
    }

    #[test]
    fn prop_decode_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let _ = decode_polyline_with_limits(&bytes, &CodecLimits::for_testing());
    }

    #[test]
    fn prop_derivative_coder_roundtrip(
        order in 0usize..=10,
        values in prop::collection::vec(any::<i32>(), 0..64),
    ) {
        let mut encoder = NthDerivativeCoder::new(order).unwrap();
        let mut decoder = NthDerivativeCoder::new(order).unwrap();
        for &v in &values {
            prop_assert_eq!(decoder.decode(encoder.encode(v)), v);
        }
    }
}
