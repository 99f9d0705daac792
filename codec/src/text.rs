//! URL-safe text form of an encoded polyline.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::CodecResult;
use crate::latlng::LatLng;
use crate::point::Point;
use crate::polyline::{decode_polyline, encode_polyline};

/// URL-safe alphabet. Output is padded; input is accepted with or without
/// padding.
const TEXT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes lat/lng vertices with [`encode_polyline`] and returns the bytes
/// as URL-safe base64.
pub fn encode_latlngs_to_string(latlngs: &[LatLng]) -> CodecResult<String> {
    let points: Vec<Point> = latlngs.iter().map(|ll| ll.to_point()).collect();
    let bytes = encode_polyline(&points)?;
    Ok(TEXT_ENGINE.encode(bytes))
}

/// Decodes text produced by [`encode_latlngs_to_string`].
///
/// # Errors
///
/// Returns [`CodecError::InvalidText`](crate::CodecError::InvalidText) if the
/// text is not base64, and any [`decode_polyline`] error otherwise.
pub fn decode_string_to_latlngs(text: &str) -> CodecResult<Vec<LatLng>> {
    let bytes = TEXT_ENGINE.decode(text.trim())?;
    let points = decode_polyline(&bytes)?;
    Ok(points.into_iter().map(LatLng::from_point).collect())
}
