use crate::error::CodecError;

fn fixed<const N: usize>(span: &[u8]) -> Result<[u8; N], CodecError> {
    span.try_into().map_err(|_| CodecError::LengthMismatch {
        expected: N,
        actual: span.len(),
    })
}

pub fn decode_f32(span: &[u8]) -> Result<f32, CodecError> {
    Ok(f32::from_le_bytes(fixed(span)?))
}

pub fn decode_u16(span: &[u8]) -> Result<u16, CodecError> {
    Ok(u16::from_le_bytes(fixed(span)?))
}

pub fn decode_f64(span: &[u8]) -> Result<f64, CodecError> {
    Ok(f64::from_le_bytes(fixed(span)?))
}

/// A scalar type that can be read from a buffer component.
pub trait Component: Copy + Default + Send {
    const WIDTH: usize;

    fn decode(span: &[u8]) -> Result<Self, CodecError>;
}

impl Component for f32 {
    const WIDTH: usize = 4;

    fn decode(span: &[u8]) -> Result<Self, CodecError> {
        decode_f32(span)
    }
}

impl Component for u16 {
    const WIDTH: usize = 2;

    fn decode(span: &[u8]) -> Result<Self, CodecError> {
        decode_u16(span)
    }
}

impl Component for f64 {
    const WIDTH: usize = 8;

    fn decode(span: &[u8]) -> Result<Self, CodecError> {
        decode_f64(span)
    }
}
