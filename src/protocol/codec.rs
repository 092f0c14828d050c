//! Protocol codec
//!
//! Field-by-field encoding and decoding for the fixed-size records, plus
//! blocking stream helpers that move exactly one record.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! byte 0      : metric type code
//! bytes 1..64 : city, NUL-padded (at most 63 bytes of text)
//! byte 64     : always NUL
//! ```
//!
//! ### Response Format
//! ```text
//! bytes 0..4  : status, u32 big-endian
//! byte 4      : type echo
//! bytes 5..9  : value, IEEE-754 f32 big-endian
//! ```
//!
//! There is no implicit padding between fields.

use std::io::{ErrorKind, Read, Write};

use bytes::{Buf, BufMut};

use crate::error::{Result, WeatherError};
use super::{Status, WeatherRequest, WeatherResponse, CITY_FIELD_SIZE};

/// Request record size: type (1) + city field (64)
pub const REQUEST_SIZE: usize = 1 + CITY_FIELD_SIZE;

/// Response record size: status (4) + type (1) + value (4)
pub const RESPONSE_SIZE: usize = 4 + 1 + 4;

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request to its fixed-size record
pub fn encode_request(request: &WeatherRequest) -> [u8; REQUEST_SIZE] {
    let mut record = [0u8; REQUEST_SIZE];
    record[0] = request.kind();

    // `WeatherRequest` bounds the city to MAX_CITY_LEN, so the last byte stays NUL
    let city = request.city().as_bytes();
    record[1..1 + city.len()].copy_from_slice(city);

    record
}

/// Decode a request from a fixed-size record
///
/// The final city byte is treated as a terminator whatever it holds, so a
/// peer that fills all 64 bytes still yields a bounded city. Bytes past
/// `REQUEST_SIZE` are ignored.
pub fn decode_request(bytes: &[u8]) -> Result<WeatherRequest> {
    if bytes.len() < REQUEST_SIZE {
        return Err(WeatherError::TruncatedMessage {
            expected: REQUEST_SIZE,
            received: bytes.len(),
        });
    }

    let kind = bytes[0];
    let field = &bytes[1..REQUEST_SIZE - 1];
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    let city = String::from_utf8_lossy(&field[..end]);

    Ok(WeatherRequest::new(kind, &city))
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to its fixed-size record
pub fn encode_response(response: &WeatherResponse) -> [u8; RESPONSE_SIZE] {
    let mut record = [0u8; RESPONSE_SIZE];

    let mut buf = &mut record[..];
    buf.put_u32(response.status.code());
    buf.put_u8(response.kind);
    buf.put_f32(response.value);

    record
}

/// Decode a response from a fixed-size record
pub fn decode_response(bytes: &[u8]) -> Result<WeatherResponse> {
    if bytes.len() < RESPONSE_SIZE {
        return Err(WeatherError::TruncatedMessage {
            expected: RESPONSE_SIZE,
            received: bytes.len(),
        });
    }

    let mut buf = &bytes[..RESPONSE_SIZE];
    let status = Status::from(buf.get_u32());
    let kind = buf.get_u8();
    let value = buf.get_f32();

    Ok(WeatherResponse { status, kind, value })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read exactly `N` bytes, looping over partial reads
///
/// A zero-length read before the record is complete means the peer closed
/// the connection and yields `TruncatedMessage`.
fn read_record<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N]> {
    let mut record = [0u8; N];
    let mut received = 0;

    while received < N {
        match reader.read(&mut record[received..]) {
            Ok(0) => {
                return Err(WeatherError::TruncatedMessage {
                    expected: N,
                    received,
                })
            }
            Ok(n) => received += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(record)
}

/// Read a complete request from a stream
///
/// Blocks until a complete record is received or an error occurs
pub fn read_request<R: Read>(reader: &mut R) -> Result<WeatherRequest> {
    let record = read_record::<_, REQUEST_SIZE>(reader)?;
    decode_request(&record)
}

/// Write a request to a stream
pub fn write_request<W: Write>(writer: &mut W, request: &WeatherRequest) -> Result<()> {
    writer.write_all(&encode_request(request))?;
    writer.flush()?;
    Ok(())
}

/// Read a complete response from a stream
pub fn read_response<R: Read>(reader: &mut R) -> Result<WeatherResponse> {
    let record = read_record::<_, RESPONSE_SIZE>(reader)?;
    decode_response(&record)
}

/// Write a response to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &WeatherResponse) -> Result<()> {
    writer.write_all(&encode_response(response))?;
    writer.flush()?;
    Ok(())
}
