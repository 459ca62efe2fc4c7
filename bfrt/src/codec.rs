/*
Copyright (c) 2021 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Conversion between presentation values and fixed-width wire bytes.
//!
//! Integers are unsigned and big-endian on the wire.  Storage is rounded up
//! to whole bytes, but range checks use the exact bit width, so a 9-bit
//! field occupies two bytes and rejects anything above 511.

use byteorder::{BigEndian, ByteOrder};

use itertools::Itertools;

use std::fmt::{self, Display};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::FieldValueError;
use crate::schema::{has_annotation, Annotation};

/// A value as callers supply it and as decoding presents it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Uint(u128),
    /// Only meaningful for two's complement masks; any other negative
    /// value is rejected.
    Signed(i128),
    Bytes(Vec<u8>),
    /// Formatted address (dotted IPv4, colon-hex IPv6 or MAC), or the text
    /// of a string-typed key.
    Str(String),
}

macro_rules! value_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Uint(n.into())
            }
        })*
    };
}
value_from_unsigned!(u8, u16, u32, u64, u128);

macro_rules! value_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Signed(n.into())
            }
        })*
    };
}
value_from_signed!(i8, i16, i32, i64, i128);

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uint(n) => write!(f, "{:#x}", n),
            Value::Signed(n) => write!(f, "{}", n),
            Value::Bytes(b) => write!(f, "0x{}", b.iter().map(|x| format!("{:02x}", x)).join("")),
            Value::Str(s) => write!(f, "\"{}\"", s.escape_debug()),
        }
    }
}

/// Storage size of a sized field: `bytes == ceil(bits / 8)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldSize {
    pub bytes: usize,
    pub bits: u32,
}

impl FieldSize {
    pub fn from_bits(bits: u32) -> Self {
        FieldSize {
            bytes: ((bits + 7) / 8) as usize,
            bits,
        }
    }
}

/// How a byte string is shown to callers, chosen by client annotations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Presentation {
    Int,
    Bytes,
    Ipv4,
    Ipv6,
    Mac,
}

impl Default for Presentation {
    fn default() -> Self {
        Presentation::Int
    }
}

impl Presentation {
    pub fn from_annotations(annotations: &[Annotation]) -> Self {
        if has_annotation(annotations, "$client_annotation.ipv4") {
            Presentation::Ipv4
        } else if has_annotation(annotations, "$client_annotation.ipv6") {
            Presentation::Ipv6
        } else if has_annotation(annotations, "$client_annotation.mac") {
            Presentation::Mac
        } else if has_annotation(annotations, "$client_annotation.bytes") {
            Presentation::Bytes
        } else {
            Presentation::Int
        }
    }
}

fn width_mask(bits: u32) -> u128 {
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

fn encode_uint(field: &str, n: u128, size: FieldSize) -> Result<Vec<u8>, FieldValueError> {
    if n & !width_mask(size.bits) != 0 {
        return Err(FieldValueError::Overflow {
            field: field.to_string(),
            bits: size.bits,
        });
    }
    let mut buf = [0u8; 16];
    BigEndian::write_u128(&mut buf, n);
    if size.bytes <= buf.len() {
        Ok(buf[buf.len() - size.bytes..].to_vec())
    } else {
        let mut out = vec![0u8; size.bytes - buf.len()];
        out.extend_from_slice(&buf);
        Ok(out)
    }
}

/// Left-pads `value` to the field size and checks the bits above the
/// declared width.
fn fit_bytes(field: &str, value: &[u8], size: FieldSize) -> Result<Vec<u8>, FieldValueError> {
    if value.len() > size.bytes {
        return Err(FieldValueError::Oversize {
            field: field.to_string(),
            len: value.len(),
            size: size.bytes,
        });
    }
    let mut out = vec![0u8; size.bytes - value.len()];
    out.extend_from_slice(value);
    let spare = size.bytes as u32 * 8 - size.bits;
    if spare > 0 && out[0] >> (8 - spare) != 0 {
        return Err(FieldValueError::Overflow {
            field: field.to_string(),
            bits: size.bits,
        });
    }
    Ok(out)
}

fn parse_address(field: &str, s: &str, presentation: Presentation) -> Result<Vec<u8>, FieldValueError> {
    let bad = |format| FieldValueError::BadAddress {
        field: field.to_string(),
        value: s.to_string(),
        format,
    };
    match presentation {
        Presentation::Ipv4 => s
            .parse::<Ipv4Addr>()
            .map(|a| a.octets().to_vec())
            .map_err(|_| bad("ipv4")),
        Presentation::Ipv6 => s
            .parse::<Ipv6Addr>()
            .map(|a| a.octets().to_vec())
            .map_err(|_| bad("ipv6")),
        Presentation::Mac => {
            let octets = s
                .split(':')
                .map(|part| u8::from_str_radix(part, 16))
                .collect::<Result<Vec<u8>, _>>()
                .map_err(|_| bad("mac"))?;
            if octets.len() != 6 {
                return Err(bad("mac"));
            }
            Ok(octets)
        }
        Presentation::Int | Presentation::Bytes => Err(FieldValueError::StringNeedsAnnotation {
            field: field.to_string(),
        }),
    }
}

/// Encodes `value` for a field.  `size` is `None` for string-typed key
/// fields, which carry their UTF-8 text.
pub fn encode(
    field: &str,
    value: &Value,
    size: Option<FieldSize>,
    presentation: Presentation,
) -> Result<Vec<u8>, FieldValueError> {
    let size = match size {
        Some(size) => size,
        None => return encode_unsized(field, value),
    };
    match value {
        Value::Uint(n) => encode_uint(field, *n, size),
        Value::Signed(n) if *n >= 0 => encode_uint(field, *n as u128, size),
        Value::Signed(n) => Err(FieldValueError::Negative {
            field: field.to_string(),
            value: *n,
        }),
        Value::Bytes(b) => fit_bytes(field, b, size),
        Value::Str(s) => fit_bytes(field, &parse_address(field, s, presentation)?, size),
    }
}

/// Like `encode`, but a negative integer is taken as two's complement and
/// truncated to the field width.  Ternary masks such as `-1 << 8` come in
/// this way.
pub fn encode_masked(
    field: &str,
    value: &Value,
    size: Option<FieldSize>,
    presentation: Presentation,
) -> Result<Vec<u8>, FieldValueError> {
    match (value, size) {
        (Value::Signed(n), Some(size)) if *n < 0 && size.bits <= 128 => {
            encode_uint(field, (*n as u128) & width_mask(size.bits), size)
        }
        _ => encode(field, value, size, presentation),
    }
}

fn encode_unsized(field: &str, value: &Value) -> Result<Vec<u8>, FieldValueError> {
    match value {
        Value::Str(s) => Ok(s.as_bytes().to_vec()),
        Value::Bytes(b) => Ok(b.clone()),
        _ => Err(FieldValueError::TypeMismatch {
            field: field.to_string(),
            expected: "a string".to_string(),
        }),
    }
}

fn format_mac(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).join(":")
}

/// Decodes wire bytes for presentation.  Address presentations fall back
/// to an integer when the length is wrong for the address family.
pub fn decode(bytes: &[u8], presentation: Presentation) -> Value {
    match presentation {
        Presentation::Ipv4 if bytes.len() == 4 => {
            Value::Str(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]).to_string())
        }
        Presentation::Ipv6 if bytes.len() == 16 => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(bytes);
            Value::Str(Ipv6Addr::from(octets).to_string())
        }
        Presentation::Mac => Value::Str(format_mac(bytes)),
        Presentation::Bytes => Value::Bytes(bytes.to_vec()),
        _ => decode_uint(bytes),
    }
}

fn decode_uint(bytes: &[u8]) -> Value {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];
    match significant.len() {
        0 => Value::Uint(0),
        n if n <= 16 => Value::Uint(BigEndian::read_uint128(significant, n)),
        _ => Value::Bytes(bytes.to_vec()),
    }
}

/// Fits wire bytes to the field size.  Short values are left-padded and
/// surplus leading zero bytes dropped; anything else is kept as received.
/// Decodes the bytes of a string-typed field.
pub fn decode_text(field: &str, bytes: &[u8]) -> Result<Value, FieldValueError> {
    String::from_utf8(bytes.to_vec())
        .map(Value::Str)
        .map_err(|_| FieldValueError::NotText {
            field: field.to_string(),
        })
}

pub fn normalize(bytes: &[u8], size: Option<FieldSize>) -> Vec<u8> {
    match size {
        Some(size) if bytes.len() < size.bytes => {
            let mut out = vec![0u8; size.bytes - bytes.len()];
            out.extend_from_slice(bytes);
            out
        }
        Some(size) if bytes[..bytes.len() - size.bytes].iter().all(|&b| b == 0) => {
            bytes[bytes.len() - size.bytes..].to_vec()
        }
        _ => bytes.to_vec(),
    }
}

/// Mask with the top `prefix_len` bits of the declared width set.
pub fn prefix_mask(prefix_len: u32, size: FieldSize) -> Vec<u8> {
    let mut mask = vec![0u8; size.bytes];
    for bit in size.bits.saturating_sub(prefix_len)..size.bits {
        mask[size.bytes - 1 - (bit / 8) as usize] |= 1 << (bit % 8);
    }
    mask
}

/// Bytewise AND of two equal-width values.
pub fn mask_bytes(value: &[u8], mask: &[u8]) -> Vec<u8> {
    value.iter().zip(mask).map(|(v, m)| v & m).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(n: u32) -> Option<FieldSize> {
        Some(FieldSize::from_bits(n))
    }

    #[test]
    fn integers_pad_to_width() {
        let p = Presentation::Int;
        assert_eq!(encode("f", &5u8.into(), bits(8), p).unwrap(), vec![5]);
        assert_eq!(encode("f", &0x1ffu32.into(), bits(9), p).unwrap(), vec![1, 0xff]);
        assert_eq!(encode("f", &1000u32.into(), bits(32), p).unwrap(), vec![0, 0, 3, 0xe8]);
        let wide = encode("f", &1u8.into(), bits(160), p).unwrap();
        assert_eq!(wide.len(), 20);
        assert_eq!(wide[19], 1);
    }

    #[test]
    fn range_is_checked_against_bits() {
        let p = Presentation::Int;
        assert_eq!(
            encode("f", &512u32.into(), bits(9), p),
            Err(FieldValueError::Overflow { field: "f".into(), bits: 9 })
        );
        assert!(encode("f", &(-1i32).into(), bits(8), p).is_err());
        assert!(encode("f", &vec![2u8, 0].into(), bits(9), p).is_err());
        assert!(matches!(
            encode("f", &vec![0u8, 0, 1].into(), bits(16), p),
            Err(FieldValueError::Oversize { len: 3, size: 2, .. })
        ));
    }

    #[test]
    fn zero_width_field() {
        let p = Presentation::Int;
        assert_eq!(encode("f", &0u8.into(), bits(0), p).unwrap(), Vec::<u8>::new());
        assert!(encode("f", &1u8.into(), bits(0), p).is_err());
    }

    #[test]
    fn short_bytes_are_left_padded() {
        let v = encode("f", &vec![0xabu8].into(), bits(24), Presentation::Int).unwrap();
        assert_eq!(v, vec![0, 0, 0xab]);
    }

    #[test]
    fn negative_masks_wrap_to_width() {
        let v = encode_masked("m", &(-256i32).into(), bits(32), Presentation::Int).unwrap();
        assert_eq!(v, vec![0xff, 0xff, 0xff, 0x00]);
        let v = encode_masked("m", &(-1i32).into(), bits(9), Presentation::Int).unwrap();
        assert_eq!(v, vec![0x01, 0xff]);
    }

    #[test]
    fn addresses() {
        let v = encode("a", &"10.12.14.16".into(), bits(32), Presentation::Ipv4).unwrap();
        assert_eq!(v, vec![10, 12, 14, 16]);
        assert_eq!(decode(&v, Presentation::Ipv4), Value::Str("10.12.14.16".into()));

        let v = encode("m", &"4f:3d:2c:1a:00:ff".into(), bits(48), Presentation::Mac).unwrap();
        assert_eq!(v, vec![0x4f, 0x3d, 0x2c, 0x1a, 0x00, 0xff]);
        assert_eq!(decode(&v, Presentation::Mac), Value::Str("4f:3d:2c:1a:00:ff".into()));

        let v = encode("a", &"2001:db8::1".into(), bits(128), Presentation::Ipv6).unwrap();
        assert_eq!(v.len(), 16);
        assert_eq!(decode(&v, Presentation::Ipv6), Value::Str("2001:db8::1".into()));

        assert!(matches!(
            encode("a", &"10.1.2".into(), bits(32), Presentation::Ipv4),
            Err(FieldValueError::BadAddress { format: "ipv4", .. })
        ));
        assert!(matches!(
            encode("a", &"10.1.2.3".into(), bits(32), Presentation::Int),
            Err(FieldValueError::StringNeedsAnnotation { .. })
        ));
    }

    #[test]
    fn decode_round_trips_within_width() {
        for &(n, width) in &[(0u128, 8), (255, 8), (0x1ff, 9), (1 << 47, 48), (u64::MAX as u128, 64), (u128::MAX, 128)] {
            let encoded = encode("f", &Value::Uint(n), bits(width), Presentation::Int).unwrap();
            assert_eq!(decode(&encoded, Presentation::Int), Value::Uint(n));
        }
        let raw = vec![0u8, 1, 2, 3];
        let encoded = encode("f", &raw.clone().into(), bits(32), Presentation::Bytes).unwrap();
        assert_eq!(decode(&encoded, Presentation::Bytes), Value::Bytes(raw));
    }

    #[test]
    fn strings_without_width() {
        assert_eq!(encode("s", &"eth0".into(), None, Presentation::Int).unwrap(), b"eth0".to_vec());
        assert!(encode("s", &7u8.into(), None, Presentation::Int).is_err());
    }

    #[test]
    fn prefix_masks() {
        assert_eq!(prefix_mask(24, FieldSize::from_bits(32)), vec![0xff, 0xff, 0xff, 0]);
        assert_eq!(prefix_mask(0, FieldSize::from_bits(32)), vec![0, 0, 0, 0]);
        assert_eq!(prefix_mask(3, FieldSize::from_bits(9)), vec![0x01, 0xc0]);
        assert_eq!(prefix_mask(9, FieldSize::from_bits(9)), vec![0x01, 0xff]);
    }

    #[test]
    fn wire_bytes_fit_field_size() {
        let size = bits(16);
        assert_eq!(normalize(&[5], size), vec![0, 5]);
        assert_eq!(normalize(&[0, 0, 1, 2], size), vec![1, 2]);
        assert_eq!(normalize(&[9, 0, 1, 2], size), vec![9, 0, 1, 2]);
        assert_eq!(normalize(b"eth0", None), b"eth0".to_vec());
    }
}
