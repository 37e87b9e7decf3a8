// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Provides the [`Guid`] type used to identify EFI firmware volumes, files and
//! variables.
//!
//! The in-memory layout matches `EFI_GUID`, so on little-endian targets a
//! `Guid` can be read directly out of a firmware header with `zerocopy`. For
//! endian-independent conversion use [`Guid::from_efi_bytes`] and
//! [`Guid::to_efi_bytes`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::str::FromStr;
use thiserror::Error;
use zerocopy::FromBytes;
use zerocopy::FromZeros;
use zerocopy::Immutable;
use zerocopy::IntoBytes;
use zerocopy::KnownLayout;

/// An `EFI_GUID`.
#[repr(C)]
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, IntoBytes, FromBytes, Immutable, KnownLayout,
)]
#[expect(missing_docs)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Default for Guid {
    fn default() -> Self {
        Self::new_zeroed()
    }
}

// `?` is not available in const fn.
macro_rules! option_helper {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return None,
        }
    };
}

macro_rules! digit_helper {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return Err(ParseError::Digit),
        }
    };
}

impl Guid {
    /// The all-zero GUID.
    pub const ZERO: Self = Self::from_static_str("00000000-0000-0000-0000-000000000000");

    /// Parses a GUID constant, panicking if the input is invalid.
    ///
    /// Accepts `00000000-0000-0000-0000-000000000000` and the braced form
    /// `{00000000-0000-0000-0000-000000000000}`, with hex digits in either
    /// case. This is meant for `const` items; runtime input should go through
    /// [`FromStr`] instead.
    pub const fn from_static_str(value: &'static str) -> Guid {
        match Self::parse(value.as_bytes()) {
            Ok(guid) => guid,
            Err(ParseError::Length) => panic!("Invalid GUID length."),
            Err(ParseError::Format) => panic!("Invalid GUID format."),
            Err(ParseError::Digit) => panic!("Invalid GUID digit."),
        }
    }

    const fn parse(value: &[u8]) -> Result<Self, ParseError> {
        // No slicing in const fn, so walk with an offset past the brace.
        let offset = match value.len() {
            38 => {
                if value[0] != b'{' || value[37] != b'}' {
                    return Err(ParseError::Format);
                }
                1
            }
            36 => 0,
            _ => return Err(ParseError::Length),
        };

        let mut dash = 0;
        while dash < DASH_OFFSETS.len() {
            if value[offset + DASH_OFFSETS[dash]] != b'-' {
                return Err(ParseError::Format);
            }
            dash += 1;
        }

        let mut data4 = [0; 8];
        let mut i = 0;
        while i < data4.len() {
            data4[i] = digit_helper!(u8_from_hex(value, offset + DATA4_OFFSETS[i]));
            i += 1;
        }

        Ok(Guid {
            data1: digit_helper!(u32_from_hex(value, offset)),
            data2: digit_helper!(u16_from_hex(value, offset + 9)),
            data3: digit_helper!(u16_from_hex(value, offset + 14)),
            data4,
        })
    }

    /// Decodes a GUID from its EFI on-disk encoding.
    ///
    /// The first three fields are stored little-endian; the trailing eight
    /// bytes are stored as-is.
    pub const fn from_efi_bytes(bytes: [u8; 16]) -> Self {
        Guid {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4: [
                bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14],
                bytes[15],
            ],
        }
    }

    /// Encodes the GUID the way firmware stores it on disk.
    pub const fn to_efi_bytes(&self) -> [u8; 16] {
        let a = self.data1.to_le_bytes();
        let b = self.data2.to_le_bytes();
        let c = self.data3.to_le_bytes();
        let d = self.data4;
        [
            a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], d[0], d[1], d[2], d[3], d[4], d[5],
            d[6], d[7],
        ]
    }

    /// Returns true if this is the all-zero GUID.
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

/// Positions of the separators in the unbraced form.
const DASH_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Positions of the `data4` byte pairs in the unbraced form.
const DATA4_OFFSETS: [usize; 8] = [19, 21, 24, 26, 28, 30, 32, 34];

/// Lowercase `8-4-4-4-12`, the form firmware tooling keys its tables on.
impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7],
        )
    }
}

impl std::fmt::Debug for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// An error parsing a GUID.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[expect(missing_docs)]
pub enum ParseError {
    #[error("invalid GUID length")]
    Length,
    #[error("invalid GUID format")]
    Format,
    #[error("invalid GUID digit")]
    Digit,
}

const fn char_to_hex(value: u8) -> Option<u8> {
    Some(match value {
        b'0'..=b'9' => value - b'0',
        b'a'..=b'f' => 10 + value - b'a',
        b'A'..=b'F' => 10 + value - b'A',
        _ => return None,
    })
}

const fn u8_from_hex(input: &[u8], index: usize) -> Option<u8> {
    Some(
        option_helper!(char_to_hex(input[index])) << 4
            | option_helper!(char_to_hex(input[index + 1])),
    )
}

const fn u16_from_hex(input: &[u8], index: usize) -> Option<u16> {
    Some(
        (option_helper!(u8_from_hex(input, index)) as u16) << 8
            | (option_helper!(u8_from_hex(input, index + 2)) as u16),
    )
}

const fn u32_from_hex(input: &[u8], index: usize) -> Option<u32> {
    Some(
        (option_helper!(u16_from_hex(input, index)) as u32) << 16
            | (option_helper!(u16_from_hex(input, index + 4)) as u32),
    )
}

impl FromStr for Guid {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for Guid {
    type Error = ParseError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Guid::parse(value)
    }
}

impl From<[u8; 16]> for Guid {
    fn from(value: [u8; 16]) -> Self {
        Self::from_efi_bytes(value)
    }
}

impl From<Guid> for [u8; 16] {
    fn from(value: Guid) -> Self {
        value.to_efi_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::Guid;
    use super::ParseError;
    use zerocopy::FromBytes;

    const FFS2: Guid = Guid {
        data1: 0x8c8ce578,
        data2: 0x8a3d,
        data3: 0x4f1c,
        data4: [0x99, 0x35, 0x89, 0x61, 0x85, 0xc3, 0x2d, 0xd3],
    };

    // As found in the header of an FFSv2 firmware volume.
    const FFS2_ON_DISK: [u8; 16] = [
        0x78, 0xe5, 0x8c, 0x8c, 0x3d, 0x8a, 0x1c, 0x4f, 0x99, 0x35, 0x89, 0x61, 0x85, 0xc3, 0x2d,
        0xd3,
    ];

    #[test]
    fn display_is_lowercase() {
        assert_eq!(FFS2.to_string(), "8c8ce578-8a3d-4f1c-9935-896185c32dd3");
        assert_eq!(format!("{:?}", FFS2), "8c8ce578-8a3d-4f1c-9935-896185c32dd3");
    }

    #[test]
    fn parse_forms() {
        assert_eq!(
            FFS2,
            "8c8ce578-8a3d-4f1c-9935-896185c32dd3".parse::<Guid>().unwrap()
        );
        assert_eq!(
            FFS2,
            "{8C8CE578-8A3D-4F1C-9935-896185C32DD3}".parse::<Guid>().unwrap()
        );

        const PARSED: Guid = Guid::from_static_str("8c8ce578-8a3d-4f1c-9935-896185c32dd3");
        assert_eq!(FFS2, PARSED);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Guid>(), Err(ParseError::Length));
        assert_eq!(
            "8c8ce578-8a3d-4f1c-9935-896185c32dd3 ".parse::<Guid>(),
            Err(ParseError::Length)
        );
        assert_eq!(
            "8c8ce578_8a3d-4f1c-9935-896185c32dd3".parse::<Guid>(),
            Err(ParseError::Format)
        );
        assert_eq!(
            "(8c8ce578-8a3d-4f1c-9935-896185c32dd3)".parse::<Guid>(),
            Err(ParseError::Format)
        );
        assert_eq!(
            "8c8ce578-8a3d-4f1c-9935-896185c32ddg".parse::<Guid>(),
            Err(ParseError::Digit)
        );
    }

    #[test]
    fn efi_bytes() {
        assert_eq!(Guid::from_efi_bytes(FFS2_ON_DISK), FFS2);
        assert_eq!(FFS2.to_efi_bytes(), FFS2_ON_DISK);
        assert_eq!(<[u8; 16]>::from(FFS2), FFS2_ON_DISK);
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn header_layout_matches_efi_bytes() {
        assert_eq!(Guid::read_from_bytes(&FFS2_ON_DISK[..]).unwrap(), FFS2);
    }

    #[test]
    fn zero() {
        assert!(Guid::default().is_zero());
        assert!(!FFS2.is_zero());
    }
}
