// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Friendly names for well-known EFI firmware GUIDs.
//!
//! Firmware volumes and files are tagged with GUIDs that say how their
//! contents are encoded. This crate maps the ones firmware tooling cares
//! about to short `Category:Variant` identifiers such as `Volume:Ffs2`.
//!
//! Lookups take the lowercase hyphenated string form and match it exactly:
//! there is no case folding or trimming. A miss is an ordinary outcome, and
//! callers usually fall back to showing the raw GUID (see [`display_name`]).
//! To match input in other forms (upper case, braces), parse it into a
//! [`Guid`] first and use [`guid_value_to_name`].
//!
//! All data is `static` and every lookup is a pure function, so the API can
//! be used from any thread without synchronization.

#![forbid(unsafe_code)]

mod table;

pub use table::file;
pub use table::volume;

use guid::Guid;
use table::GUID_TABLE;

/// The category half of a GUID name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GuidCategory {
    /// A firmware volume file system.
    Volume,
    /// A firmware file.
    File,
}

impl GuidCategory {
    /// The prefix used in entry names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            GuidCategory::Volume => "Volume",
            GuidCategory::File => "File",
        }
    }
}

impl std::fmt::Display for GuidCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A known GUID and its name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GuidEntry {
    guid: &'static str,
    value: Guid,
    name: &'static str,
    category: GuidCategory,
}

impl GuidEntry {
    /// The canonical lowercase GUID string.
    pub fn guid(&self) -> &'static str {
        self.guid
    }

    /// The GUID as a value.
    pub fn value(&self) -> Guid {
        self.value
    }

    /// The full name, e.g. `Volume:Ffs2`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> GuidCategory {
        self.category
    }

    /// The part of the name after the category, e.g. `Ffs2`.
    pub fn variant(&self) -> &'static str {
        self.name
            .split_once(':')
            .map_or(self.name, |(_, variant)| variant)
    }
}

/// Returns every known entry, in a fixed order.
pub fn entries() -> &'static [GuidEntry] {
    GUID_TABLE
}

/// Converts a GUID string to its known name.
///
/// `guid` is compared byte-for-byte against the lowercase canonical form,
/// e.g. `8c8ce578-8a3d-4f1c-9935-896185c32dd3`. Any string is accepted;
/// anything that isn't an exact match returns `None`.
pub fn guid_to_name(guid: &str) -> Option<&'static str> {
    GUID_TABLE
        .iter()
        .find(|entry| entry.guid == guid)
        .map(|entry| entry.name)
}

/// Like [`guid_to_name`], for callers whose GUID may be absent.
pub fn guid_to_name_opt(guid: Option<&str>) -> Option<&'static str> {
    guid.and_then(guid_to_name)
}

/// Converts a parsed GUID to its known name.
pub fn guid_value_to_name(guid: &Guid) -> Option<&'static str> {
    GUID_TABLE
        .iter()
        .find(|entry| entry.value == *guid)
        .map(|entry| entry.name)
}

/// Converts a name such as `Volume:Ffs2` back to its canonical GUID string.
/// Matching is exact and case-sensitive.
pub fn name_to_guid(name: &str) -> Option<&'static str> {
    GUID_TABLE
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.guid)
}

/// Returns the known name for `guid`, or `guid` itself if it is unknown.
pub fn display_name(guid: &str) -> &str {
    guid_to_name(guid).unwrap_or(guid)
}
