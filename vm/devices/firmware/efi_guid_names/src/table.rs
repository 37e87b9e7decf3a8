// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The known GUIDs, as both canonical strings and [`guid::Guid`] values.

use crate::GuidCategory;
use crate::GuidEntry;

macro_rules! defn_guid {
    ($($(#[$a:meta])* $name:ident, $value_name:ident = $value:literal;)*) => {
        $(
            $(#[$a])*
            pub const $name: &str = $value;
            $(#[$a])*
            pub const $value_name: Guid = Guid::from_static_str($value);
        )*
    };
}

/// Firmware volume file-system GUIDs, found in the `FileSystemGuid` field of
/// an `EFI_FIRMWARE_VOLUME_HEADER`.
pub mod volume {
    use guid::Guid;

    defn_guid! {
        /// PI spec: `EFI_FIRMWARE_FILE_SYSTEM_GUID`
        FFS1, FFS1_GUID = "7a9354d9-0468-444a-81ce-0bf617d890df";
        /// PI spec: `EFI_FIRMWARE_FILE_SYSTEM2_GUID`
        FFS2, FFS2_GUID = "8c8ce578-8a3d-4f1c-9935-896185c32dd3";
        /// PI spec: `EFI_FIRMWARE_FILE_SYSTEM3_GUID`
        FFS3, FFS3_GUID = "5473c07a-3dcb-4dca-bd6f-70e25fb1e1a1";
        /// `EFI_SYSTEM_NV_DATA_FV_GUID`, NVRAM in the EVSA format.
        NVRAM_EVSA, NVRAM_EVSA_GUID = "fff12b8d-7696-4c8b-a985-2747075b4f50";
        /// NVRAM store in the NVAR format.
        NVRAM_NVAR, NVRAM_NVAR_GUID = "cef5b9a3-476d-497f-9fdc-e98143e0422c";
        /// Additional NVRAM store volume in the EVSA format.
        NVRAM_EVSA2, NVRAM_EVSA2_GUID = "00504624-8a59-4eeb-bd0f-6b36e96128e0";
        /// Apple boot volume.
        APPLE_BOOT, APPLE_BOOT_GUID = "04adeead-61ff-4d31-b6ba-64f8bf901f5a";
        /// PFH volume, first revision.
        PFH1, PFH1_GUID = "16b45da2-7d70-4aea-a58d-760e9ecb841d";
        /// PFH volume, second revision.
        PFH2, PFH2_GUID = "e360bdba-c3ce-46be-8f37-b231e5cb9f35";
    }
}

/// Firmware file name GUIDs.
pub mod file {
    use guid::Guid;

    defn_guid! {
        /// A file wrapping a nested firmware volume image.
        FV_IMAGE, FV_IMAGE_GUID = "4e35fd93-9c72-4c15-8c4b-e77f1db2d792";
    }
}

macro_rules! entry {
    ($category:ident, $variant:literal, $guid:expr, $value:expr) => {
        GuidEntry {
            guid: $guid,
            value: $value,
            name: concat!(stringify!($category), ":", $variant),
            category: GuidCategory::$category,
        }
    };
}

pub(crate) static GUID_TABLE: &[GuidEntry] = &[
    entry!(Volume, "Ffs1", volume::FFS1, volume::FFS1_GUID),
    entry!(Volume, "Ffs2", volume::FFS2, volume::FFS2_GUID),
    entry!(Volume, "Ffs3", volume::FFS3, volume::FFS3_GUID),
    entry!(Volume, "NvramEvsa", volume::NVRAM_EVSA, volume::NVRAM_EVSA_GUID),
    entry!(Volume, "NvramNvar", volume::NVRAM_NVAR, volume::NVRAM_NVAR_GUID),
    entry!(Volume, "NvramEvsa2", volume::NVRAM_EVSA2, volume::NVRAM_EVSA2_GUID),
    entry!(Volume, "AppleBoot", volume::APPLE_BOOT, volume::APPLE_BOOT_GUID),
    entry!(Volume, "Pfh1", volume::PFH1, volume::PFH1_GUID),
    entry!(Volume, "Pfh2", volume::PFH2, volume::PFH2_GUID),
    entry!(File, "FvImage", file::FV_IMAGE, file::FV_IMAGE_GUID),
];
