// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Command line utility to look up the names of well-known EFI firmware
//! GUIDs.

use clap::Parser;
use clap::ValueEnum;
use efi_guid_names::GuidCategory;
use efi_guid_names::GuidEntry;
use guid::Guid;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum Error {
    #[error("unknown GUID {0}")]
    UnknownGuid(String),
    #[error("unknown name {0:?}")]
    UnknownName(String),
    #[error("invalid GUID {input:?}")]
    InvalidGuid {
        input: String,
        #[source]
        err: guid::ParseError,
    },
    #[error("invalid GUID bytes")]
    InvalidHex(#[source] hex::FromHexError),
    #[error("expected 16 GUID bytes, got {0}")]
    BytesLength(usize),
    #[error("writing output")]
    Output(#[source] std::io::Error),
    #[error("serializing output")]
    Json(#[source] serde_json::Error),
}

/// Lookup misses get their own exit code so scripts can tell them apart from
/// bad input.
#[derive(Debug, Clone, Copy)]
#[repr(i32)]
enum ExitCode {
    Error = 1,
    ErrorNotFound = 2,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CategoryArg {
    Volume,
    File,
}

impl From<CategoryArg> for GuidCategory {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Volume => GuidCategory::Volume,
            CategoryArg::File => GuidCategory::File,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "efiguid", about = "Tool to look up well-known EFI firmware GUIDs")]
enum Options {
    /// Print the name of a GUID, or the GUID itself if it is unknown
    Name {
        /// Lowercase GUID, e.g. 8c8ce578-8a3d-4f1c-9935-896185c32dd3
        guid: String,
        /// Fail instead of echoing unknown GUIDs
        #[clap(long)]
        strict: bool,
        /// Parse the GUID first, accepting braces and upper case
        #[clap(long)]
        parse: bool,
    },
    /// Print the GUID for a name such as Volume:Ffs2
    Guid {
        name: String,
    },
    /// Decode a GUID from its on-disk bytes and print its name
    Bytes {
        /// 32 hex digits, in the order they appear in the firmware image
        hex: String,
        /// Fail instead of echoing unknown GUIDs
        #[clap(long)]
        strict: bool,
    },
    /// List all known GUIDs
    List {
        /// Emit a JSON array instead of a table
        #[clap(long)]
        json: bool,
        /// Only list entries in this category
        #[clap(long, value_enum)]
        category: Option<CategoryArg>,
    },
}

#[derive(Serialize)]
struct JsonEntry {
    guid: &'static str,
    name: &'static str,
}

impl From<&GuidEntry> for JsonEntry {
    fn from(entry: &GuidEntry) -> Self {
        Self {
            guid: entry.guid(),
            name: entry.name(),
        }
    }
}

fn main() {
    let opts = Options::parse();
    let filter = if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::default().add_directive(LevelFilter::INFO.into())
    };
    tracing_subscriber::fmt()
        .log_internal_errors(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let stdout = std::io::stdout();
    if let Err(e) = run(opts, &mut stdout.lock()) {
        let exit_code = match e {
            Error::UnknownGuid(_) | Error::UnknownName(_) => ExitCode::ErrorNotFound,
            _ => ExitCode::Error,
        };

        eprintln!("ERROR: {}", e);
        let mut error_source = std::error::Error::source(&e);
        while let Some(e2) = error_source {
            eprintln!("- {}", e2);
            error_source = e2.source();
        }

        std::process::exit(exit_code as i32);
    }
}

fn run(opts: Options, out: &mut impl Write) -> Result<(), Error> {
    match opts {
        Options::Name {
            guid,
            strict,
            parse,
        } => {
            let (key, name) = if parse {
                let value: Guid = guid.parse().map_err(|err| Error::InvalidGuid {
                    input: guid.clone(),
                    err,
                })?;
                (value.to_string(), efi_guid_names::guid_value_to_name(&value))
            } else {
                let name = efi_guid_names::guid_to_name(&guid);
                (guid, name)
            };
            print_name(out, key, name, strict)
        }
        Options::Guid { name } => {
            let guid = efi_guid_names::name_to_guid(&name).ok_or(Error::UnknownName(name))?;
            writeln!(out, "{guid}").map_err(Error::Output)
        }
        Options::Bytes { hex, strict } => {
            let value = guid_from_hex(&hex)?;
            tracing::debug!(%value, "decoded on-disk GUID");
            print_name(
                out,
                value.to_string(),
                efi_guid_names::guid_value_to_name(&value),
                strict,
            )
        }
        Options::List { json, category } => {
            let category = category.map(GuidCategory::from);
            let entries = efi_guid_names::entries()
                .iter()
                .filter(|entry| category.is_none_or(|c| entry.category() == c));

            if json {
                let entries: Vec<JsonEntry> = entries.map(JsonEntry::from).collect();
                serde_json::to_writer_pretty(&mut *out, &entries).map_err(Error::Json)?;
                writeln!(out).map_err(Error::Output)
            } else {
                for entry in entries {
                    writeln!(out, "{}  {}", entry.guid(), entry.name()).map_err(Error::Output)?;
                }
                Ok(())
            }
        }
    }
}

/// Writes `name`, falling back to the GUID itself unless `strict` is set.
fn print_name(
    out: &mut impl Write,
    guid: String,
    name: Option<&'static str>,
    strict: bool,
) -> Result<(), Error> {
    let line: &str = match name {
        Some(name) => name,
        None if strict => return Err(Error::UnknownGuid(guid)),
        None => {
            tracing::debug!(%guid, "no name for GUID");
            &guid
        }
    };
    writeln!(out, "{line}").map_err(Error::Output)
}

fn guid_from_hex(input: &str) -> Result<Guid, Error> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(digits).map_err(Error::InvalidHex)?;
    let bytes: [u8; 16] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| Error::BytesLength(bytes.len()))?;
    Ok(Guid::from_efi_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, Error> {
        let opts = Options::try_parse_from(std::iter::once("efiguid").chain(args.iter().copied()))
            .expect("valid arguments");
        let mut out = Vec::new();
        run(opts, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn name() {
        assert_eq!(
            run_args(&["name", "8c8ce578-8a3d-4f1c-9935-896185c32dd3"]).unwrap(),
            "Volume:Ffs2\n"
        );
    }

    #[test]
    fn name_fallback() {
        assert_eq!(
            run_args(&["name", "00000000-0000-0000-0000-000000000000"]).unwrap(),
            "00000000-0000-0000-0000-000000000000\n"
        );
        assert!(matches!(
            run_args(&["name", "--strict", "00000000-0000-0000-0000-000000000000"]),
            Err(Error::UnknownGuid(_))
        ));
    }

    #[test]
    fn name_is_exact_unless_parsed() {
        let upper = "{4E35FD93-9C72-4C15-8C4B-E77F1DB2D792}";
        assert_eq!(run_args(&["name", upper]).unwrap(), format!("{upper}\n"));
        assert_eq!(
            run_args(&["name", "--parse", upper]).unwrap(),
            "File:FvImage\n"
        );
        assert!(matches!(
            run_args(&["name", "--parse", "nonsense"]),
            Err(Error::InvalidGuid { .. })
        ));
    }

    #[test]
    fn reverse() {
        assert_eq!(
            run_args(&["guid", "Volume:NvramNvar"]).unwrap(),
            "cef5b9a3-476d-497f-9fdc-e98143e0422c\n"
        );
        assert!(matches!(
            run_args(&["guid", "Volume:Ffs4"]),
            Err(Error::UnknownName(_))
        ));
    }

    #[test]
    fn bytes() {
        assert_eq!(
            run_args(&["bytes", "78e58c8c 3d8a 1c4f 9935 896185c32dd3"]).unwrap(),
            "Volume:Ffs2\n"
        );
        assert_eq!(
            run_args(&["bytes", "00000000000000000000000000000000"]).unwrap(),
            "00000000-0000-0000-0000-000000000000\n"
        );
        assert!(matches!(
            run_args(&["bytes", "78e58c8c"]),
            Err(Error::BytesLength(4))
        ));
        assert!(matches!(
            run_args(&["bytes", "zz"]),
            Err(Error::InvalidHex(_))
        ));
    }

    #[test]
    fn list() {
        let text = run_args(&["list"]).unwrap();
        assert_eq!(text.lines().count(), efi_guid_names::entries().len());
        assert!(text.contains("7a9354d9-0468-444a-81ce-0bf617d890df  Volume:Ffs1"));

        let files = run_args(&["list", "--category", "file"]).unwrap();
        assert_eq!(files, "4e35fd93-9c72-4c15-8c4b-e77f1db2d792  File:FvImage\n");
    }

    #[test]
    fn list_json() {
        let json = run_args(&["list", "--json", "--category", "volume"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 9);
        assert_eq!(array[1]["name"], "Volume:Ffs2");
        assert_eq!(array[1]["guid"], "8c8ce578-8a3d-4f1c-9935-896185c32dd3");
    }

    #[test]
    fn rejects_bad_args() {
        assert!(Options::try_parse_from(["efiguid", "list", "--category", "ffs"]).is_err());
        assert!(Options::try_parse_from(["efiguid", "name"]).is_err());
    }
}
