//! CLI entry point for the cpuinfo dump decoder.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cpuinfo_core::{
    detect_register_set, load_register_dump, write_memory_map, write_register_report, RegisterSet,
    TableImage,
};
#[cfg(test)]
use tempfile as _;

const USAGE_TEXT: &str = "\
Usage: cpuinfo <dump-file>
       cpuinfo <command> [options]

Commands:
  registers <dump> [--set vmsa|pmsa] [-o <output>]  Decode a register dump
  memmap <image> [--base <addr>] [-o <output>]      Decode a translation-table image to CSV

Options:
  --set <vmsa|pmsa>    Force the register layout (default: detect from file size)
  --base <addr>        Physical address of the image start, hex (default: 0)
  -o, --output <file>  Write to a file instead of stdout
  -h, --help           Show this help message

Examples:
  cpuinfo CPUINFO.DAT
  cpuinfo registers cpuinfo_r6.dat --set pmsa
  cpuinfo memmap mmu_dump.bin --base 0x40000000 -o MMU_MAP.CSV
";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Registers(RegistersArgs),
    Memmap(MemmapArgs),
}

#[derive(Debug, PartialEq, Eq)]
struct RegistersArgs {
    input: PathBuf,
    set: Option<RegisterSet>,
    output: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
struct MemmapArgs {
    input: PathBuf,
    base: u32,
    output: Option<PathBuf>,
}

#[derive(Debug)]
enum ParseResult {
    Command(Command),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let first = args.next().ok_or_else(|| "missing input path".to_string())?;

    if first == "--help" || first == "-h" {
        return Ok(ParseResult::Help);
    }

    let first_str = first.to_string_lossy().to_string();

    match first_str.as_str() {
        "registers" => parse_registers_args(None, args)
            .map(Command::Registers)
            .map(ParseResult::Command),
        "memmap" => parse_memmap_args(args)
            .map(Command::Memmap)
            .map(ParseResult::Command),
        other if other.starts_with('-') => Err(format!("unknown option: {other}")),
        // bare dump path: the classic one-argument form
        _ => parse_registers_args(Some(PathBuf::from(first)), args)
            .map(Command::Registers)
            .map(ParseResult::Command),
    }
}

#[allow(clippy::while_let_on_iterator)]
fn parse_registers_args(
    input: Option<PathBuf>,
    mut args: impl Iterator<Item = OsString>,
) -> Result<RegistersArgs, String> {
    let mut input = input;
    let mut set: Option<RegisterSet> = None;
    let mut output: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            return Err(USAGE_TEXT.to_string());
        }

        if arg == "--set" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for --set".to_string())?;
            set = Some(parse_register_set(&value.to_string_lossy())?);
            continue;
        }

        if arg == "-o" || arg == "--output" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for -o".to_string())?;
            output = Some(PathBuf::from(value));
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        if input.is_some() {
            return Err("multiple input paths provided".to_string());
        }
        input = Some(PathBuf::from(arg));
    }

    let input = input.ok_or_else(|| "missing input path".to_string())?;
    Ok(RegistersArgs { input, set, output })
}

#[allow(clippy::while_let_on_iterator)]
fn parse_memmap_args(mut args: impl Iterator<Item = OsString>) -> Result<MemmapArgs, String> {
    let mut input: Option<PathBuf> = None;
    let mut base = 0u32;
    let mut output: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            return Err(USAGE_TEXT.to_string());
        }

        if arg == "--base" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for --base".to_string())?;
            base = parse_hex_address(&value.to_string_lossy())?;
            continue;
        }

        if arg == "-o" || arg == "--output" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for -o".to_string())?;
            output = Some(PathBuf::from(value));
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        if input.is_some() {
            return Err("multiple input paths provided".to_string());
        }
        input = Some(PathBuf::from(arg));
    }

    let input = input.ok_or_else(|| "missing input path".to_string())?;
    Ok(MemmapArgs {
        input,
        base,
        output,
    })
}

fn parse_register_set(value: &str) -> Result<RegisterSet, String> {
    match value.to_ascii_lowercase().as_str() {
        "vmsa" => Ok(RegisterSet::Vmsa),
        "pmsa" => Ok(RegisterSet::Pmsa),
        other => Err(format!("unknown register set: {other} (expected vmsa or pmsa)")),
    }
}

fn parse_hex_address(value: &str) -> Result<u32, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u32::from_str_radix(digits, 16).map_err(|_| format!("invalid address: {value}"))
}

fn run_registers(args: &RegistersArgs) -> Result<(), i32> {
    let bytes = read_input(&args.input)?;

    let set = match args.set {
        Some(set) => set,
        None => detect_register_set(bytes.len()).map_err(|error| {
            eprintln!("error: {error}");
            1
        })?,
    };

    let words = load_register_dump(&bytes, set).map_err(|error| {
        eprintln!("error: {error}");
        1
    })?;

    let mut report = Vec::new();
    write_register_report(&mut report, set, &words).map_err(|error| {
        eprintln!("error: {error}");
        1
    })?;

    emit(&report, args.output.as_deref())
}

fn run_memmap(args: &MemmapArgs) -> Result<(), i32> {
    let bytes = read_input(&args.input)?;
    let image = TableImage::new(&bytes, args.base);

    let mut report = Vec::new();
    write_memory_map(&mut report, &image).map_err(|error| {
        eprintln!("error: {error}");
        1
    })?;

    emit(&report, args.output.as_deref())
}

fn read_input(path: &Path) -> Result<Vec<u8>, i32> {
    fs::read(path).map_err(|error| {
        eprintln!("error: cannot read {}: {error}", path.display());
        1
    })
}

fn emit(report: &[u8], output: Option<&Path>) -> Result<(), i32> {
    match output {
        Some(path) => fs::write(path, report).map_err(|error| {
            eprintln!("error: failed to write {}: {error}", path.display());
            1
        }),
        None => io::stdout().write_all(report).map_err(|error| {
            eprintln!("error: {error}");
            1
        }),
    }
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Command(Command::Registers(args))) => match run_registers(&args) {
            Ok(()) => 0,
            Err(code) => code,
        },
        Ok(ParseResult::Command(Command::Memmap(args))) => match run_memmap(&args) {
            Ok(()) => 0,
            Err(code) => code,
        },
        Err(error) => {
            if error.starts_with("Usage:") {
                println!("{error}");
            } else {
                eprintln!("error: {error}");
                eprintln!("{USAGE_TEXT}");
            }
            1
        }
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::PathBuf;

    #[test]
    fn bare_path_is_the_registers_command() {
        let result = parse_args([OsString::from("CPUINFO.DAT")].into_iter())
            .expect("bare path should parse");
        let ParseResult::Command(Command::Registers(args)) = result else {
            panic!("expected registers command");
        };
        assert_eq!(args.input, PathBuf::from("CPUINFO.DAT"));
        assert_eq!(args.set, None);
        assert_eq!(args.output, None);
    }

    #[test]
    fn parses_registers_command_with_options() {
        let result = parse_registers_args(
            None,
            [
                OsString::from("dump.dat"),
                OsString::from("--set"),
                OsString::from("pmsa"),
                OsString::from("-o"),
                OsString::from("report.txt"),
            ]
            .into_iter(),
        )
        .expect("valid registers args should parse");

        assert_eq!(
            result,
            RegistersArgs {
                input: PathBuf::from("dump.dat"),
                set: Some(RegisterSet::Pmsa),
                output: Some(PathBuf::from("report.txt")),
            }
        );
    }

    #[test]
    fn parses_memmap_command_with_base() {
        let result = parse_memmap_args(
            [
                OsString::from("image.bin"),
                OsString::from("--base"),
                OsString::from("0x40000000"),
            ]
            .into_iter(),
        )
        .expect("valid memmap args should parse");

        assert_eq!(
            result,
            MemmapArgs {
                input: PathBuf::from("image.bin"),
                base: 0x4000_0000,
                output: None,
            }
        );
    }

    #[test]
    fn parses_help_flag() {
        let result = parse_args([OsString::from("--help")].into_iter())
            .expect("help should parse without error");
        assert!(matches!(result, ParseResult::Help));
    }

    #[test]
    fn rejects_unknown_option() {
        let error = parse_args([OsString::from("--frobnicate")].into_iter())
            .expect_err("unknown option should fail parse");
        assert!(error.contains("unknown option"));
    }

    #[test]
    fn rejects_missing_input() {
        let error = parse_args(std::iter::empty()).expect_err("missing input should fail");
        assert!(error.contains("missing input"));
    }

    #[test]
    fn rejects_multiple_inputs() {
        let error = parse_registers_args(
            None,
            [OsString::from("a.dat"), OsString::from("b.dat")].into_iter(),
        )
        .expect_err("two inputs should fail");
        assert!(error.contains("multiple input paths"));
    }

    #[test]
    fn register_set_names_are_case_insensitive() {
        assert_eq!(parse_register_set("VMSA"), Ok(RegisterSet::Vmsa));
        assert_eq!(parse_register_set("pmsa"), Ok(RegisterSet::Pmsa));
        assert!(parse_register_set("lpae").is_err());
    }

    #[test]
    fn hex_addresses_parse_with_and_without_prefix() {
        assert_eq!(parse_hex_address("0x1000"), Ok(0x1000));
        assert_eq!(parse_hex_address("1000"), Ok(0x1000));
        assert_eq!(parse_hex_address("ffffFC00"), Ok(0xFFFF_FC00));
        assert!(parse_hex_address("0xZZZ").is_err());
        assert!(parse_hex_address("").is_err());
    }
}
