//! Command-line options.
//!
//! Flags are parsed by hand; `-o` and the valued flags take the next argument.

use std::path::PathBuf;

use interop_codegen::CodegenConfig;

use crate::input::load_config;
use crate::DriverError;

/// Options of the `generate` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Descriptor document.
    pub input: PathBuf,
    /// Directory receiving the artifacts.
    pub output: PathBuf,
    /// Configuration document; flags below override its values.
    pub config: Option<PathBuf>,
    pub pointer_size: Option<u32>,
    pub runtime_namespace: Option<String>,
    pub generated_namespace: Option<String>,
    pub no_parallel: bool,
}

impl GenerateOptions {
    /// Parse the arguments following `generate`.
    pub fn parse(args: &[String]) -> Result<Self, DriverError> {
        let mut options = GenerateOptions {
            output: PathBuf::from("."),
            ..GenerateOptions::default()
        };
        let mut input = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-o" | "--output" => options.output = PathBuf::from(value(&mut iter, arg)?),
                "--config" => options.config = Some(PathBuf::from(value(&mut iter, arg)?)),
                "--pointer-size" => {
                    let raw = value(&mut iter, arg)?;
                    let size = raw.parse::<u32>().ok().filter(|&n| n == 4 || n == 8);
                    let Some(size) = size else {
                        return Err(DriverError::usage(format!(
                            "invalid pointer size `{raw}`: expected 4 or 8"
                        )));
                    };
                    options.pointer_size = Some(size);
                }
                "--runtime-namespace" => {
                    options.runtime_namespace = Some(value(&mut iter, arg)?.to_string());
                }
                "--generated-namespace" => {
                    options.generated_namespace = Some(value(&mut iter, arg)?.to_string());
                }
                "--no-parallel" => options.no_parallel = true,
                flag if flag.starts_with('-') => {
                    return Err(DriverError::usage(format!("unknown option `{flag}`")));
                }
                path if input.is_none() => input = Some(PathBuf::from(path)),
                extra => {
                    return Err(DriverError::usage(format!("unexpected argument `{extra}`")));
                }
            }
        }

        let Some(input) = input else {
            return Err(DriverError::usage("missing descriptor file"));
        };
        options.input = input;
        Ok(options)
    }

    /// Configuration from the optional document, with flag overrides applied.
    pub fn resolve_config(&self) -> Result<CodegenConfig, DriverError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => CodegenConfig::default(),
        };
        if let Some(size) = self.pointer_size {
            config.pointer_size = size;
        }
        if let Some(ns) = &self.runtime_namespace {
            config.runtime_namespace.clone_from(ns);
        }
        if let Some(ns) = &self.generated_namespace {
            config.generated_namespace.clone_from(ns);
        }
        if self.no_parallel {
            config.parallel = false;
        }
        Ok(config)
    }
}

fn value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, DriverError> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| DriverError::usage(format!("`{flag}` expects a value")))
}

/// Options of the `encode` command: a pattern and its relocation offsets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub pattern: String,
    pub relocation_offsets: Vec<u8>,
}

impl EncodeOptions {
    /// Parse `encode <pattern...> [--reloc N]...`. Unquoted pattern tokens
    /// are joined back together.
    pub fn parse(args: &[String]) -> Result<Self, DriverError> {
        let mut tokens = Vec::new();
        let mut relocation_offsets = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--reloc" {
                let raw = value(&mut iter, arg)?;
                let offset = raw
                    .parse::<u8>()
                    .map_err(|_| DriverError::usage(format!("invalid relocation offset `{raw}`")))?;
                relocation_offsets.push(offset);
            } else {
                tokens.push(arg.as_str());
            }
        }

        if tokens.is_empty() {
            return Err(DriverError::usage("missing signature pattern"));
        }
        Ok(EncodeOptions {
            pattern: tokens.join(" "),
            relocation_offsets,
        })
    }
}
