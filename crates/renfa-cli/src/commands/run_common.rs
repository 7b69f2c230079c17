//! Shared pattern loading and compilation for all commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use renfa_lib::{Compiler, Error, Nfa, Tracer};

/// Where the pattern comes from: inline text or `-f FILE`.
pub struct PatternInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

/// A pattern ready to compile, with the path used in diagnostics.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadedPattern {
    pub source: String,
    pub path: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("pattern is required: use a positional argument or -f/--file")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub fn load_pattern(input: &PatternInput) -> Result<LoadedPattern, LoadError> {
    if let Some(path) = &input.file {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    match &input.text {
        Some(text) => Ok(LoadedPattern {
            source: text.clone(),
            path: None,
        }),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<LoadedPattern, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedPattern {
        source: strip_line_ending(buf),
        path: Some("<stdin>".to_string()),
    })
}

fn load_file(path: &Path) -> Result<LoadedPattern, LoadError> {
    let display = path.to_string_lossy().into_owned();
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: display.clone(),
        source,
    })?;
    Ok(LoadedPattern {
        source: strip_line_ending(content),
        path: Some(display),
    })
}

/// Files usually end with a newline that is not part of the pattern.
pub fn strip_line_ending(mut text: String) -> String {
    let trimmed = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(trimmed);
    text
}

/// Load the pattern or exit with status 1.
pub fn load_or_exit(input: &PatternInput) -> LoadedPattern {
    load_pattern(input).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

pub fn compiler(recursion_limit: Option<u32>) -> Compiler {
    Compiler::new().with_recursion_limit(recursion_limit)
}

/// Render a conversion error against its pattern on stderr.
pub fn report(error: &Error, pattern: &LoadedPattern, color: bool) {
    let mut printer = error
        .printer()
        .source(&pattern.source)
        .colored(color);
    if let Some(path) = &pattern.path {
        printer = printer.path(path);
    }
    eprintln!("{}", printer.render());
}

/// Compile `pattern`, or report the error and exit with status 1.
pub fn compile_or_exit<T: Tracer>(
    pattern: &LoadedPattern,
    recursion_limit: Option<u32>,
    tracer: &mut T,
    color: bool,
) -> Nfa {
    compiler(recursion_limit)
        .compile_with(&pattern.source, tracer)
        .unwrap_or_else(|e| {
            report(&e, pattern, color);
            std::process::exit(1);
        })
}
