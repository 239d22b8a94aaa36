//! Turns parsed `CliArgs` into an exit code. Mirrors the teacher's
//! split between `args.rs` (what can be typed on the command line) and
//! `driver.rs` (what actually happens), just without the project/
//! tsconfig/module-resolution machinery this language has no use for.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use nanots_binder::bind;
use nanots_checker::check;
use nanots_common::{Diagnostic, DiagnosticSink, LineMap};
use nanots_emitter::{emit, strip};

use crate::args::Command;

const INTERNAL_ERROR_EXIT_CODE: i32 = 101;

pub fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn run(command: Command, json: bool) -> i32 {
    let result = std::panic::catch_unwind(|| match command {
        Command::Check { input } => run_check(&input, json),
        Command::Build {
            input,
            output,
            emit_on_error,
        } => run_build(&input, output.as_deref(), emit_on_error, json),
    });

    match result {
        Ok(Ok(code)) => code,
        Ok(Err(err)) => {
            eprintln!("nanots: {err:#}");
            1
        }
        Err(panic) => {
            let message = panic_message(&*panic);
            eprintln!("nanots: internal error: {message}");
            INTERNAL_ERROR_EXIT_CODE
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn run_check(input: &Path, json: bool) -> Result<i32> {
    let _span = tracing::info_span!("check", input = %input.display()).entered();
    let source = read_source(input)?;
    let mut diagnostics = DiagnosticSink::new();
    let ast = nanots_parser::parse(&source, &mut diagnostics);
    let bound = bind(&ast, &mut diagnostics);
    let _ = check(&ast, bound, &mut diagnostics);
    print_diagnostics(&diagnostics, &source, input, json)?;
    Ok(if diagnostics.is_empty() { 0 } else { 1 })
}

fn run_build(input: &Path, output: Option<&Path>, emit_on_error: bool, json: bool) -> Result<i32> {
    let _span = tracing::info_span!("build", input = %input.display()).entered();
    let source = read_source(input)?;
    let mut diagnostics = DiagnosticSink::new();
    let ast = nanots_parser::parse(&source, &mut diagnostics);
    let bound = bind(&ast, &mut diagnostics);
    let _ = check(&ast, bound, &mut diagnostics);
    print_diagnostics(&diagnostics, &source, input, json)?;

    if !diagnostics.is_empty() && !emit_on_error {
        return Ok(1);
    }

    let stripped = strip(&ast, ast.module_statements());
    let rendered = emit(&stripped);
    write_output(output, &rendered)?;

    Ok(if diagnostics.is_empty() { 0 } else { 1 })
}

fn read_source(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading source from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
    }
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        None => {
            println!("{rendered}");
            Ok(())
        }
        Some(path) => fs::write(path, rendered).with_context(|| format!("writing {}", path.display())),
    }
}

fn print_diagnostics(diagnostics: &DiagnosticSink, source: &str, input: &Path, json: bool) -> Result<()> {
    if json {
        let records: Vec<&Diagnostic> = diagnostics.errors().collect();
        let rendered = serde_json::to_string(&records).context("serialising diagnostics")?;
        println!("{rendered}");
        return Ok(());
    }

    let line_map = LineMap::build(source);
    let display_path = display_path(input);
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    for diagnostic in diagnostics.errors() {
        let line_col = line_map.offset_to_line_col(diagnostic.pos);
        writeln!(lock, "{}:{}:{}: {}", display_path, line_col.line, line_col.column, diagnostic.message)?;
    }
    Ok(())
}

fn display_path(input: &Path) -> String {
    if input == Path::new("-") {
        "<stdin>".to_string()
    } else {
        input.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn check_exits_zero_on_well_typed_source() {
        let file = write_temp("var x: number = 1;");
        let code = run_check(file.path(), false).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn check_exits_one_when_diagnostics_are_recorded() {
        let file = write_temp("var x: number = \"hi\";");
        let code = run_check(file.path(), false).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn build_writes_stripped_source_to_output_path() {
        let input = write_temp("var x: number = 1;");
        let output = tempfile::NamedTempFile::new().unwrap();
        let code = run_build(input.path(), Some(output.path()), false, false).unwrap();
        assert_eq!(code, 0);
        assert_eq!(fs::read_to_string(output.path()).unwrap(), "var x = 1");
    }

    #[test]
    fn build_refuses_to_emit_when_diagnostics_present_without_emit_on_error() {
        let input = write_temp("var x: number = \"hi\";");
        let output = tempfile::NamedTempFile::new().unwrap();
        fs::write(output.path(), "untouched").unwrap();
        let code = run_build(input.path(), Some(output.path()), false, false).unwrap();
        assert_eq!(code, 1);
        assert_eq!(fs::read_to_string(output.path()).unwrap(), "untouched");
    }

    #[test]
    fn build_emits_anyway_when_emit_on_error_is_set() {
        let input = write_temp("var x: number = \"hi\";");
        let output = tempfile::NamedTempFile::new().unwrap();
        let code = run_build(input.path(), Some(output.path()), true, false).unwrap();
        assert_eq!(code, 1);
        assert_eq!(fs::read_to_string(output.path()).unwrap(), "var x = \"hi\"");
    }

    #[test]
    fn run_reports_internal_error_exit_code_on_panic() {
        // `run_check`/`run_build` panic via `InternalError` rather than returning
        // `Err`, so exercise `run`'s translation directly with a closure that
        // panics the same way an internal-contract violation would.
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let result = std::panic::catch_unwind(|| -> Result<i32> {
            panic!("internal error: symbol has no declaration that can produce a value type");
        });
        std::panic::set_hook(previous_hook);
        match result {
            Err(panic) => assert_eq!(panic_message(&*panic), "internal error: symbol has no declaration that can produce a value type"),
            Ok(_) => panic!("expected the closure to panic"),
        }
    }
}
