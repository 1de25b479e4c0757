//! The read-eval-print loop.
//!
//! One lex-parse-eval pass per line against a single session
//! environment, so bindings persist between lines. Parse errors are
//! reported as a batch and skip evaluation entirely; runtime errors get
//! the same banner treatment. The loop is generic over its streams so
//! tests can drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use snout_eval::{render_error, Env, Interpreter, Interrupt};
use snout_parse::{parse, ParseError};

pub const PROMPT: &str = ">> ";

pub const DOG_FACE: &str = r"
  / \\__
 (    @\\___
 /         O
/   (_____/
/_____/ U
";

/// Run the loop until end of input.
pub fn start(
    input: &mut impl BufRead,
    output: &mut impl Write,
    interp: &mut Interpreter,
) -> io::Result<()> {
    let env = Env::new();
    let mut line = String::new();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let src = line.trim_end_matches(['\n', '\r']);
        let (program, errors) = parse(src);
        if !errors.is_empty() {
            print_parse_errors(output, &errors)?;
            continue;
        }
        match interp.eval_program(&program, &env) {
            Ok(Some(value)) => writeln!(output, "{}", interp.inspect(&value))?,
            Ok(None) => {}
            Err(Interrupt::Error(error)) => {
                output.write_all(DOG_FACE.as_bytes())?;
                writeln!(output, "{}", render_error(&error, interp.hook()))?;
            }
            // The program driver unwinds top-level returns; this arm
            // exists only for exhaustiveness.
            Err(Interrupt::Return(value)) => {
                writeln!(output, "{}", interp.inspect(&value))?;
            }
        }
    }
}

fn print_parse_errors(output: &mut impl Write, errors: &[ParseError]) -> io::Result<()> {
    output.write_all(DOG_FACE.as_bytes())?;
    writeln!(output, "Oups ! Nous avons rencontré un problème avec Snout !")?;
    writeln!(output, "Erreurs d'analyse :")?;
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use snout_eval::render::{CapturePrint, Identity, StaticFrench};

    use super::*;

    fn run(src: &str, interp: &mut Interpreter) -> String {
        let mut input = Cursor::new(src.as_bytes().to_vec());
        let mut output = Vec::new();
        match start(&mut input, &mut output, interp) {
            Ok(()) => {}
            Err(error) => panic!("repl failed: {error}"),
        }
        String::from_utf8_lossy(&output).into_owned()
    }

    fn run_identity(src: &str) -> String {
        let mut interp =
            Interpreter::with_parts(Box::new(Identity), Box::new(CapturePrint::default()));
        run(src, &mut interp)
    }

    #[test]
    fn evaluates_a_line_and_prints_the_value() {
        assert_eq!(run_identity("1 + 2;\n"), ">> 3\n>> ");
    }

    #[test]
    fn bindings_persist_across_lines() {
        let out = run_identity("let x = 5;\nx * 2;\n");
        assert_eq!(out, ">> >> 10\n>> ");
    }

    #[test]
    fn let_lines_print_nothing() {
        assert_eq!(run_identity("let x = 1;\n"), ">> >> ");
    }

    #[test]
    fn exits_on_end_of_input() {
        assert_eq!(run_identity(""), ">> ");
    }

    #[test]
    fn parse_errors_print_the_banner_and_skip_evaluation() {
        let out = run_identity("let x 5;\n");
        assert!(out.contains(DOG_FACE), "missing dog face in {out:?}");
        assert!(out.contains("Oups ! Nous avons rencontré un problème avec Snout !"));
        assert!(out.contains("Erreurs d'analyse :"));
        assert!(out.contains("\texpected next token to be `=`, got integer `5`\n"));
    }

    #[test]
    fn a_parse_error_does_not_end_the_session() {
        let out = run_identity("let x 5;\n2 + 2;\n");
        assert!(out.ends_with("4\n>> "), "unexpected tail in {out:?}");
    }

    #[test]
    fn runtime_errors_print_the_banner_and_the_message() {
        let out = run_identity("foobar;\n");
        assert!(out.contains(DOG_FACE));
        assert!(out.contains("ERROR: identifier not found: foobar\n"));
    }

    #[test]
    fn runtime_error_leaves_earlier_bindings_intact() {
        let out = run_identity("let x = 7;\nx + true;\nx;\n");
        assert!(out.contains("ERROR: type mismatch: INTEGER + BOOLEAN"));
        assert!(out.ends_with("7\n>> "), "unexpected tail in {out:?}");
    }

    #[test]
    fn french_hook_localizes_values_and_the_error_prefix() {
        let mut interp =
            Interpreter::with_parts(Box::new(StaticFrench), Box::new(CapturePrint::default()));
        let out = run("true;\nmissing;\n", &mut interp);
        assert!(out.contains("vrai\n"), "missing French boolean in {out:?}");
        assert!(out.contains("ERREUR : identifier not found: missing\n"));
    }

    #[test]
    fn puts_goes_to_the_print_handler_not_the_repl_stream() {
        let capture = CapturePrint::default();
        let mut interp =
            Interpreter::with_parts(Box::new(Identity), Box::new(capture.clone()));
        let out = run("puts(\"hello\");\n", &mut interp);
        assert_eq!(capture.lines(), vec!["hello"]);
        assert!(out.contains("null\n"), "puts result should render in {out:?}");
    }
}
