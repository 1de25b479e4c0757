//! Display-time localization and output sinks.
//!
//! Rendering a value passes its fixed labels and string contents through
//! a [`RenderHook`]. The hook is a pure text-to-text seam: it never sees
//! structure and cannot influence evaluation. The core ships an identity
//! hook and a static French dictionary; a network-backed hook lives with
//! the REPL binary so this crate stays fully testable offline.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

/// Localizes one rendered fragment at display time.
pub trait RenderHook {
    /// Translate a fragment, returning it unchanged when there is no
    /// mapping.
    fn render(&self, text: &str) -> String;

    /// Prefix for rendered runtime errors.
    fn error_prefix(&self) -> &str {
        "ERROR: "
    }
}

/// Render a runtime error with the hook's prefix. The message itself is
/// not translated.
pub fn render_error(error: &impl Display, hook: &dyn RenderHook) -> String {
    format!("{}{}", hook.error_prefix(), error)
}

/// Pass-through hook; the default for library use and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl RenderHook for Identity {
    fn render(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Offline French hook backed by [`static_french`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticFrench;

impl RenderHook for StaticFrench {
    fn render(&self, text: &str) -> String {
        static_french(text).unwrap_or(text).to_owned()
    }

    fn error_prefix(&self) -> &str {
        "ERREUR : "
    }
}

/// Fixed English-to-French word map used when no translation service is
/// reachable. Lookup is exact; anything absent renders untranslated.
pub fn static_french(word: &str) -> Option<&'static str> {
    let translated = match word {
        "hi" => "bonjour",
        "dog" => "chien",
        "goodbye" => "au revoir",
        "true" => "vrai",
        "false" => "faux",
        "null" => "nul",
        "function" => "fonction",
        "return" => "retour",
        "error" => "erreur",
        "builtin" => "fonction intégrée",
        "array" => "tableau",
        "hash" => "table de hachage",
        "integer" => "entier",
        "boolean" => "booléen",
        "string" => "chaîne",
        "nil" => "nul",
        "and" => "et",
        "or" => "ou",
        "not" => "pas",
        "if" => "si",
        "else" => "sinon",
        "for" => "pour",
        "let" => "laisser",
        "in" => "dans",
        "of" => "de",
        "to" => "à",
        "with" => "avec",
        "func" => "fonction",
        "undefined" => "indéfini",
        _ => return None,
    };
    Some(translated)
}

/// Where `puts` writes. Injectable so tests can capture output.
pub trait PrintHandler {
    fn print_line(&mut self, line: &str);
}

/// Writes each line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutPrint;

impl PrintHandler for StdoutPrint {
    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects printed lines for assertions. Clones share one buffer, so a
/// handle kept outside the evaluator still sees everything written.
#[derive(Clone, Debug, Default)]
pub struct CapturePrint {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CapturePrint {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl PrintHandler for CapturePrint {
    fn print_line(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}
