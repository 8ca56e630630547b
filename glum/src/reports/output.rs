//! Output trait for rendering reports to different formats.

use puddleglum_codegen::pipeline::Severity;

/// Target output for reports.
///
/// Reports describe *what* to output using the semantic methods; an
/// implementation only decides where lines go.
pub trait Output {
    /// Write one line of regular output.
    fn line(&mut self, text: &str);

    /// Write one line of out-of-band output (warnings, errors).
    fn error_line(&mut self, text: &str) {
        self.line(text);
    }

    fn section(&mut self, name: &str) {
        self.line(&format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(&format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(&format!("  - {}", text));
    }

    /// Render an added item (e.g., a written file).
    fn added_item(&mut self, text: &str) {
        self.line(&format!("  + {}", text));
    }

    /// Render a pipeline finding. Only info goes to regular output.
    fn diagnostic(&mut self, severity: Severity, msg: &str) {
        let text = format!("{}: {}", severity, msg);
        match severity {
            Severity::Info => self.line(&text),
            Severity::Warning | Severity::Error => self.error_line(&text),
        }
    }

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str) {
        self.line(&format!("── {} ──", label));
    }

    fn newline(&mut self) {
        self.line("");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output: stdout, with warnings on stderr.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error_line(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

/// Collects rendered lines, for asserting on reports.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
