use crate::parsing::inline::types::TextSpan;

/// A style enclosed by a pair of identical delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimited {
    Bold,
    Italic,
    Code,
}

impl Delimited {
    /// Pass order. Bold must run before italic and code so `**` is consumed first.
    pub const PASSES: [Delimited; 3] = [Delimited::Bold, Delimited::Italic, Delimited::Code];

    pub const fn delimiter(self) -> &'static str {
        match self {
            Delimited::Bold => "**",
            Delimited::Italic => "_",
            Delimited::Code => "`",
        }
    }

    /// Wraps text found between a pair of this delimiter.
    pub fn span(self, text: &str) -> TextSpan {
        match self {
            Delimited::Bold => TextSpan::bold(text),
            Delimited::Italic => TextSpan::italic(text),
            Delimited::Code => TextSpan::code(text),
        }
    }
}
