//! Style - presentation attributes independent of colour

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Style: u16 {
        const BOLD          = 0b0000_0000_0001;
        const DIM           = 0b0000_0000_0010;
        const ITALIC        = 0b0000_0000_0100;
        const UNDERLINE     = 0b0000_0000_1000;
        const BLINK         = 0b0000_0001_0000;
        const INVERSE       = 0b0000_0010_0000;
        const HIDDEN        = 0b0000_0100_0000;
        const STRIKETHROUGH = 0b0000_1000_0000;
    }
}

/// SGR parameter for each attribute, in emission order
const SGR: [(Style, u8); 8] = [
    (Style::BOLD, 1),
    (Style::DIM, 2),
    (Style::ITALIC, 3),
    (Style::UNDERLINE, 4),
    (Style::BLINK, 5),
    (Style::INVERSE, 7),
    (Style::HIDDEN, 8),
    (Style::STRIKETHROUGH, 9),
];

impl Style {
    /// Parse a single attribute name. Unknown names yield an empty style.
    pub fn parse(name: &str) -> Style {
        match name.trim().to_lowercase().as_str() {
            "bold" => Style::BOLD,
            "dim" | "faint" => Style::DIM,
            "italic" => Style::ITALIC,
            "underline" | "underlined" => Style::UNDERLINE,
            "blink" => Style::BLINK,
            "inverse" | "reverse" | "negative" => Style::INVERSE,
            "hidden" | "conceal" => Style::HIDDEN,
            "strikethrough" | "crossed_out" => Style::STRIKETHROUGH,
            _ => Style::empty(),
        }
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Style {
        names
            .iter()
            .fold(Style::empty(), |style, name| style | Style::parse(name.as_ref()))
    }

    /// A single SGR sequence setting every attribute in this style; empty
    /// when no attribute is set.
    pub fn escape_sequence(&self) -> String {
        let params: Vec<String> = SGR
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, code)| code.to_string())
            .collect();

        if params.is_empty() {
            String::new()
        } else {
            format!("\x1b[{}m", params.join(";"))
        }
    }
}
