use std::fmt;

/// Which side table a placeholder points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Fenced code (```` ``` ````).
    Code,
    /// Display math (`$$ ... $$`).
    Math,
}

impl RegionKind {
    const fn tag(self) -> &'static str {
        match self {
            Self::Code => "CODE_BLOCK",
            Self::Math => "LATEX_BLOCK",
        }
    }
}

/// Single-line token standing in for an extracted region.
///
/// Tokens are wrapped in a private-use character so that literal document
/// text such as `CODE_BLOCK_0` never resolves as a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder {
    pub kind: RegionKind,
    pub index: usize,
}

impl Placeholder {
    /// Delimits both ends of a rendered token.
    pub const SENTINEL: char = '\u{F8FF}';

    pub fn new(kind: RegionKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Recognises a line consisting of exactly one token (surrounding
    /// whitespace ignored).
    pub fn parse(line: &str) -> Option<Self> {
        let inner = line
            .trim()
            .strip_prefix(Self::SENTINEL)?
            .strip_suffix(Self::SENTINEL)?;
        [RegionKind::Code, RegionKind::Math]
            .into_iter()
            .find_map(|kind| {
                let index = inner.strip_prefix(kind.tag())?.strip_prefix('_')?;
                if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                index.parse().ok().map(|index| Self { kind, index })
            })
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{s}{}_{}{s}",
            self.kind.tag(),
            self.index,
            s = Self::SENTINEL
        )
    }
}
