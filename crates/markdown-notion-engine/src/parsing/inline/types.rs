use crate::models::TextRun;

/// One piece of a line while inline passes run.
///
/// `Raw` text is still eligible for later passes; a `Run` has been claimed
/// by an earlier, higher-precedence pass and is never rescanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Raw(String),
    Run(TextRun),
}

impl Segment {
    /// Final conversion: leftover raw text becomes a plain run.
    pub fn into_run(self) -> TextRun {
        match self {
            Self::Raw(text) => TextRun::plain(text),
            Self::Run(run) => run,
        }
    }
}
