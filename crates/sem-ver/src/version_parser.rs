//! Single-pass scanner for semantic version strings

use thiserror::Error;

/// Reason a version string was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    #[error("expected major, minor and patch components")]
    MissingComponent,
    #[error("more than three numeric components")]
    TooManyComponents,
    #[error("empty numeric component")]
    EmptyComponent,
    #[error("numeric identifier \"{0}\" has a leading zero")]
    LeadingZero(String),
    #[error("numeric component \"{0}\" is too large")]
    Overflow(String),
    #[error("empty identifier")]
    EmptyIdentifier,
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// Error returned when a string is not a valid semantic version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version string \"{input}\": {kind}")]
pub struct FormatError {
    input: String,
    kind: FormatErrorKind,
}

impl FormatError {
    fn new(input: &str, kind: FormatErrorKind) -> Self {
        FormatError {
            input: input.to_string(),
            kind,
        }
    }

    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> &FormatErrorKind {
        &self.kind
    }
}

/// Borrowed components of a validated version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Parts<'a> {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<&'a str>,
    pub build: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Core,
    Prerelease,
    Build,
}

/// Walks the input once; each segment is validated when its terminating
/// separator (or the end of input) is reached.
struct Scanner<'a> {
    input: &'a str,
    zone: Zone,
    core: [u64; 3],
    component: usize,
    segment_start: usize,
    prerelease: Option<(usize, usize)>,
    build_start: Option<usize>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            zone: Zone::Core,
            core: [0; 3],
            component: 0,
            segment_start: 0,
            prerelease: None,
            build_start: None,
        }
    }

    fn error(&self, kind: FormatErrorKind) -> FormatError {
        FormatError::new(self.input, kind)
    }

    fn unexpected(&self, position: usize) -> FormatError {
        let character = self.input[position..].chars().next().unwrap_or_default();
        self.error(FormatErrorKind::UnexpectedCharacter { character, position })
    }

    fn run(mut self) -> Result<Parts<'a>, FormatError> {
        let input = self.input;
        for (position, byte) in input.bytes().enumerate() {
            match (self.zone, byte) {
                (Zone::Core, b'0'..=b'9') => {}
                (Zone::Core, b'.') => {
                    if self.component == 2 {
                        return Err(self.error(FormatErrorKind::TooManyComponents));
                    }
                    self.finish_core_component(position)?;
                }
                (Zone::Core, b'-' | b'+') => {
                    if self.component < 2 {
                        return Err(self.error(FormatErrorKind::MissingComponent));
                    }
                    self.finish_core_component(position)?;
                    if byte == b'-' {
                        self.zone = Zone::Prerelease;
                        self.prerelease = Some((position + 1, input.len()));
                    } else {
                        self.zone = Zone::Build;
                        self.build_start = Some(position + 1);
                    }
                }
                (Zone::Prerelease | Zone::Build, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'-') => {}
                (Zone::Prerelease, b'.') => self.finish_prerelease_identifier(position)?,
                (Zone::Prerelease, b'+') => {
                    self.finish_prerelease_identifier(position)?;
                    if let Some((start, _)) = self.prerelease {
                        self.prerelease = Some((start, position));
                    }
                    self.zone = Zone::Build;
                    self.build_start = Some(position + 1);
                }
                (Zone::Build, b'.') => self.finish_build_identifier(position)?,
                _ => return Err(self.unexpected(position)),
            }
        }

        let end = input.len();
        match self.zone {
            Zone::Core => {
                if self.component < 2 {
                    return Err(self.error(FormatErrorKind::MissingComponent));
                }
                self.finish_core_component(end)?;
            }
            Zone::Prerelease => self.finish_prerelease_identifier(end)?,
            Zone::Build => self.finish_build_identifier(end)?,
        }

        Ok(Parts {
            major: self.core[0],
            minor: self.core[1],
            patch: self.core[2],
            prerelease: self.prerelease.map(|(start, end)| &input[start..end]),
            build: self.build_start.map(|start| &input[start..]),
        })
    }

    fn finish_core_component(&mut self, end: usize) -> Result<(), FormatError> {
        let segment = &self.input[self.segment_start..end];
        if segment.is_empty() {
            return Err(self.error(FormatErrorKind::EmptyComponent));
        }
        if has_leading_zero(segment) {
            return Err(self.error(FormatErrorKind::LeadingZero(segment.to_string())));
        }
        let value = segment
            .parse()
            .map_err(|_| self.error(FormatErrorKind::Overflow(segment.to_string())))?;
        self.core[self.component] = value;
        self.component += 1;
        self.segment_start = end + 1;
        Ok(())
    }

    fn finish_prerelease_identifier(&mut self, end: usize) -> Result<(), FormatError> {
        let identifier = &self.input[self.segment_start..end];
        if identifier.is_empty() {
            return Err(self.error(FormatErrorKind::EmptyIdentifier));
        }
        if is_numeric(identifier) && has_leading_zero(identifier) {
            return Err(self.error(FormatErrorKind::LeadingZero(identifier.to_string())));
        }
        self.segment_start = end + 1;
        Ok(())
    }

    fn finish_build_identifier(&mut self, end: usize) -> Result<(), FormatError> {
        if self.segment_start == end {
            return Err(self.error(FormatErrorKind::EmptyIdentifier));
        }
        self.segment_start = end + 1;
        Ok(())
    }
}

pub(crate) fn is_numeric(identifier: &str) -> bool {
    identifier.bytes().all(|b| b.is_ascii_digit())
}

fn has_leading_zero(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0')
}

/// Validate `input` against the semantic version grammar.
pub(crate) fn parse(input: &str) -> Result<Parts<'_>, FormatError> {
    Scanner::new(input).run().inspect_err(|err| {
        log::trace!("{}", err);
    })
}
