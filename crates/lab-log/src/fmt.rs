use compact_str::CompactString;

use termcolor::ColorSpec;

use lab_mem::{OwnedArray, owned_array::Iter};

/// Layout of one log line: a sequence of literal text and message segments.
pub struct LogFmt {
    segments: OwnedArray<SegmentSpec>,
}

impl Default for LogFmt {

    fn default() -> Self {
        Self {
            segments: OwnedArray::with_capacity(4),
        }
    }
}

impl LogFmt {

    fn clear(&mut self) {
        self.segments.clear();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `{prefix}{message}` with the prefix in `color`.
    pub fn prefixed(prefix: &str, color: termcolor::Color) -> Self {
        let mut fmt = Self::default();
        LogFmtBuilder::new(&mut fmt)
            .text(prefix, |spec| spec.with_color_spec(|c| { c.set_fg(Some(color)).set_bold(true); }))
            .message(|spec| spec);
        fmt
    }
}

impl<'a> IntoIterator for &'a LogFmt {

    type Item = &'a SegmentSpec;
    type IntoIter = Iter<'a, SegmentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[derive(Default, Clone)]
pub struct LogSpec {
    pub color_spec: Option<ColorSpec>,
}

impl LogSpec {

    #[inline(always)]
    pub fn with_color_spec(mut self, mut f: impl FnMut(&mut ColorSpec)) -> Self {
        let color_spec = self.color_spec.insert(ColorSpec::new());
        f(color_spec);
        self
    }
}

pub enum SegmentSpec {
    Message(LogSpec),
    Text(CompactString, LogSpec),
}

pub struct LogFmtBuilder<'a> {
    fmt: &'a mut LogFmt,
}

impl<'a> LogFmtBuilder<'a> {

    /// Clears `fmt` and starts building it from scratch.
    #[inline(always)]
    pub fn new(fmt: &'a mut LogFmt) -> Self {
        fmt.clear();
        Self {
            fmt,
        }
    }

    #[inline(always)]
    pub fn message(&mut self, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push_back(SegmentSpec::Message(f(Default::default())));
        self
    }

    #[inline(always)]
    pub fn text(&mut self, text: &str, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push_back(SegmentSpec::Text(CompactString::new(text), f(Default::default())));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use termcolor::Color;

    #[test]
    fn builder_replaces_segments() {
        let mut fmt = LogFmt::prefixed("[warn] ", Color::Yellow);
        assert_eq!(fmt.len(), 2);
        LogFmtBuilder::new(&mut fmt)
            .text(">> ", |spec| spec)
            .message(|spec| spec)
            .text(" <<", |spec| spec);
        let kinds: Vec<_> = (&fmt)
            .into_iter()
            .map(|segment| match segment {
                SegmentSpec::Message(_) => "msg".to_owned(),
                SegmentSpec::Text(text, _) => text.to_string(),
            })
            .collect();
        assert_eq!(kinds, vec![">> ", "msg", " <<"]);
    }

    #[test]
    fn prefix_is_colored() {
        let fmt = LogFmt::prefixed("[error] ", Color::Red);
        let first = (&fmt).into_iter().next().unwrap();
        match first {
            SegmentSpec::Text(text, spec) => {
                assert_eq!(text.as_str(), "[error] ");
                assert_eq!(spec.color_spec.as_ref().unwrap().fg(), Some(&Color::Red));
            },
            SegmentSpec::Message(_) => panic!("expected text segment"),
        }
    }
}
