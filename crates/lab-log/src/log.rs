use std::{
    io::Write,
    sync::{OnceLock, Mutex, MutexGuard, PoisonError},
};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use crate::*;

use fmt::SegmentSpec;

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

struct Logger {
    out: Box<dyn WriteColor + Send>,
    error_fmt: LogFmt,
    warn_fmt: LogFmt,
    info_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    filter: Filter,
}

impl Logger {

    fn new() -> Self {
        Self {
            out: Box::new(StandardStream::stderr(ColorChoice::Auto)),
            error_fmt: LogFmt::prefixed("error: ", Color::Red),
            warn_fmt: LogFmt::prefixed("warning: ", Color::Yellow),
            info_fmt: LogFmt::prefixed("info: ", Color::Green),
            debug_fmt: LogFmt::prefixed("debug: ", Color::Blue),
            trace_fmt: LogFmt::prefixed("trace: ", Color::Magenta),
            filter: Filter::from_env(),
        }
    }

    fn fmt_mut(&mut self, level: Level) -> &mut LogFmt {
        match level {
            Level::Error => &mut self.error_fmt,
            Level::Warn => &mut self.warn_fmt,
            Level::Info => &mut self.info_fmt,
            Level::Debug => &mut self.debug_fmt,
            Level::Trace => &mut self.trace_fmt,
        }
    }

    fn log(&mut self, target: &str, level: Level, msg: core::fmt::Arguments) -> Result<bool> {
        if !self.filter.enabled(target, level) {
            return Ok(false)
        }
        let fmt = match level {
            Level::Error => &self.error_fmt,
            Level::Warn => &self.warn_fmt,
            Level::Info => &self.info_fmt,
            Level::Debug => &self.debug_fmt,
            Level::Trace => &self.trace_fmt,
        };
        write_record(&mut self.out, fmt, msg)?;
        Ok(true)
    }
}

/// Writes one log line laid out by `fmt`.
pub fn write_record(
    out: &mut impl WriteColor,
    fmt: &LogFmt,
    msg: core::fmt::Arguments,
) -> Result<()>
{
    for segment in fmt {
        match segment {
            SegmentSpec::Message(log_spec) => {
                if let Some(color_spec) = &log_spec.color_spec {
                    out.set_color(color_spec)?;
                    write!(out, "{}", msg)?;
                    out.reset()?;
                } else {
                    write!(out, "{}", msg)?;
                }
            },
            SegmentSpec::Text(text, log_spec) => {
                if let Some(color_spec) = &log_spec.color_spec {
                    out.set_color(color_spec)?;
                    out.write_all(text.as_bytes())?;
                    out.reset()?;
                } else {
                    out.write_all(text.as_bytes())?;
                }
            },
        }
    }
    out.write_all(b"\n")?;
    Ok(())
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

#[inline(always)]
fn logger() -> MutexGuard<'static, Logger> {
    LOGGER
        .get_or_init(|| Mutex::new(Logger::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Reads `RUST_LOG` and sets up the default formats. Calling it again does
/// nothing.
pub fn init() {
    drop(logger());
}

/// Replaces the level filter.
pub fn set_filter(filter: Filter) {
    logger().filter = filter;
}

/// Redirects records from stderr to `out`.
pub fn set_output(out: impl WriteColor + Send + 'static) {
    logger().out = Box::new(out);
}

/// Rebuilds the format of `level`. `f` runs before the logger is locked, so
/// it may log itself.
pub fn set_fmt(level: Level, mut f: impl FnMut(&mut LogFmtBuilder)) {
    let mut fmt = LogFmt::default();
    f(&mut LogFmtBuilder::new(&mut fmt));
    *logger().fmt_mut(level) = fmt;
}

#[inline(always)]
pub fn error_fmt(f: impl FnMut(&mut LogFmtBuilder)) {
    set_fmt(Level::Error, f)
}

#[inline(always)]
pub fn warn_fmt(f: impl FnMut(&mut LogFmtBuilder)) {
    set_fmt(Level::Warn, f)
}

#[inline(always)]
pub fn info_fmt(f: impl FnMut(&mut LogFmtBuilder)) {
    set_fmt(Level::Info, f)
}

#[inline(always)]
pub fn debug_fmt(f: impl FnMut(&mut LogFmtBuilder)) {
    set_fmt(Level::Debug, f)
}

#[inline(always)]
pub fn trace_fmt(f: impl FnMut(&mut LogFmtBuilder)) {
    set_fmt(Level::Trace, f)
}

#[inline(always)]
pub fn enabled(target: &str, level: Level) -> bool {
    logger().filter.enabled(target, level)
}

#[inline(always)]
pub fn log(target: &str, level: Level, args: core::fmt::Arguments) -> Result<bool> {
    logger().log(target, level, args)
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Error, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Warn, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Info, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Debug, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Trace, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use termcolor::Buffer;

    #[derive(Clone)]
    struct Shared(Arc<Mutex<Buffer>>);

    impl Shared {

        fn text(&self) -> String {
            let buf = self.0.lock().unwrap();
            String::from_utf8_lossy(buf.as_slice()).into_owned()
        }
    }

    impl Write for Shared {

        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl WriteColor for Shared {

        fn supports_color(&self) -> bool {
            false
        }

        fn set_color(&mut self, _spec: &ColorSpec) -> std::io::Result<()> {
            Ok(())
        }

        fn reset(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(Level::from_str("WARN"), Ok(Level::Warn));
        assert_eq!(Level::from_str("trace"), Ok(Level::Trace));
        assert_eq!(Level::from_str("nope"), Err(()));
        assert!(Level::Error < Level::Trace);
    }

    #[test]
    fn record_follows_fmt() {
        let mut fmt = LogFmt::default();
        LogFmtBuilder::new(&mut fmt)
            .text("[", |spec| spec)
            .message(|spec| spec.with_color_spec(|c| { c.set_fg(Some(Color::Red)); }))
            .text("]", |spec| spec);
        let mut out = Buffer::no_color();
        write_record(&mut out, &fmt, format_args!("index {} out of range", 100)).unwrap();
        assert_eq!(String::from_utf8_lossy(out.as_slice()), "[index 100 out of range]\n");
    }

    #[test]
    fn default_prefix_is_written() {
        let fmt = LogFmt::prefixed("warning: ", Color::Yellow);
        let mut out = Buffer::no_color();
        write_record(&mut out, &fmt, format_args!("unparsable amount")).unwrap();
        assert_eq!(String::from_utf8_lossy(out.as_slice()), "warning: unparsable amount\n");
    }

    #[test]
    fn filtered_records_are_skipped() {
        set_filter(Filter::parse("lab_log::log::tests=warn"));
        assert!(!crate::info!("not shown {}", 1));
        assert!(enabled(module_path!(), Level::Warn));
        assert!(!enabled("somewhere::else", Level::Warn));
    }

    #[test]
    fn init_twice_keeps_logger() {
        init();
        init();
        assert!(enabled("lab_log::init", Level::Error));
    }

    #[test]
    fn set_fmt_changes_records() {
        let sink = Shared(Arc::new(Mutex::new(Buffer::no_color())));
        set_output(sink.clone());
        error_fmt(|builder| {
            // the logger must not be locked while the format is built
            assert!(enabled("lab_log::rebuild", Level::Error));
            builder
                .text("<<", |spec| spec)
                .message(|spec| spec)
                .text(">>", |spec| spec);
        });
        assert!(log("lab_log::rebuild", Level::Error, format_args!("store {}", "closed")).unwrap());
        assert!(sink.text().contains("<<store closed>>\n"));
        error_fmt(|builder| {
            builder.text("error: ", |spec| spec).message(|spec| spec);
        });
        assert!(log("lab_log::rebuild", Level::Error, format_args!("again")).unwrap());
        assert!(sink.text().ends_with("error: again\n"));
    }
}
