//! `RUST_LOG` style level filtering.
//!
//! The filter is a comma separated list of `level` or `target=level`
//! directives. A bare level sets the base level, which defaults to
//! [`Level::Error`]. A target matches itself and every module below it, the
//! longest matching `::` prefix wins.

use core::str::FromStr;

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use crate::Level;

#[derive(Clone, Debug)]
pub struct Filter {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Filter {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Filter {

    pub fn parse(spec: &str) -> Self {
        let mut filter = Self::default();
        for arg in spec.split(',') {
            let (module, level) = match arg.find('=') {
                Some(j) => (Some(arg[0..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            if let Some(module) = module {
                let entry = filter.target_levels
                    .entry(CompactString::new(module))
                    .or_insert(level);
                *entry = (*entry).min(level);
            } else {
                filter.base_level = level;
            }
        }
        filter
    }

    pub fn from_env() -> Self {
        match std::env::var("RUST_LOG") {
            Ok(env) => Self::parse(&env),
            Err(_) => Self::default(),
        }
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    pub fn target_level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.target_level(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_error_only() {
        let filter = Filter::parse("");
        assert_eq!(filter.base_level(), Level::Error);
        assert!(filter.enabled("lab::store", Level::Error));
        assert!(!filter.enabled("lab::store", Level::Warn));
    }

    #[test]
    fn base_and_target_levels() {
        let filter = Filter::parse("warn, lab::store=trace ,lab_mem=info");
        assert_eq!(filter.base_level(), Level::Warn);
        assert_eq!(filter.target_level("lab::store"), Level::Trace);
        assert_eq!(filter.target_level("lab::store::menu"), Level::Trace);
        assert_eq!(filter.target_level("lab::car"), Level::Warn);
        assert_eq!(filter.target_level("lab_mem::owned_array"), Level::Info);
    }

    #[test]
    fn repeated_target_keeps_lowest_level() {
        let filter = Filter::parse("lab=debug,lab=warn");
        assert_eq!(filter.target_level("lab"), Level::Warn);
    }

    #[test]
    fn unknown_levels_are_ignored() {
        let filter = Filter::parse("loud,lab=verbose,info");
        assert_eq!(filter.base_level(), Level::Info);
        assert_eq!(filter.target_level("lab"), Level::Info);
    }
}
