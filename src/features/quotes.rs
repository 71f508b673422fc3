//! Quote shown under the phase label.

use chrono::Datelike;

const BUILTIN: &[&str] = &[
    "The secret of getting ahead is getting started.",
    "Focus on being productive instead of busy.",
    "Small steps every day.",
    "Do one thing at a time, and do it well.",
    "Action is the foundational key to all success.",
    "You don't have to see the whole staircase, just take the first step.",
    "Rest is not idleness.",
    "Well begun is half done.",
    "It always seems impossible until it's done.",
    "Concentrate all your thoughts upon the work at hand.",
];

/// Supplies at most one quote per session.
#[cfg_attr(test, mockall::automock)]
pub trait QuoteSource {
    /// Fetch a quote, if one is available.
    fn fetch(&mut self) -> Option<String>;
}

/// Picks a quote of the day from a fixed list.
#[derive(Debug, Clone)]
pub struct BuiltinQuotes {
    custom: Vec<String>,
    day: u32,
}

impl BuiltinQuotes {
    /// Use `custom` quotes if any are given, the built-in list otherwise.
    #[must_use]
    pub fn new(custom: Vec<String>) -> Self {
        Self::for_day(custom, chrono::Local::now().ordinal())
    }

    /// Select as if today were day `day` of the year.
    #[must_use]
    pub fn for_day(custom: Vec<String>, day: u32) -> Self {
        Self { custom, day }
    }
}

impl QuoteSource for BuiltinQuotes {
    fn fetch(&mut self) -> Option<String> {
        let day = usize::try_from(self.day).ok()?;
        let custom: Vec<&str> = self
            .custom
            .iter()
            .map(|q| q.trim())
            .filter(|q| !q.is_empty())
            .collect();
        let list: &[&str] = if custom.is_empty() { BUILTIN } else { &custom };
        list.get(day % list.len()).map(|q| (*q).to_string())
    }
}

/// Never supplies a quote.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoQuote;

impl QuoteSource for NoQuote {
    fn fetch(&mut self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rotates_by_day() {
        let first = BuiltinQuotes::for_day(Vec::new(), 0).fetch();
        let next = BuiltinQuotes::for_day(Vec::new(), 1).fetch();
        let wrapped = BuiltinQuotes::for_day(Vec::new(), 10).fetch();

        assert_eq!(first.as_deref(), Some(BUILTIN[0]));
        assert_eq!(next.as_deref(), Some(BUILTIN[1]));
        assert_eq!(wrapped, first);
    }

    #[test]
    fn test_custom_quotes_win() {
        let custom = vec!["  ".to_string(), "Ship it.".to_string()];
        let mut quotes = BuiltinQuotes::for_day(custom, 42);
        assert_eq!(quotes.fetch().as_deref(), Some("Ship it."));
    }

    #[test]
    fn test_no_quote() {
        assert!(NoQuote.fetch().is_none());
    }
}
