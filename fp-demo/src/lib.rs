//! Demonstration driver for the list algebra and the naturals stream.
//!
//! [`run`] writes the transcript: a sample list, its doubling by `append`,
//! both sums, both `map` formulations, then a prefix of `naturals`.

use std::io::{self, Write};

use fp_common::list::{add_to_front, append, empty, map, map_direct, sum};
use fp_streams::corecursion::naturals;
use tracing::debug;

pub mod config;

pub use config::{ConfigError, DemoConfig};

/// Writes the demo transcript to `out`, one result per line.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> io::Result<()> {
    let l = add_to_front(6, add_to_front(5, add_to_front(3, empty())));
    debug!(len = l.len(), "built sample list");

    writeln!(out, "{l}")?;
    writeln!(out, "{}", append(l.clone(), l.clone()))?;
    writeln!(out, "{}", sum(l.clone()))?;
    writeln!(out, "{}", sum(append(l.clone(), l.clone())))?;
    writeln!(out, "{}", map_direct(|i| format!("+{i}"), l.clone()))?;
    writeln!(out, "{}", map(|i| format!("+{i}"), l))?;

    // Same layout as a `List` rendering, which is quadratic in length.
    for n in naturals().prefix(config.prefix_len) {
        write!(out, "{n} ")?;
    }
    writeln!(out)?;

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_PREFIX_LEN;
    use expect_test::expect;

    fn transcript(config: &DemoConfig) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Quote each line so trailing spaces stay visible.
        text.lines().map(|line| format!("{line:?}\n")).collect()
    }

    #[test]
    fn test_default_transcript() {
        expect![[r#"
            "6 5 3 "
            "6 5 3 6 5 3 "
            "14"
            "28"
            "+6 +5 +3 "
            "+6 +5 +3 "
            "0 1 2 "
        "#]]
        .assert_eq(&transcript(&DemoConfig::default()));
    }

    #[test]
    fn test_prefix_length_is_configurable() {
        let text = transcript(&DemoConfig { prefix_len: 6 });
        assert_eq!(text.lines().last(), Some(r#""0 1 2 3 4 5 ""#));

        let text = transcript(&DemoConfig { prefix_len: 0 });
        assert_eq!(text.lines().last(), Some(r#""""#));
    }

    #[test]
    fn test_largest_accepted_prefix_is_printed() {
        let config = DemoConfig {
            prefix_len: MAX_PREFIX_LEN,
        };
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        assert_eq!(last.split_whitespace().count(), MAX_PREFIX_LEN);
        assert!(last.starts_with("0 1 2 "));
        assert!(last.ends_with("999998 999999 "));
    }
}
