//! IGC header dialect resolution
//!
//! Logger manufacturers disagree on header tag names for the same field
//! (XCTrack writes `HFPLTPILOTINCHARGE:`, SkyTraxx writes `HFPLTPILOT:`, and so
//! on). [`HEADER_DIALECTS`] lists every recognized tag in priority order; a
//! line is resolved by the first prefix it starts with.
//!
//! The table is order-sensitive. New manufacturer dialects are appended and
//! existing entries are never reordered or replaced, otherwise precedence for
//! overlapping prefixes (`HFDTEDATE:` vs `HFDTE`) silently changes.

use crate::parser::time::normalize_date;
use crate::types::{FlightField, FlightInfo};
use tracing::{debug, trace};

/// How the value is pulled out of a matching header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderValue {
    /// Text after the first `:`, trimmed
    AfterColon,
    /// `DDMMYY` after the first `:`, cut at the first `,`
    DateAfterColon,
    /// `DDMMYY` directly after the tag, no separator
    DateAfterTag,
}

/// What a recognized header tag contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRule {
    Field(FlightField, HeaderValue),
    /// Recognized but carries no metadata we keep
    Ignore,
}

/// One known header tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDialect {
    pub tag: &'static str,
    pub rule: HeaderRule,
}

/// Known header tags, checked in order
pub const HEADER_DIALECTS: &[HeaderDialect] = &[
    // XCTrack
    HeaderDialect {
        tag: "HFPLTPILOTINCHARGE:",
        rule: HeaderRule::Field(FlightField::Pilot, HeaderValue::AfterColon),
    },
    // SkyTraxx
    HeaderDialect {
        tag: "HFPLTPILOT:",
        rule: HeaderRule::Field(FlightField::Pilot, HeaderValue::AfterColon),
    },
    // Fix accuracy
    HeaderDialect {
        tag: "HFFXA",
        rule: HeaderRule::Ignore,
    },
    // XCTrack: HFDTEDATE:DDMMYY,NN
    HeaderDialect {
        tag: "HFDTEDATE:",
        rule: HeaderRule::Field(FlightField::Date, HeaderValue::DateAfterColon),
    },
    // SkyTraxx: HFDTEDDMMYY
    HeaderDialect {
        tag: "HFDTE",
        rule: HeaderRule::Field(FlightField::Date, HeaderValue::DateAfterTag),
    },
    HeaderDialect {
        tag: "HOSITSite:",
        rule: HeaderRule::Field(FlightField::Location, HeaderValue::AfterColon),
    },
    HeaderDialect {
        tag: "HFSITSITE:",
        rule: HeaderRule::Field(FlightField::Location, HeaderValue::AfterColon),
    },
    HeaderDialect {
        tag: "HFGTYGLIDERTYPE:",
        rule: HeaderRule::Field(FlightField::GliderModel, HeaderValue::AfterColon),
    },
];

/// Outcome of resolving one header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMatch {
    /// A field was written (possibly with an empty value after a bad date)
    Field(FlightField),
    /// Recognized tag with nothing to extract
    Ignored(&'static str),
    Unrecognized,
}

/// Find the first dialect entry whose tag prefixes `line`
pub fn find_dialect(line: &str) -> Option<&'static HeaderDialect> {
    HEADER_DIALECTS
        .iter()
        .find(|dialect| line.starts_with(dialect.tag))
}

fn after_colon(line: &str) -> &str {
    line.split_once(':').map(|(_, value)| value).unwrap_or("")
}

/// Extract the normalized value for `line` according to `value`
pub fn extract_header_value(line: &str, tag: &str, value: HeaderValue) -> String {
    match value {
        HeaderValue::AfterColon => after_colon(line).trim().to_string(),
        HeaderValue::DateAfterColon => {
            let raw = after_colon(line).split(',').next().unwrap_or("");
            normalize_date(raw.trim())
        }
        HeaderValue::DateAfterTag => {
            let raw = line.strip_prefix(tag).unwrap_or("");
            normalize_date(raw.trim())
        }
    }
}

/// Resolve a header line (already known to start with `H`) into `info`.
///
/// Unrecognized tags leave `info` untouched. A malformed date clears `date`
/// instead of keeping an earlier value.
pub fn resolve_header_line(line: &str, info: &mut FlightInfo) -> HeaderMatch {
    let Some(dialect) = find_dialect(line) else {
        trace!("Unrecognized header: {}", line);
        return HeaderMatch::Unrecognized;
    };

    match dialect.rule {
        HeaderRule::Ignore => {
            trace!("Ignoring header tag {}", dialect.tag);
            HeaderMatch::Ignored(dialect.tag)
        }
        HeaderRule::Field(field, value) => {
            let extracted = extract_header_value(line, dialect.tag, value);
            debug!(
                "Header {} -> {} = {:?}",
                dialect.tag,
                field.name(),
                extracted
            );
            info.set(field, extracted);
            HeaderMatch::Field(field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(lines: &[&str]) -> FlightInfo {
        let mut info = FlightInfo::default();
        for line in lines {
            resolve_header_line(line, &mut info);
        }
        info
    }

    #[test]
    fn test_pilot_dialects_agree() {
        let xctrack = resolve(&["HFPLTPILOTINCHARGE: Jane Doe "]);
        let skytraxx = resolve(&["HFPLTPILOT:Jane Doe"]);
        assert_eq!(xctrack.pilot, "Jane Doe");
        assert_eq!(xctrack.pilot, skytraxx.pilot);
    }

    #[test]
    fn test_pilot_keeps_colons_after_first() {
        let info = resolve(&["HFPLTPILOT:Dr. No: the pilot"]);
        assert_eq!(info.pilot, "Dr. No: the pilot");
    }

    #[test]
    fn test_date_with_colon_and_sequence() {
        let info = resolve(&["HFDTEDATE:010125,01"]);
        assert_eq!(info.date, "2025-01-01");
    }

    #[test]
    fn test_date_bare_tag() {
        let info = resolve(&["HFDTE150724"]);
        assert_eq!(info.date, "2024-07-15");
    }

    #[test]
    fn test_date_tags_do_not_overlap() {
        assert_eq!(
            find_dialect("HFDTEDATE:010125").map(|d| d.tag),
            Some("HFDTEDATE:")
        );
        assert_eq!(find_dialect("HFDTE010125").map(|d| d.tag), Some("HFDTE"));
    }

    #[test]
    fn test_bad_date_clears_previous_value() {
        let info = resolve(&["HFDTE010125", "HFDTEDATE:notadate"]);
        assert_eq!(info.date, "");
    }

    #[test]
    fn test_four_digit_year_is_rejected() {
        let info = resolve(&["HFDTE01012025"]);
        assert_eq!(info.date, "");
    }

    #[test]
    fn test_location_dialects() {
        assert_eq!(resolve(&["HOSITSite:Monte Grappa"]).location, "Monte Grappa");
        assert_eq!(resolve(&["HFSITSITE:Bassano"]).location, "Bassano");
    }

    #[test]
    fn test_glider_type() {
        let info = resolve(&["HFGTYGLIDERTYPE: Advance Sigma 11"]);
        assert_eq!(info.glider_model, "Advance Sigma 11");
    }

    #[test]
    fn test_later_line_overwrites_field() {
        let info = resolve(&["HFPLTPILOT:First", "HFPLTPILOTINCHARGE:Second"]);
        assert_eq!(info.pilot, "Second");
    }

    #[test]
    fn test_fix_accuracy_is_ignored() {
        let mut info = FlightInfo::default();
        assert_eq!(
            resolve_header_line("HFFXA035", &mut info),
            HeaderMatch::Ignored("HFFXA")
        );
        assert!(info.is_empty());
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let mut info = FlightInfo::default();
        assert_eq!(
            resolve_header_line("HFFTYFRTYPE:XCTrack,Phone", &mut info),
            HeaderMatch::Unrecognized
        );
        assert_eq!(
            resolve_header_line("HOSITSITE:uppercase is another dialect", &mut info),
            HeaderMatch::Unrecognized
        );
        assert!(info.is_empty());
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let info = resolve(&["hfpltpilot:Jane", "HFPltPilot:Jane"]);
        assert_eq!(info.pilot, "");
    }
}
