//! Response Parser — extracts per-field answers from the model's free-text
//! reply and validates them against the request's field list.
//!
//! The reply sub-protocol is a repeated two-line marker pattern:
//!
//! ```text
//! FIELD_ID: <integer>
//! RESPONSE: <one or more lines of free text>
//! ```
//!
//! One occurrence's payload ends where the next `FIELD_ID:` marker begins,
//! or at end of input for the last occurrence. Keyword match is
//! case-sensitive; whitespace around the colons and the newline is
//! tolerated. There is no escaping on either side of the protocol, so a
//! payload containing a literal `FIELD_ID:` marker line desynchronizes the
//! scan; known limitation, not mitigated.
//!
//! Parsing never fails: malformed or unknown occurrences degrade to "no
//! response for that occurrence" and the caller receives whatever was
//! accepted, in reply order.

use std::collections::HashSet;

use regex::Regex;
use tracing::warn;

use crate::models::request::FormField;
use crate::models::response::{FieldResponse, GenerationResult};

/// Marker pattern for one occurrence. The payload is everything after the
/// match, up to the next match or end of input — sliced by offset rather
/// than captured, since the regex crate has no lookahead.
const OCCURRENCE_PATTERN: &str = r"FIELD_ID:\s*(\d+)\s*\n\s*RESPONSE:";

/// A recoverable problem found while scanning the reply. Carried alongside
/// the accepted responses so callers can surface partial-parse diagnostics
/// instead of relying on log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// The text in id position matched digits but does not fit an i64.
    MalformedFieldId { raw: String },
}

/// Accepted responses plus soft warnings from one scan of a model reply.
#[derive(Debug, Clone)]
pub struct ParsedReply {
    pub responses: Vec<FieldResponse>,
    pub warnings: Vec<ParseWarning>,
}

/// Parses a raw model reply against the request's known field set and
/// assembles the final result. Never fails; an unusable reply yields an
/// empty response list.
pub fn parse_generation_reply(raw_text: &str, known_fields: &[FormField]) -> GenerationResult {
    let parsed = scan_reply(raw_text, known_fields);
    for warning in &parsed.warnings {
        match warning {
            ParseWarning::MalformedFieldId { raw } => {
                warn!("Dropping reply occurrence with malformed field id: {raw:?}");
            }
        }
    }
    GenerationResult::from_responses(parsed.responses)
}

/// Scans the reply for `FIELD_ID`/`RESPONSE` occurrences.
///
/// Occurrences whose id is not in `known_fields` are dropped silently —
/// models routinely hallucinate extra ids, so this is expected traffic, not
/// a diagnostic. Duplicate known ids are all kept, in reply order; deduping
/// is the consumer's call.
pub fn scan_reply(raw_text: &str, known_fields: &[FormField]) -> ParsedReply {
    let marker = Regex::new(OCCURRENCE_PATTERN).expect("occurrence pattern is valid");
    let known_ids: HashSet<i64> = known_fields.iter().map(|f| f.id).collect();

    let mut responses = Vec::new();
    let mut warnings = Vec::new();

    let matches: Vec<_> = marker.captures_iter(raw_text).collect();
    for (index, captures) in matches.iter().enumerate() {
        let raw_id = &captures[1];
        let Ok(field_id) = raw_id.parse::<i64>() else {
            warnings.push(ParseWarning::MalformedFieldId {
                raw: raw_id.to_string(),
            });
            continue;
        };

        if !known_ids.contains(&field_id) {
            continue;
        }

        let payload_start = captures.get(0).expect("match 0 always present").end();
        let payload_end = matches
            .get(index + 1)
            .map(|next| next.get(0).expect("match 0 always present").start())
            .unwrap_or(raw_text.len());

        responses.push(FieldResponse {
            field_id,
            field_value: raw_text[payload_start..payload_end].trim().to_string(),
        });
    }

    ParsedReply {
        responses,
        warnings,
    }
}
