//! Tolerant extraction of DKG results from party output.
//!
//! Parties report results as loosely structured text: a status blob
//! carrying the group key as `Point(x: <hex>, y: <hex>)`, or an HTML
//! fragment with a labeled connection time, a labeled x-share, and a
//! `<pre>` block holding the PEM-encoded key. The producer is free to
//! wrap values across lines, so every pattern tolerates whitespace and
//! newlines between label, field names, and values.
//!
//! Matching is leftmost-first for every pattern: when a text contains
//! more than one candidate, the first occurrence wins.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// No `Point(x: …, y: …)` occurrence anywhere in the text.
    #[error("no public key coordinates found in output")]
    PublicKeyNotFound,

    /// The HTML fragment carried no `<pre>` key block.
    #[error("no PEM key block found in output")]
    PemBlockNotFound,
}

// ============================================================================
// COORDINATE EXTRACTION
// ============================================================================

fn point_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Point\s*\(\s*x\s*:\s*([0-9a-fA-F]+)\s*,\s*y\s*:\s*([0-9a-fA-F]+)\s*\)")
            .expect("point pattern is valid")
    })
}

/// Extract the first `Point(x: …, y: …)` coordinate pair from `text`.
///
/// The captured hex runs are returned verbatim — no case or length
/// normalization happens here; validation is the deriver's job.
pub fn extract_coordinates(text: &str) -> Result<(String, String), ExtractError> {
    let caps = point_re()
        .captures(text)
        .ok_or(ExtractError::PublicKeyNotFound)?;
    Ok((caps[1].to_string(), caps[2].to_string()))
}

// ============================================================================
// HTML RESULT FIELDS
// ============================================================================

/// Auxiliary fields a party's HTML result page may carry.
///
/// Every field is optional: which ones appear depends on the party that
/// produced the page, so a missing marker is simply `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DkgFields {
    /// Elapsed time reported next to `Connection Time:`.
    pub connection_time: Option<String>,
    /// The party's share value reported next to `X-Share:`.
    pub x_share: Option<String>,
    /// Body of the first `<pre>` block (the PEM-encoded group key).
    pub pem_key: Option<String>,
}

impl DkgFields {
    /// The PEM key block, or `PemBlockNotFound` when the page omitted it.
    ///
    /// Callers that only want timing/share data can read `pem_key`
    /// directly; callers that need the key go through here so the
    /// absence is a named error rather than a silent `None`.
    pub fn require_pem_key(&self) -> Result<&str, ExtractError> {
        self.pem_key.as_deref().ok_or(ExtractError::PemBlockNotFound)
    }
}

fn connection_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Connection Time:</strong>\s*([^<]+)").expect("time pattern is valid")
    })
}

fn x_share_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"X-Share:</strong>\s*([^<]+)").expect("share pattern is valid"))
}

fn pre_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<pre[^>]*>([\s\S]*?)</pre>").expect("pre pattern is valid"))
}

/// Extract the optional result fields from a party's HTML fragment.
///
/// Each marker is matched independently (leftmost occurrence); a marker
/// that never appears leaves its field `None`.
pub fn extract_dkg_fields(html: &str) -> DkgFields {
    let mut fields = DkgFields::default();

    if let Some(caps) = connection_time_re().captures(html) {
        fields.connection_time = Some(caps[1].trim().to_string());
    }

    if let Some(caps) = x_share_re().captures(html) {
        fields.x_share = Some(caps[1].trim().to_string());
    }

    if let Some(caps) = pre_block_re().captures(html) {
        fields.pem_key = Some(caps[1].trim().to_string());
    }

    fields
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const X: &str = "3a9bedc74e4ed202c28f8df9bd14df6f0e97c08f380b35b03724d00feceae839";
    const Y: &str = "e00475c5827682177a3fa3eec9e95f105f26fdeb17fc66521216bf6de920a74a";

    #[test]
    fn extracts_from_status_blob() {
        let text = format!(
            "✅ DKG completed successfully!\n\n\
             Public Key: Point(x: {}, y: {})\n\n\
             Key Shares:\n- Party 0: x_i = Scalar(6410fce8a3c2dee4)\n",
            X, Y
        );

        let (x, y) = extract_coordinates(&text).unwrap();
        assert_eq!(x, X);
        assert_eq!(y, Y);
    }

    #[test]
    fn tolerates_wrapped_lines() {
        // Producers wrap the point across lines and indent the y field.
        let text = format!("Public Key: Point(x: {},\n                  y: {})", X, Y);
        let (x, y) = extract_coordinates(&text).unwrap();
        assert_eq!(x, X);
        assert_eq!(y, Y);
    }

    #[test]
    fn captures_verbatim() {
        // Mixed case comes back exactly as written, unnormalized.
        let mixed_x = "AbCd".repeat(16);
        let mixed_y = "0123".repeat(16);
        let text = format!("Point(x: {}, y: {})", mixed_x, mixed_y);

        let (x, y) = extract_coordinates(&text).unwrap();
        assert_eq!(x, mixed_x);
        assert_eq!(y, mixed_y);
    }

    #[test]
    fn first_match_wins() {
        let text = format!(
            "Point(x: {}, y: {}) and later Point(x: {}, y: {})",
            X,
            Y,
            "a".repeat(64),
            "b".repeat(64)
        );

        let (x, y) = extract_coordinates(&text).unwrap();
        assert_eq!(x, X);
        assert_eq!(y, Y);
    }

    #[test]
    fn missing_point_is_an_error() {
        let err = extract_coordinates("DKG failed: no quorum").unwrap_err();
        assert_eq!(err, ExtractError::PublicKeyNotFound);
    }

    #[test]
    fn extracts_all_html_fields() {
        let html = "<div>\n\
                    <p><strong>Connection Time:</strong> 1.27s</p>\n\
                    <p><strong>X-Share:</strong> 6410fce8a3c2dee4</p>\n\
                    <pre class=\"key\">-----BEGIN PUBLIC KEY-----\n\
                    MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE\n\
                    -----END PUBLIC KEY-----</pre>\n\
                    </div>";

        let fields = extract_dkg_fields(html);
        assert_eq!(fields.connection_time.as_deref(), Some("1.27s"));
        assert_eq!(fields.x_share.as_deref(), Some("6410fce8a3c2dee4"));

        let pem = fields.require_pem_key().unwrap();
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----"));
        assert!(pem.ends_with("-----END PUBLIC KEY-----"));
    }

    #[test]
    fn missing_markers_stay_absent() {
        let html = "<p><strong>X-Share:</strong> 6410fce8</p>";

        let fields = extract_dkg_fields(html);
        assert_eq!(fields.connection_time, None);
        assert_eq!(fields.x_share.as_deref(), Some("6410fce8"));
        assert_eq!(fields.pem_key, None);
    }

    #[test]
    fn missing_pem_is_a_named_error() {
        let fields = extract_dkg_fields("<p>no key here</p>");
        assert_eq!(
            fields.require_pem_key().unwrap_err(),
            ExtractError::PemBlockNotFound
        );
    }

    #[test]
    fn empty_input_yields_empty_fields() {
        assert_eq!(extract_dkg_fields(""), DkgFields::default());
    }
}
