//! Claim extraction from the narrative document.

use std::sync::LazyLock;

use regex::Regex;

/// A `waves/<name>.txt` citation with no embedded whitespace.
static WAVE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"waves/[\w\-]+\.txt").expect("wave reference pattern is valid"));

/// One bullet-point line of the narrative document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    /// The bullet text without the leading `- `.
    pub text: String,
    /// Cited waveform files, in order of appearance, duplicates kept.
    pub refs: Vec<String>,
}

impl Claim {
    /// Whether the claim cites at least one waveform.
    pub fn has_evidence(&self) -> bool {
        !self.refs.is_empty()
    }
}

/// Extracts every line whose trimmed form starts with `- ` as a claim.
pub fn extract_claims(document: &str) -> Vec<Claim> {
    document
        .lines()
        .filter_map(|line| {
            let text = line.trim().strip_prefix("- ")?;
            Some(Claim {
                text: text.to_string(),
                refs: WAVE_REF
                    .find_iter(line)
                    .map(|m| m.as_str().to_string())
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_become_claims() {
        let doc = "\
# Counter

Some prose that is not a claim.
- Reset clears count (waves/reset.txt)
  - Nested bullet counts too
-not a bullet
* neither is this
";
        let claims = extract_claims(doc);
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].text, "Reset clears count (waves/reset.txt)");
        assert_eq!(claims[0].refs, vec!["waves/reset.txt"]);
        assert_eq!(claims[1].text, "Nested bullet counts too");
        assert!(!claims[1].has_evidence());
    }

    #[test]
    fn refs_keep_order_and_duplicates() {
        let claims =
            extract_claims("- wraps: see waves/wrap_8bit.txt, waves/a-b.txt and waves/wrap_8bit.txt");
        assert_eq!(
            claims[0].refs,
            vec!["waves/wrap_8bit.txt", "waves/a-b.txt", "waves/wrap_8bit.txt"]
        );
    }

    #[test]
    fn refs_need_the_waves_prefix_and_txt_suffix() {
        let claims = extract_claims("- see wave/x.txt, waves/y.vcd and waves/sub/z.txt");
        assert!(claims[0].refs.is_empty());
    }

    #[test]
    fn empty_document_has_no_claims() {
        assert!(extract_claims("").is_empty());
    }
}
