//! Cookie and GDPR consent banner classification.
//!
//! Scraped pages often carry consent banners whose text and buttons look like
//! product content. The classifier works on any document model that can
//! implement [`ConsentNode`]; no HTML parser is bundled.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    static ref CONSENT_TEXT: Regex = Regex::new(concat!(
        r"(?i)\bcookies?\b|\bconsent\b|\bgdpr\b|\bprivacy\b|\btracking\b|\bpreferences\b|\bpersonaliz|marketing\s+cookies|",
        r"do\s+not\s+sell|opt\s+out|opt\s+in|cookie\s+policy|privacy\s+policy|",
        r"\bciasteczk(?:a|i|ami|ach|om)?\b|\bprywatn|\bzgod(?:a|y|ę|zie)?\b|\brodo\b"
    )).unwrap();

    static ref CONSENT_ACTION: Regex = Regex::new(concat!(
        r"(?i)\baccept\b|\bagree\b|\ballow\b|\bmanage\b|\bpreferences\b|\bdecline\b|\breject\b|\bok\b|\bokay\b|\bcontinue\b|save\s+preferences|",
        r"accept\s+all|allow\s+all|got\s+it|\brozumiem\b|\bzgadzam\b|\bakceptuj|\bzaakceptuj|\bodrzuc|\bodmow"
    )).unwrap();

    // Consent management platforms and their usual ids/classes
    static ref CONSENT_ATTR: Regex = Regex::new(concat!(
        r"(?i)cookie|consent|gdpr|privacy|cmp|onetrust|trustarc|cookielaw|cookiebot|osano|",
        r"quantcast|usercentrics|didomi|cookieyes|termly|iubenda|shopify-pc__banner"
    )).unwrap();
}

/// Attributes scanned for consent-platform markers.
const ATTR_KEYS: [&str; 5] = ["id", "class", "role", "aria-label", "aria-modal"];

/// Attributes that contribute to an action control's label.
const LABEL_KEYS: [&str; 3] = ["aria-label", "title", "value"];

/// Capabilities the classifier needs from a document node.
pub trait ConsentNode: Sized {
    /// Text content of the node and its descendants.
    fn text(&self) -> String;

    /// Value of a named attribute.
    fn attr(&self, name: &str) -> Option<String>;

    /// Ancestor nodes, nearest first.
    fn ancestors(&self) -> Vec<Self>;

    /// Descendant buttons, `[role=button]`, button/submit inputs and links.
    fn action_controls(&self) -> Vec<Self>;
}

/// Classifies nodes as consent banners.
#[derive(Debug, Clone)]
pub struct ConsentDetector {
    ancestor_depth: usize,
}

impl ConsentDetector {
    pub fn new() -> Self {
        Self { ancestor_depth: 3 }
    }

    /// Set how many ancestors are inspected along with the node.
    pub fn with_ancestor_depth(mut self, depth: usize) -> Self {
        self.ancestor_depth = depth;
        self
    }

    /// Whether `node` (or one of its near ancestors) is a consent banner.
    ///
    /// A consent-platform id or class is enough on its own. Consent wording
    /// only counts together with an accept/reject style control.
    pub fn is_consent_node<N: ConsentNode>(&self, node: Option<&N>) -> bool {
        let Some(node) = node else {
            return false;
        };

        let ancestors: Vec<N> = node.ancestors().into_iter().take(self.ancestor_depth).collect();
        let hits = std::iter::once(node)
            .chain(ancestors.iter())
            .fold(Hits::default(), |hits, item| hits.merge(item));

        trace!(
            "Consent hits: text={} attr={} action={}",
            hits.text, hits.attr, hits.action
        );

        hits.attr || (hits.text && hits.action)
    }
}

impl Default for ConsentDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify `node` with the default ancestor depth.
pub fn is_consent_node<N: ConsentNode>(node: Option<&N>) -> bool {
    ConsentDetector::new().is_consent_node(node)
}

#[derive(Debug, Default, Clone, Copy)]
struct Hits {
    text: bool,
    attr: bool,
    action: bool,
}

impl Hits {
    fn merge<N: ConsentNode>(self, node: &N) -> Self {
        Self {
            text: self.text || CONSENT_TEXT.is_match(&node.text()),
            attr: self.attr || CONSENT_ATTR.is_match(&attribute_text(node)),
            action: self.action || has_action_control(node),
        }
    }
}

fn attribute_text<N: ConsentNode>(node: &N) -> String {
    ATTR_KEYS
        .iter()
        .filter_map(|key| node.attr(key))
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_action_control<N: ConsentNode>(node: &N) -> bool {
    node.action_controls()
        .iter()
        .any(|control| CONSENT_ACTION.is_match(&control_label(control)))
}

fn control_label<N: ConsentNode>(control: &N) -> String {
    std::iter::once(control.text())
        .chain(LABEL_KEYS.iter().filter_map(|key| control.attr(key)))
        .collect::<Vec<_>>()
        .join(" ")
}
