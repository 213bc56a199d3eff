use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::collect::IdentifierSet;

/// Prefix shared by every surrogate token.
pub const TOKEN_PREFIX: &str = "WID_";

const TOKEN_HEX_LEN: usize = 8;

/// Derive the surrogate token for one identifier: the prefix plus the
/// first 8 hex characters of a SHA-256 digest of the identifier string.
///
/// A pure function of the identifier value: same input, same token, in
/// any run and at any position. Not reversible.
pub fn surrogate_token(identifier: &str) -> String {
    let digest = Sha256::digest(identifier.as_bytes());
    let encoded = hex::encode(digest);
    format!("{TOKEN_PREFIX}{}", &encoded[..TOKEN_HEX_LEN])
}

/// Immutable identifier -> surrogate mapping.
///
/// Only constructible by consuming a closed [`IdentifierSet`], so no
/// masking can consult the map before collection has finished across
/// all sheets.
#[derive(Debug)]
pub struct PseudonymMap {
    tokens: BTreeMap<String, String>,
}

impl PseudonymMap {
    pub fn from_identifiers(set: IdentifierSet) -> Self {
        let mut tokens = BTreeMap::new();
        for identifier in set.into_sorted() {
            let token = surrogate_token(&identifier);
            tokens.insert(identifier, token);
        }
        Self { tokens }
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.tokens.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
