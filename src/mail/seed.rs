//! Seed fixture: the fixed dataset and signed-in identity loaded once at
//! session start. The store treats this as an external collaborator that
//! hands it well-formed entities; nothing here is re-read later.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::types::{Identity, Message};

const SEED_JSON: &str = include_str!("../../fixtures/seed.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub user: Identity,
    /// The session's frozen logical time; used for every send/save and for
    /// relative time labels in place of the wall clock.
    pub now: DateTime<Utc>,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub drafts: Vec<Message>,
}

impl Seed {
    pub fn load() -> Result<Self> {
        Self::parse(SEED_JSON)
    }

    fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("malformed seed fixture")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::types::Folder;
    use std::collections::HashSet;

    #[test]
    fn bundled_fixture_parses() {
        let seed = Seed::load().unwrap();
        assert_eq!(seed.user.email, "me@matrices.ai");
        assert_eq!(seed.messages.len(), 5);
        assert_eq!(seed.drafts.len(), 1);
    }

    #[test]
    fn fixture_ids_are_unique_per_collection() {
        let seed = Seed::load().unwrap();
        let ids: HashSet<_> = seed.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), seed.messages.len());
        let draft_ids: HashSet<_> = seed.drafts.iter().map(|d| d.id).collect();
        assert_eq!(draft_ids.len(), seed.drafts.len());
    }

    #[test]
    fn fixture_drafts_carry_the_draft_invariants() {
        let seed = Seed::load().unwrap();
        for draft in &seed.drafts {
            assert_eq!(draft.folder, Folder::Drafts);
            assert!(draft.is_read);
        }
        assert!(seed.messages.iter().all(|m| m.folder != Folder::Drafts));
    }

    #[test]
    fn parse_error_is_reported_not_panicked() {
        assert!(Seed::parse("{ not json").is_err());
    }
}
