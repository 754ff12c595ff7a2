pub mod models;

use std::collections::HashMap;

use crate::utils::Sequence;
use models::{Member, MemberId, NewMember};

/// Registered members in insertion order.
#[derive(Debug, Default)]
pub struct MemberRoster {
    members: Vec<Member>,
    index: HashMap<String, usize>,
    ids: Sequence,
}

impl MemberRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, request: NewMember) -> &Member {
        let id = MemberId::from(self.ids.advance());
        let position = self.members.len();
        self.index.insert(id.as_str().to_string(), position);
        self.members.push(Member::new(id, request));
        &self.members[position]
    }

    pub fn get(&self, id: &str) -> Option<&Member> {
        self.index.get(id).and_then(|&i| self.members.get(i))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_get_their_own_sequence() {
        let mut roster = MemberRoster::new();
        let ada = roster.add(NewMember::new("Ada", "1 Main St", "555-0100")).id.clone();
        let bob = roster.add(NewMember::new("Bob", "2 Main St", "555-0101")).id.clone();

        assert_eq!(ada.as_str(), "1");
        assert_eq!(bob.as_str(), "2");
        assert!(roster.contains("2"));
        assert!(!roster.contains("3"));
    }

    #[test]
    fn display_matches_listing_format() {
        let mut roster = MemberRoster::new();
        roster.add(NewMember::new("Ada", "1 Main St", "555-0100"));

        let listed: Vec<_> = roster.iter().map(ToString::to_string).collect();
        assert_eq!(listed, ["ID: 1, Name: Ada, Address: 1 Main St, Phone: 555-0100"]);
    }
}
