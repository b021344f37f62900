//! Membership toggling for likes and follows.
//!
//! A membership set records which actors performed a toggle-able action on
//! an entity. The functions here are pure: they take a snapshot of the
//! members and return the new membership without touching storage.

use thiserror::Error;

/// Errors raised by relationship operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// Actor identifier was empty or whitespace.
    #[error("actor identifier must not be empty")]
    EmptyActor,
    /// Actor tried to follow themselves.
    #[error("cannot follow yourself: {0}")]
    SelfFollow(String),
}

impl RelationError {
    /// Returns true when the error stems from caller input rather than state.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::EmptyActor | Self::SelfFollow(_))
    }
}

/// Flips `actor` in `members`.
///
/// Removes every occurrence of `actor` when present, otherwise appends it.
///
/// # Arguments
///
/// * `members`: Current membership snapshot, may be empty
/// * `actor`: Identifier of the acting user
///
/// # Returns
///
/// New membership and whether `actor` was added
///
/// # Errors
///
/// Returns `RelationError::EmptyActor` for an empty identifier
pub fn toggle(members: &[String], actor: &str) -> Result<(Vec<String>, bool), RelationError> {
    validate_actor(actor)?;

    if members.iter().any(|member| member == actor) {
        let remaining = members
            .iter()
            .filter(|member| *member != actor)
            .cloned()
            .collect();
        Ok((remaining, false))
    } else {
        let mut extended = members.to_vec();
        extended.push(actor.to_string());
        Ok((extended, true))
    }
}

fn validate_actor(actor: &str) -> Result<(), RelationError> {
    if actor.trim().is_empty() {
        return Err(RelationError::EmptyActor);
    }
    Ok(())
}

/// Ordered, duplicate free set of actor identifiers.
///
/// Insertion order is kept for display but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipSet {
    members: Vec<String>,
}

impl RelationshipSet {
    /// Creates empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds set from stored identifiers, dropping duplicates and empty ids.
    ///
    /// The first occurrence of each identifier wins.
    pub fn from_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for member in members {
            let member = member.into();
            if !member.trim().is_empty() && !set.contains(&member) {
                set.members.push(member);
            }
        }
        set
    }

    pub fn contains(&self, actor: &str) -> bool {
        self.members.iter().any(|member| member == actor)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.members
    }

    /// Returns set with `actor` flipped and whether it was added.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::EmptyActor` for an empty identifier
    pub fn toggle(&self, actor: &str) -> Result<(Self, bool), RelationError> {
        let (members, added) = toggle(&self.members, actor)?;
        Ok((Self { members }, added))
    }

    /// Returns set with `actor` present or absent as requested.
    ///
    /// Used to apply a decision already taken on another set, so both
    /// sides of a relationship end in the same state even if they had
    /// drifted apart.
    ///
    /// # Errors
    ///
    /// Returns `RelationError::EmptyActor` for an empty identifier
    pub fn with_membership(&self, actor: &str, present: bool) -> Result<Self, RelationError> {
        if self.contains(actor) == present {
            validate_actor(actor)?;
            return Ok(self.clone());
        }
        let (members, _) = toggle(&self.members, actor)?;
        Ok(Self { members })
    }
}

impl<'a> IntoIterator for &'a RelationshipSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
