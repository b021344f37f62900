//! Likes and follows built on membership toggling.

use crate::relation::{RelationError, RelationshipSet};

/// Result of a like toggle, as reported back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeOutcome {
    /// Like count after the toggle.
    pub likes: usize,
    /// Whether the actor likes the entity now.
    pub is_liked: bool,
}

/// Toggles `actor` in the likes of an article, comment or study record.
///
/// # Errors
///
/// Returns `RelationError::EmptyActor` for an empty identifier
pub fn toggle_like(
    likes: &RelationshipSet,
    actor: &str,
) -> Result<(RelationshipSet, LikeOutcome), RelationError> {
    let (next, added) = likes.toggle(actor)?;
    let outcome = LikeOutcome {
        likes: next.len(),
        is_liked: added,
    };
    Ok((next, outcome))
}

/// Sums like counts, used for per-user statistics.
pub fn total_likes<'a>(sets: impl IntoIterator<Item = &'a RelationshipSet>) -> usize {
    sets.into_iter().map(RelationshipSet::len).sum()
}

/// Follow relationships of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub followers: RelationshipSet,
    pub following: RelationshipSet,
}

impl Profile {
    /// Creates profile with no followers and following nobody.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            followers: RelationshipSet::new(),
            following: RelationshipSet::new(),
        }
    }
}

/// Result of a follow toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowOutcome {
    /// Whether the actor follows the target now.
    pub followed: bool,
    /// Follower count of the target after the toggle.
    pub followers_count: usize,
    /// Following count of the actor after the toggle.
    pub following_count: usize,
}

impl FollowOutcome {
    pub fn message(&self) -> &'static str {
        if self.followed { "Followed" } else { "Unfollowed" }
    }
}

/// Toggles "`actor` follows `target`" on both profiles.
///
/// The decision is taken on `actor.following` and the same decision is
/// applied to `target.followers`. Both new sets are computed before either
/// profile is modified, so on error neither profile changes.
///
/// # Errors
///
/// Returns `RelationError::SelfFollow` when both profiles share an id, and
/// `RelationError::EmptyActor` when either id is empty
pub fn toggle_follow(
    actor: &mut Profile,
    target: &mut Profile,
) -> Result<FollowOutcome, RelationError> {
    if actor.id == target.id {
        return Err(RelationError::SelfFollow(actor.id.clone()));
    }

    let (following, followed) = actor.following.toggle(&target.id)?;
    let followers = target.followers.with_membership(&actor.id, followed)?;

    actor.following = following;
    target.followers = followers;

    Ok(FollowOutcome {
        followed,
        followers_count: target.followers.len(),
        following_count: actor.following.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like_reports_count_and_state() {
        // Arrange
        let likes = RelationshipSet::from_members(["u2"]);

        // Act
        let (likes, liked) = toggle_like(&likes, "u1").expect("like");
        let (likes, unliked) = toggle_like(&likes, "u1").expect("unlike");

        // Assert
        assert_eq!(
            liked,
            LikeOutcome {
                likes: 2,
                is_liked: true
            }
        );
        assert_eq!(
            unliked,
            LikeOutcome {
                likes: 1,
                is_liked: false
            }
        );
        assert!(!likes.contains("u1"));
    }

    #[test]
    fn test_toggle_like_rejects_empty_actor() {
        // Arrange & Act
        let result = toggle_like(&RelationshipSet::new(), "");

        // Assert
        assert_eq!(result.unwrap_err(), RelationError::EmptyActor);
    }

    #[test]
    fn test_total_likes() {
        // Arrange
        let sets = [
            RelationshipSet::from_members(["a", "b"]),
            RelationshipSet::new(),
            RelationshipSet::from_members(["c"]),
        ];

        // Act & Assert
        assert_eq!(total_likes(&sets), 3);
        assert_eq!(total_likes(std::iter::empty()), 0);
    }

    #[test]
    fn test_follow_is_symmetric() {
        // Arrange
        let mut u1 = Profile::new("u1");
        let mut u2 = Profile::new("u2");

        // Act
        let outcome = toggle_follow(&mut u1, &mut u2).expect("follow");

        // Assert
        assert!(outcome.followed);
        assert_eq!(outcome.message(), "Followed");
        assert!(u2.followers.contains("u1"));
        assert!(u1.following.contains("u2"));
        assert_eq!(outcome.followers_count, 1);
        assert_eq!(outcome.following_count, 1);
        assert!(u1.followers.is_empty() && u2.following.is_empty());
    }

    #[test]
    fn test_unfollow_removes_both_sides() {
        // Arrange
        let mut u1 = Profile::new("u1");
        let mut u2 = Profile::new("u2");
        toggle_follow(&mut u1, &mut u2).expect("follow");

        // Act
        let outcome = toggle_follow(&mut u1, &mut u2).expect("unfollow");

        // Assert
        assert!(!outcome.followed);
        assert_eq!(outcome.message(), "Unfollowed");
        assert!(!u2.followers.contains("u1"));
        assert!(!u1.following.contains("u2"));
        assert_eq!(outcome.followers_count, 0);
        assert_eq!(outcome.following_count, 0);
    }

    #[test]
    fn test_follow_repairs_drifted_sides() {
        // Arrange: target already lists the actor as follower
        let mut u1 = Profile::new("u1");
        let mut u2 = Profile::new("u2");
        u2.followers = RelationshipSet::from_members(["u1", "u3"]);

        // Act
        let outcome = toggle_follow(&mut u1, &mut u2).expect("follow");

        // Assert
        assert!(outcome.followed);
        assert_eq!(u2.followers.len(), 2, "No duplicate follower entry");
        assert!(u1.following.contains("u2"));
    }

    #[test]
    fn test_self_follow_rejected_without_changes() {
        // Arrange
        let mut u1 = Profile::new("u1");
        let mut same = Profile::new("u1");

        // Act
        let result = toggle_follow(&mut u1, &mut same);

        // Assert
        assert_eq!(result, Err(RelationError::SelfFollow("u1".to_string())));
        assert!(result.unwrap_err().is_invalid_argument());
        assert!(u1.following.is_empty());
        assert!(same.followers.is_empty());
    }

    #[test]
    fn test_empty_actor_id_leaves_profiles_untouched() {
        // Arrange
        let mut anonymous = Profile::new("");
        let mut u2 = Profile::new("u2");

        // Act
        let result = toggle_follow(&mut anonymous, &mut u2);

        // Assert
        assert_eq!(result, Err(RelationError::EmptyActor));
        assert!(anonymous.following.is_empty(), "Actor side must not change");
        assert!(u2.followers.is_empty());
    }
}
