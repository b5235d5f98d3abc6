//! The permissibility predicate: may two teams meet in the next round?

use crate::team::Team;
use crate::types::TeamId;

/// Anything that knows its own id and which teams it may not face.
pub trait Pairable {
    fn team_id(&self) -> TeamId;

    /// Whether a match against `other` is allowed from this side.
    fn can_hit(&self, other: TeamId) -> bool;
}

impl Pairable for Team {
    fn team_id(&self) -> TeamId {
        self.id()
    }

    fn can_hit(&self, other: TeamId) -> bool {
        Team::can_hit(self, other)
    }
}

/// True iff neither team has the other in its program or its history.
///
/// # Panics
/// If the two teams disagree. Programs are linked symmetrically and ballots
/// land in both histories, so disagreement is a bookkeeping bug.
pub fn is_permitted<T: Pairable + ?Sized>(a: &T, b: &T) -> bool {
    let forward = a.can_hit(b.team_id());
    let backward = b.can_hit(a.team_id());
    assert_eq!(
        forward,
        backward,
        "teams {} and {} disagree about their permissibility",
        a.team_id(),
        b.team_id()
    );
    forward
}
