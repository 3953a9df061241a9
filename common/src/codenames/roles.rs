use std::collections::HashSet;

use crate::PlayerId;
use crate::errors::InsufficientPlayersError;
use crate::session_rng::RandomSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleAssignment {
    pub spymaster: PlayerId,
    pub guessers: Vec<PlayerId>,
}

pub fn assign_spymaster<R: RandomSource>(
    players: &[PlayerId],
    rng: &mut R,
) -> Result<RoleAssignment, InsufficientPlayersError> {
    let mut seen = HashSet::new();
    let roster: Vec<&PlayerId> = players.iter().filter(|p| seen.insert(*p)).collect();

    if roster.is_empty() {
        return Err(InsufficientPlayersError);
    }

    let spymaster = roster[rng.uniform_index(roster.len())].clone();
    let guessers = roster
        .into_iter()
        .filter(|p| **p != spymaster)
        .cloned()
        .collect();

    Ok(RoleAssignment { spymaster, guessers })
}
