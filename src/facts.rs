// SPDX-License-Identifier: MPL-2.0
//! "Did You Know?" space facts shown once per launch.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const SPACE_FACTS: [&str; 10] = [
    "The Sun is over 100 times wider than Earth.",
    "Jupiter could fit all other planets inside it.",
    "A day on Venus is longer than its year.",
    "Neutron stars can spin hundreds of times per second.",
    "Saturn’s rings are mostly ice and rock.",
    "Light from the Sun takes about 8 minutes to reach Earth.",
    "Mars has the largest volcano in the solar system (Olympus Mons).",
    "The Milky Way has over 100 billion stars.",
    "Spacesuits cost more than $10 million each.",
    "Some stars are so dense a teaspoon would weigh tons.",
];

/// Picks one fact uniformly at random.
pub fn random_fact<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SPACE_FACTS.choose(rng).copied().unwrap_or(SPACE_FACTS[0])
}
