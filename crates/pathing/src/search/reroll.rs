//! Reroll allocation for a single step.
//!
//! A step may require up to three checks. For every subset of usable skills and
//! every number of pool rerolls the step could spend, this module produces the
//! best way of assigning them. Pool rerolls always go to the lowest remaining
//! probabilities first: rerolling `p` multiplies it by `2 - p`, which is
//! largest for the smallest `p`.

use arrayvec::ArrayVec;
use board_core::{BoardConfig, CheckKind, Probability, Skills};

use crate::result::{RerollSource, RolledCheck, StepChecks};

const MAX_SKILL_SUBSETS: usize = 1 << BoardConfig::MAX_CHECKS_PER_STEP;
const MAX_ALLOCATIONS: usize = MAX_SKILL_SUBSETS * (BoardConfig::MAX_CHECKS_PER_STEP + 1);

/// One way of resolving a step's checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Allocation {
    pub probability: Probability,
    pub rerolls: u8,
    pub skills: Skills,
    pub checks: StepChecks,
}

pub(crate) type Allocations = ArrayVec<Allocation, MAX_ALLOCATIONS>;

/// Enumerates reroll allocations for checks priced at table probability.
///
/// `rerolls_left` bounds pool spending and `skills_left` lists skills not yet
/// used on the path. Allocations whose probability is zero are omitted.
pub(crate) fn allocate(
    priced: &[(CheckKind, Probability)],
    rerolls_left: u8,
    skills_left: Skills,
) -> Allocations {
    let mut allocations = Allocations::new();

    // Only checks that can fail and can still pass benefit from a retry.
    let rerollable =
        |probability: Probability| !probability.is_certain() && !probability.is_impossible();

    let usable_skills = priced
        .iter()
        .filter(|(kind, probability)| {
            rerollable(*probability) && skills_left.contains(kind.skill())
        })
        .fold(Skills::empty(), |acc, (kind, _)| acc | kind.skill());

    for skills in subsets(usable_skills) {
        let mut checks: StepChecks = priced
            .iter()
            .map(|(kind, probability)| RolledCheck {
                kind: *kind,
                probability: *probability,
                reroll: skills.contains(kind.skill()).then_some(RerollSource::Skill),
            })
            .collect();

        let mut pool_order: ArrayVec<usize, { BoardConfig::MAX_CHECKS_PER_STEP }> = checks
            .iter()
            .enumerate()
            .filter(|(_, check)| check.reroll.is_none() && rerollable(check.probability))
            .map(|(index, _)| index)
            .collect();
        pool_order.sort_by(|a, b| {
            checks[*a]
                .probability
                .cmp(&checks[*b].probability)
                .then(a.cmp(b))
        });

        let max_pool = pool_order.len().min(rerolls_left as usize);
        for spent in 0..=max_pool {
            if spent > 0 {
                checks[pool_order[spent - 1]].reroll = Some(RerollSource::Pool);
            }

            let probability = checks.iter().fold(Probability::CERTAIN, |acc, check| {
                acc * check.effective_probability()
            });
            if probability.is_impossible() {
                // retries cannot rescue a check that never passes
                break;
            }

            allocations.push(Allocation {
                probability,
                rerolls: spent as u8,
                skills,
                checks: checks.clone(),
            });
        }
    }

    allocations
}

/// Every subset of `skills` in increasing bit order, the empty set first.
fn subsets(skills: Skills) -> impl Iterator<Item = Skills> {
    let all = skills.bits();
    let mut next = Some(0u8);
    std::iter::from_fn(move || {
        let current = next?;
        next = (current != all).then(|| (current | !all).wrapping_add(1) & all);
        Some(Skills::from_bits_truncate(current))
    })
}
