use std::collections::HashSet;

use serde::Serialize;

use crate::domain::duty_roster::DutyRoster;
use crate::domain::models::{Soldier, SoldierId};

/// One filled slot of a day plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotPick {
    pub slot: String,
    pub soldier_id: SoldierId,
}

/// Result of the greedy fill for a single day, in slot order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    pub picks: Vec<SlotPick>,
    pub unfilled: Vec<String>,
}

/// Candidate pool for one slot:
/// globally available, not off on that date, not used earlier that day,
/// and role-compatible with the slot.
pub fn candidate_pool<'a>(
    roster: &DutyRoster,
    slot: &str,
    soldiers: &'a [Soldier],
    unavailable: &HashSet<SoldierId>,
    used_today: &HashSet<SoldierId>,
) -> Vec<&'a Soldier> {
    soldiers
        .iter()
        .filter(|s| s.is_available)
        .filter(|s| !unavailable.contains(&s.id))
        .filter(|s| !used_today.contains(&s.id))
        .filter(|s| roster.is_role_compatible(slot, &s.role))
        .collect()
}

/// Lowest `total_services` wins, ties go to the lowest id.
pub fn select_candidate<'a>(candidates: &[&'a Soldier]) -> Option<&'a Soldier> {
    candidates
        .iter()
        .copied()
        .min_by_key(|s| (s.total_services, s.id))
}

/// Fills the roster's slots strictly in order.
///
/// A soldier picked for a slot is excluded from every later slot of the same
/// day. Slots with an empty pool are reported in `unfilled`, not as errors.
/// Roster order of `soldiers` does not matter.
pub fn plan_day(
    roster: &DutyRoster,
    soldiers: &[Soldier],
    unavailable: &HashSet<SoldierId>,
) -> DayPlan {
    let mut used_today: HashSet<SoldierId> = HashSet::new();

    roster
        .slots
        .iter()
        .fold(DayPlan::default(), |mut plan, slot| {
            let candidates = candidate_pool(roster, slot, soldiers, unavailable, &used_today);

            match select_candidate(&candidates) {
                Some(soldier) => {
                    used_today.insert(soldier.id);
                    plan.picks.push(SlotPick {
                        slot: slot.clone(),
                        soldier_id: soldier.id,
                    });
                }
                None => plan.unfilled.push(slot.clone()),
            }
            plan
        })
}
