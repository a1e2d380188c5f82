//=========================================================================
// Active Scene Selection
//=========================================================================
//
// Picks the activation candidate from the order table.
//
//   for (address, order) in table (insertion order):
//       skip if still loading
//       first survivor seeds best
//       later survivor replaces best only if order > best.order
//
// Ties keep the earlier entry. `None` means "no candidate": fall back to
// the base scene.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::OrderTable;
use crate::core::SceneAddress;

//=========================================================================

/// Returns the highest-ordered address that is not still loading.
pub fn select_candidate<'a, F>(table: &'a OrderTable, is_loading: F) -> Option<&'a SceneAddress>
where
    F: Fn(&SceneAddress) -> bool,
{
    let mut best: Option<(&SceneAddress, i32)> = None;

    for (address, order) in table.iter() {
        if is_loading(address) {
            continue;
        }

        match best {
            None => best = Some((address, order)),
            Some((_, best_order)) if order > best_order => best = Some((address, order)),
            Some(_) => {}
        }
    }

    best.map(|(address, _)| address)
}

//=========================================================================
// Unit Tests
//=========================================================================
