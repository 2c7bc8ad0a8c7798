use std::collections::HashMap;

use log::debug;

use crate::landcover::{CARBON_GRID, LANDCOVER_GRID};

/// One land-cover cell after labelling and the carbon left-join. Coordinates
/// do not survive the join; `carbon` is `None` when no carbon cell shares the
/// coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRow {
    pub landcover_type: &'static str,
    pub carbon: Option<u32>,
}

/// Labels each land-cover cell with its type name and left-joins the carbon
/// grid by exact (x, y) equality. Cells whose code is outside the resolved
/// type set are dropped, which is how single-type filtering works; every
/// surviving cell produces exactly one row.
pub fn join_carbon(types: &[(u8, &'static str)]) -> Vec<JoinedRow> {
    let names = types.iter().copied().collect::<HashMap<u8, &'static str>>();
    let carbon_by_coord = CARBON_GRID
        .iter()
        .map(|&(x, y, carbon)| ((x, y), carbon))
        .collect::<HashMap<(i32, i32), u32>>();

    let mut rows = Vec::with_capacity(LANDCOVER_GRID.len());
    for &(x, y, code) in LANDCOVER_GRID {
        let Some(&name) = names.get(&code) else {
            continue;
        };
        rows.push(JoinedRow {
            landcover_type: name,
            carbon: carbon_by_coord.get(&(x, y)).copied(),
        });
    }
    debug!(
        "Joined {} of {} land-cover cell(s) against {} carbon cell(s)",
        rows.len(),
        LANDCOVER_GRID.len(),
        CARBON_GRID.len()
    );
    rows
}
