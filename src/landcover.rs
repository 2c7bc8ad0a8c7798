use itertools::Itertools;
use thiserror::Error;

/// Land-cover classification codes paired with their human-readable names,
/// in declared order. Code 255 is the "unclassified" sentinel.
pub const LANDCOVER_TYPES: &[(u8, &str)] = &[
    (0, "water"),
    (1, "evergreen needleleaf forest"),
    (2, "evergreen broadleaf forest"),
    (3, "deciduous needleleaf forest"),
    (4, "deciduous broadleaf forest"),
    (5, "mixed forest"),
    (6, "closed shrublands"),
    (7, "open shrublands"),
    (8, "woody savannas"),
    (9, "savannas"),
    (10, "grasslands"),
    (11, "permanent wetlands"),
    (12, "croplands"),
    (13, "urban and built-up"),
    (14, "cropland/natural vegetation mosaic"),
    (15, "snow and ice"),
    (16, "barren or sparsely vegetated"),
    (255, "unclassified"),
];

/// Land-cover raster as (x, y, code) triples. The scan order of this table
/// determines the encounter order of groups in the report.
pub const LANDCOVER_GRID: &[(i32, i32, u8)] = &[
    (2, 0, 0),
    (3, 0, 0),
    (4, 0, 0),
    (5, 0, 0),
    (4, 1, 0),
    (4, 5, 0),
    (5, 5, 0),
    (0, 0, 4),
    (0, 1, 4),
    (5, 1, 4),
    (3, 2, 4),
    (4, 2, 4),
    (5, 2, 4),
    (3, 3, 4),
    (2, 4, 6),
    (3, 5, 6),
    (3, 4, 7),
    (2, 5, 7),
    (0, 2, 8),
    (2, 3, 8),
    (0, 4, 8),
    (0, 3, 9),
    (1, 3, 9),
    (1, 4, 9),
    (0, 5, 9),
    (1, 5, 9),
    (1, 0, 10),
    (1, 2, 10),
    (4, 3, 10),
    (4, 4, 10),
    (5, 4, 10),
    (3, 1, 11),
    (1, 1, 12),
    (2, 2, 12),
    (2, 1, 13),
    (5, 3, 13),
];

/// Carbon-content raster as (x, y, carbon) triples. Coordinates need not
/// cover the land-cover grid; unmatched land-cover cells join with no carbon.
pub const CARBON_GRID: &[(i32, i32, u32)] = &[
    (0, 0, 207),
    (1, 0, 26),
    (2, 0, 0),
    (3, 0, 0),
    (4, 0, 0),
    (0, 1, 135),
    (1, 1, 96),
    (2, 1, 156),
    (3, 1, 47),
    (4, 1, 0),
    (0, 2, 196),
    (1, 2, 70),
    (2, 2, 106),
    (3, 2, 126),
    (4, 2, 48),
    (0, 3, 255),
    (1, 3, 225),
    (2, 3, 54),
    (3, 3, 125),
    (4, 3, 230),
    (0, 4, 140),
    (1, 4, 175),
    (2, 4, 48),
    (3, 4, 215),
    (4, 4, 46),
];

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(
        "The landcover type '{name}' is not valid.\nPlease, select one in the list below:\n{}",
        valid_name_list()
    )]
    InvalidLandcoverType { name: String },
}

/// Resolves an optional user-supplied land-cover name into the ordered set
/// of (code, name) pairs to include. No name selects every registered type;
/// names are matched case-sensitively against whole strings.
pub fn resolve_types(
    landcover: Option<&str>,
) -> Result<Vec<(u8, &'static str)>, ClassifyError> {
    match landcover {
        None => Ok(LANDCOVER_TYPES.to_vec()),
        Some(name) => {
            let matched = LANDCOVER_TYPES
                .iter()
                .copied()
                .filter(|(_, registered)| *registered == name)
                .collect::<Vec<_>>();
            if matched.is_empty() {
                Err(ClassifyError::InvalidLandcoverType {
                    name: name.to_string(),
                })
            } else {
                Ok(matched)
            }
        }
    }
}

fn valid_name_list() -> String {
    LANDCOVER_TYPES
        .iter()
        .map(|(_, name)| format!(" - {name}"))
        .join("\n")
}
