use crate::entities::{SPInstance, SPSolution};
use crate::io::ext_repr::{ExtPlacement, ExtRelation, ExtSolution};

/// Exports a solution out of the library
pub fn export(instance: &SPInstance, solution: &SPSolution) -> ExtSolution {
    ExtSolution {
        strip_width: solution.strip_width,
        strip_length: solution.strip_length,
        density: solution.density(instance),
        quality: solution.quality,
        solve_time_ms: solution.solve_time.as_millis() as u64,
        placements: solution
            .placements
            .iter()
            .map(|p| ExtPlacement {
                id: p.rect_id,
                x: p.x,
                y: p.y,
            })
            .collect(),
        relations: solution
            .relations
            .iter()
            .map(|pr| ExtRelation {
                i: pr.i,
                j: pr.j,
                relation: pr.relation,
            })
            .collect(),
    }
}
