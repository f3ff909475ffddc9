//! Initial marshmallow layout: two columns at the quarter / three-quarter points, rows
//! stepping down from a top margin, one roasting speed per row.

use crate::config::GameConfig;
use crate::marshmallow::Marshmallow;

/// Row-major: row 0 col 0, row 0 col 1, row 1 col 0, ...
pub fn create_marshmallows(cfg: &GameConfig) -> Vec<Marshmallow> {
    let width = cfg.surface_width as f64;
    let mut out = Vec::with_capacity(cfg.rows * cfg.columns);
    for row in 0..cfg.rows {
        // rows past the end of the list wrap around (5 rows, 4 speeds => rows 0 and 4 match)
        let speed = cfg.roasting_speeds[row % cfg.roasting_speeds.len()];
        let y = cfg.margin + row as f64 * cfg.margin * 1.5;
        for col in 0..cfg.columns {
            let x = width / 4.0 + col as f64 * (width / 2.0);
            out.push(Marshmallow::new(x, y, cfg.radius, speed));
        }
    }
    out
}
