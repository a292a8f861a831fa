use std::fmt;

use crate::{Move, NR_PEGS, PegIdx, Towers};

const PADDING_OUT: usize = 4;
const PADDING_IN: usize = 8;
const GROUND_WIDTH: usize = 2 * PADDING_OUT + 2 * PADDING_IN + NR_PEGS;

/// Pegs are shown 1-indexed, matching the conventional numbering, while all
/// internal indices stay 0-based.
impl fmt::Display for PegIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.from, self.to)
    }
}

/// Pyramid diagram of the pegs: one row per stack level with the top disks
/// first, a `|` placeholder for empty slots, and a ground line underneath.
/// Disks are drawn as their size, right-aligned so wider sizes eat into the
/// padding and the columns stay put.
impl fmt::Display for Towers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..self.tallest()).rev() {
            for (idx, peg) in self.pegs().iter().enumerate() {
                let padding = if idx == 0 { PADDING_OUT } else { PADDING_IN };
                match peg.get(level) {
                    Some(disk) => write!(f, "{:>width$}", disk.0, width = padding + 1)?,
                    None => write!(f, "{:>width$}", '|', width = padding + 1)?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "{}", "=".repeat(GROUND_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peg(idx: u8) -> PegIdx {
        PegIdx::new(idx).unwrap()
    }

    #[test]
    fn test_render_initial_towers() {
        let towers = Towers::new(3, peg(0));

        let expected = [
            "    1        |        |",
            "    2        |        |",
            "    3        |        |",
            "===========================",
        ]
        .join("\n");
        assert_eq!(towers.to_string(), expected);
    }

    #[test]
    fn test_render_spread_out_disks() {
        let mut towers = Towers::new(3, peg(0));
        towers.move_top(peg(0), peg(2));
        towers.move_top(peg(0), peg(1));

        let expected = [
            "    3        2        1",
            "===========================",
        ]
        .join("\n");
        assert_eq!(towers.to_string(), expected);
    }

    #[test]
    fn test_render_wide_disk_sizes_keep_columns_aligned() {
        let towers = Towers::new(10, peg(0));

        let expected = [
            "    1        |        |",
            "    2        |        |",
            "    3        |        |",
            "    4        |        |",
            "    5        |        |",
            "    6        |        |",
            "    7        |        |",
            "    8        |        |",
            "    9        |        |",
            "   10        |        |",
            "===========================",
        ]
        .join("\n");
        assert_eq!(towers.to_string(), expected);
    }

    #[test]
    fn test_pegs_and_moves_display_one_indexed() {
        assert_eq!(peg(0).to_string(), "1");
        assert_eq!(peg(2).to_string(), "3");

        let mv = Move {
            from: peg(0),
            to: peg(2),
        };
        assert_eq!(mv.to_string(), "1 --> 3");
    }
}
