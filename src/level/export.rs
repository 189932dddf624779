use super::Level;
use crate::{CellMap, Cost, LevelError};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path as FsPath;

impl Level {
    /// Writes a cost map (usually from [`dijkstra_all_costs`](crate::search::dijkstra_all_costs))
    /// as comma separated values.
    ///
    /// There is one line per row of the Level and one value per Cell in that row, covering all
    /// Spaces and Walls. Cells without an entry in `costs` are written as `inf`.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use level_pathfinding::prelude::*;
    /// let level: Level = "a3X1".parse().unwrap();
    /// let costs = costs_from(&level, 'a').unwrap();
    ///
    /// let mut out = Vec::new();
    /// level.write_costs(&costs, &mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "0,2,inf,inf\n");
    /// ```
    pub fn write_costs(
        &self,
        costs: &CellMap<Cost>,
        mut writer: impl Write,
    ) -> Result<(), LevelError> {
        let ((x_lo, y_lo), (x_hi, y_hi)) = match self.bounds() {
            Some(bounds) => bounds,
            None => return Ok(()),
        };

        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                if x != x_lo {
                    writer.write_all(b",")?;
                }
                let cost = costs.get(&(x, y)).copied().unwrap_or(Cost::INFINITY);
                write!(writer, "{}", cost)?;
            }
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes a cost map to the file at `path`. See [`write_costs`](Level::write_costs) for the format.
    pub fn save_costs(
        &self,
        costs: &CellMap<Cost>,
        path: impl AsRef<FsPath>,
    ) -> Result<(), LevelError> {
        let file = File::create(path)?;
        self.write_costs(costs, BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{neighbors::navigation_edges, search::dijkstra_all_costs};

    #[test]
    fn rows_and_walls() {
        let level: Level = "11\nX1".parse().unwrap();
        let costs = dijkstra_all_costs((0, 0), &level, navigation_edges);

        let mut out = Vec::new();
        level.write_costs(&costs, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<Vec<&str>> = text.lines().map(|line| line.split(',').collect()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["0", "1"]);
        assert_eq!(rows[1][0], "inf");
        assert_eq!(rows[1][1].parse::<f64>().unwrap(), std::f64::consts::SQRT_2);
    }

    #[test]
    fn save_to_file() {
        let level: Level = "a1".parse().unwrap();
        let costs = dijkstra_all_costs((0, 0), &level, navigation_edges);

        let path = std::env::temp_dir().join(format!("level_costs_{}.csv", std::process::id()));
        level.save_costs(&costs, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text, "0,1\n");
    }
}
