//! Character cell rendering of the board for an ANSI terminal

use std::io::{self, Write};

use tanks_core::{
    render::{DisplayList, DrawCommand},
    BoundingBox, Color, Surface,
};

/// Columns of the plotting area
pub const GRID_WIDTH: usize = 80;
/// Rows of the plotting area, roughly half the columns since cells are twice as tall as wide
pub const GRID_HEIGHT: usize = 32;

/// Upper bound on interpolation steps for a single polyline segment
const MAX_SEGMENT_STEPS: f64 = 4.0 * (GRID_WIDTH + GRID_HEIGHT) as f64;

const RESET: &str = "\x1b[0m";

fn ansi(color: Color) -> &'static str {
    match color {
        Color::Blue => "\x1b[34m",
        Color::Red => "\x1b[31m",
        // plain black vanishes on dark terminals
        Color::Black => "\x1b[90m",
        Color::Yellow => "\x1b[33m",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Fill(Color),
    Trail(Color),
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Fill(_) => '█',
            Cell::Trail(_) => '*',
        }
    }
}

/// Rasterized snapshot of a display list
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    cells: Vec<Cell>,
}

impl Raster {
    #[cfg(test)]
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[row * GRID_WIDTH + col]
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        self.cells[row * GRID_WIDTH + col] = cell;
    }

    /// Row 0 is the top of the screen
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(GRID_WIDTH)
    }
}

/// Maps plot coordinates onto grid cells
struct Viewport {
    x_limits: (f64, f64),
    y_limits: (f64, f64),
}

impl Viewport {
    /// Fractional column and row, row counted from the top
    fn to_grid(&self, x: f64, y: f64) -> (f64, f64) {
        let (x0, x1) = self.x_limits;
        let (y0, y1) = self.y_limits;
        let col = (x - x0) / (x1 - x0) * GRID_WIDTH as f64;
        let row = (y1 - y) / (y1 - y0) * GRID_HEIGHT as f64;
        (col, row)
    }

    fn cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let (col, row) = self.to_grid(x, y);
        // the top and right limits belong to the last cell
        let col = if col == GRID_WIDTH as f64 { col - 1.0 } else { col };
        let row = if row == GRID_HEIGHT as f64 { row - 1.0 } else { row };
        if (0.0..GRID_WIDTH as f64).contains(&col) && (0.0..GRID_HEIGHT as f64).contains(&row) {
            Some((col as usize, row as usize))
        } else {
            None
        }
    }

    /// Plot coordinates of the middle of a cell
    fn cell_center(&self, col: usize, row: usize) -> (f64, f64) {
        let (x0, x1) = self.x_limits;
        let (y0, y1) = self.y_limits;
        let x = x0 + (col as f64 + 0.5) / GRID_WIDTH as f64 * (x1 - x0);
        let y = y1 - (row as f64 + 0.5) / GRID_HEIGHT as f64 * (y1 - y0);
        (x, y)
    }
}

fn fill_box(raster: &mut Raster, view: &Viewport, bbox: &BoundingBox, color: Color) {
    let mut painted = false;
    for row in 0..GRID_HEIGHT {
        for col in 0..GRID_WIDTH {
            let (x, y) = view.cell_center(col, row);
            if bbox.contains(x, y) {
                raster.set(col, row, Cell::Fill(color));
                painted = true;
            }
        }
    }

    // boxes thinner than a cell still show up
    if !painted {
        let center = bbox.center();
        if let Some((col, row)) = view.cell(center.x, center.y) {
            raster.set(col, row, Cell::Fill(color));
        }
    }
}

fn trace_polyline(raster: &mut Raster, view: &Viewport, xs: &[f64], ys: &[f64], color: Color) {
    let mut plot = |x: f64, y: f64| {
        if let Some((col, row)) = view.cell(x, y) {
            raster.set(col, row, Cell::Trail(color));
        }
    };

    let points: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    if let [(x, y)] = points.as_slice() {
        plot(*x, *y);
    }

    for pair in points.windows(2) {
        let ((xa, ya), (xb, yb)) = (pair[0], pair[1]);
        let (ca, ra) = view.to_grid(xa, ya);
        let (cb, rb) = view.to_grid(xb, yb);
        // one step per crossed cell along the longer axis
        let steps = (cb - ca).abs().max((rb - ra).abs()).ceil().max(1.0);
        if !steps.is_finite() {
            continue;
        }
        let steps = steps.min(MAX_SEGMENT_STEPS);
        for i in 0..=steps as usize {
            let t = i as f64 / steps;
            plot(xa + (xb - xa) * t, ya + (yb - ya) * t);
        }
    }
}

/// Turns everything recorded in `list` into grid cells, in drawing order
pub fn rasterize(list: &DisplayList) -> Raster {
    let view = Viewport {
        x_limits: list.x_limits,
        y_limits: list.y_limits,
    };
    let mut raster = Raster {
        cells: vec![Cell::Empty; GRID_WIDTH * GRID_HEIGHT],
    };

    for command in &list.commands {
        match command {
            DrawCommand::FillBox { bbox, color } => fill_box(&mut raster, &view, bbox, *color),
            DrawCommand::Polyline { xs, ys, color } => {
                trace_polyline(&mut raster, &view, xs, ys, *color)
            }
        }
    }

    raster
}

/// Surface that prints a complete frame of the board each time it is presented
pub struct TerminalSurface<W> {
    list: DisplayList,
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            list: DisplayList::default(),
            out,
        }
    }

    #[cfg(test)]
    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let raster = rasterize(&self.list);
        let (x0, x1) = self.list.x_limits;
        let (y0, y1) = self.list.y_limits;

        // frames scroll instead of clearing the screen so the console dialogue stays readable
        let mut frame = String::from("\n");
        frame.push_str(&format!("{:^width$}\n", self.list.title, width = GRID_WIDTH + 6));
        frame.push_str(&format!("{:>4} +{}+\n", y1, "-".repeat(GRID_WIDTH)));

        for row in raster.rows() {
            frame.push_str("     |");
            for cell in row {
                match cell {
                    Cell::Empty => frame.push(' '),
                    Cell::Fill(color) | Cell::Trail(color) => {
                        frame.push_str(ansi(*color));
                        frame.push(cell.glyph());
                        frame.push_str(RESET);
                    }
                }
            }
            frame.push_str("|\n");
        }

        frame.push_str(&format!("{:>4} +{}+\n", y0, "-".repeat(GRID_WIDTH)));
        frame.push_str(&format!(
            "      {:<half$}{:>half$}\n",
            x0,
            x1,
            half = GRID_WIDTH / 2
        ));

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) {
        self.list.clear();
    }

    fn fill_box(&mut self, bbox: &BoundingBox, color: Color) {
        self.list.fill_box(bbox, color);
    }

    fn polyline(&mut self, xs: &[f64], ys: &[f64], color: Color) {
        self.list.polyline(xs, ys, color);
    }

    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.list.set_limits(x, y);
    }

    fn set_title(&mut self, title: &str) {
        self.list.set_title(title);
    }

    fn present(&mut self) -> io::Result<()> {
        self.list.present()?;
        self.write_frame()
    }
}
