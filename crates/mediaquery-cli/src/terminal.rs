//! Terminal-backed viewport host.
//!
//! Reports the terminal window size in pixels. Terminals that don't answer
//! the pixel query (many report 0×0) are measured in cells and scaled by a
//! nominal cell size instead.

use std::sync::Mutex;

use crossterm::terminal::{self, WindowSize};
use mediaquery::{Dimensions, ViewportHost};

/// Nominal cell size used when the terminal doesn't report pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 8,
            height: 16,
        }
    }
}

pub struct TerminalHost {
    cell: CellSize,
    // Last good measurement, reported if the terminal stops answering.
    last: Mutex<Dimensions>,
}

impl TerminalHost {
    pub fn new(cell: CellSize) -> Self {
        Self {
            cell,
            last: Mutex::new(Dimensions::default()),
        }
    }

    fn measure(&self) -> mediaquery::Result<Dimensions> {
        measure_report(terminal::window_size(), self.cell)
    }
}

impl ViewportHost for TerminalHost {
    fn viewport_size(&self) -> Dimensions {
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match self.measure() {
            Ok(dimensions) => {
                *last = dimensions;
                dimensions
            }
            Err(e) => {
                tracing::warn!(error = %e, "terminal size query failed; keeping last size");
                *last
            }
        }
    }
}

/// Convert a window-size query into pixels, surfacing I/O failures as
/// [`mediaquery::MediaQueryError::Io`].
fn measure_report(report: std::io::Result<WindowSize>, cell: CellSize) -> mediaquery::Result<Dimensions> {
    let size = report?;
    Ok(to_pixels(
        size.columns,
        size.rows,
        size.width,
        size.height,
        cell,
    ))
}

/// Pixel size from a window-size report, falling back to cells × cell size.
fn to_pixels(columns: u16, rows: u16, width: u16, height: u16, cell: CellSize) -> Dimensions {
    if width > 0 && height > 0 {
        return Dimensions::new(u32::from(width), u32::from(height));
    }
    Dimensions::new(
        u32::from(columns) * u32::from(cell.width),
        u32::from(rows) * u32::from(cell.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_pixels_win() {
        let dims = to_pixels(80, 24, 1440, 900, CellSize::default());
        assert_eq!(dims, Dimensions::new(1440, 900));
    }

    #[test]
    fn test_cell_fallback() {
        // 80 columns at 8px is 640px: mobile
        let dims = to_pixels(80, 24, 0, 0, CellSize::default());
        assert_eq!(dims, Dimensions::new(640, 384));

        // 200 columns at 8px is 1600px: desktop
        let dims = to_pixels(200, 50, 0, 0, CellSize::default());
        assert_eq!(dims, Dimensions::new(1600, 800));
    }

    #[test]
    fn test_query_failure_becomes_io_error() {
        let report = Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no tty",
        ));
        let err = measure_report(report, CellSize::default()).unwrap_err();
        assert!(matches!(err, mediaquery::MediaQueryError::Io(_)));
        assert!(err.to_string().contains("no tty"));
    }

    #[test]
    fn test_window_report_measures() {
        let report = Ok(WindowSize {
            rows: 40,
            columns: 100,
            width: 0,
            height: 0,
        });
        let dims = measure_report(report, CellSize::default()).unwrap();
        assert_eq!(dims, Dimensions::new(800, 640));
    }

    #[test]
    fn test_partial_pixel_report_uses_cells() {
        let cell = CellSize {
            width: 10,
            height: 20,
        };
        let dims = to_pixels(100, 30, 1000, 0, cell);
        assert_eq!(dims, Dimensions::new(1000, 600));
    }
}
