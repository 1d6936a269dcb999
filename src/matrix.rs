use qrcode::{Color, EcLevel, QrCode};

use crate::error::VeilResult;

// QR module grid
//------------------------------------------------------------------------------

/// Square boolean grid of QR modules for one payload, snapshotted from the
/// symbol encoder. Immutable once built; one per embedding request.
#[derive(Debug, Clone)]
pub struct ModuleGrid {
    module_count: u32,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Encode `payload` at the given error correction level. Fails with
    /// [`crate::VeilError::PayloadTooLong`] when the payload exceeds the
    /// symbol capacity at that level; it is never truncated.
    pub fn encode(payload: &str, ec_level: EcLevel) -> VeilResult<Self> {
        let code = QrCode::with_error_correction_level(payload, ec_level)?;
        let module_count = code.width() as u32;
        let modules = code.to_colors().iter().map(|c| *c == Color::Dark).collect();
        Ok(Self { module_count, modules })
    }

    #[cfg(test)]
    pub(crate) fn from_modules(module_count: u32, modules: Vec<bool>) -> Self {
        assert_eq!(modules.len(), (module_count * module_count) as usize);
        Self { module_count, modules }
    }

    pub fn module_count(&self) -> u32 {
        self.module_count
    }

    /// Whether the module at (row, col) is dark. Out-of-range coordinates
    /// read as light; lookups never panic.
    pub fn is_dark(&self, row: u32, col: u32) -> bool {
        if row < self.module_count && col < self.module_count {
            self.modules[(row * self.module_count + col) as usize]
        } else {
            false
        }
    }

    /// Map a carrier pixel to its module cell. The grid is stretched
    /// proportionally over the carrier, with each cell at least
    /// `min_cell_px` wide and tall; when the floor engages on a small
    /// carrier, the grid overhangs it and only the top-left modules are
    /// reachable. Returns `None` when the floored coordinate lands outside
    /// the grid, which callers treat as "no modification".
    pub fn cell_of(
        &self,
        x: u32,
        y: u32,
        carrier_w: u32,
        carrier_h: u32,
        min_cell_px: f32,
    ) -> Option<(u32, u32)> {
        let count = self.module_count as f32;
        let cell_w = (carrier_w as f32 / count).max(min_cell_px);
        let cell_h = (carrier_h as f32 / count).max(min_cell_px);
        let col = (x as f32 / cell_w).floor() as u32;
        let row = (y as f32 / cell_h).floor() as u32;
        if row < self.module_count && col < self.module_count {
            Some((row, col))
        } else {
            None
        }
    }

    /// Module polarity under a carrier pixel, or `None` outside the grid.
    pub fn sample(
        &self,
        x: u32,
        y: u32,
        carrier_w: u32,
        carrier_h: u32,
        min_cell_px: f32,
    ) -> Option<bool> {
        self.cell_of(x, y, carrier_w, carrier_h, min_cell_px)
            .map(|(row, col)| self.is_dark(row, col))
    }
}

#[cfg(test)]
mod grid_tests {
    use super::*;
    use crate::error::VeilError;

    #[test]
    fn encodes_short_url_at_level_h() {
        let grid = ModuleGrid::encode("https://example.com/a", EcLevel::H).unwrap();
        // 21 payload bytes need a version 3 symbol at level H.
        assert_eq!(grid.module_count(), 29);
        // Finder pattern corner is dark, its separator is light.
        assert!(grid.is_dark(0, 0));
        assert!(!grid.is_dark(0, 7));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let payload = format!("https://example.com/{}", "a".repeat(4000));
        let err = ModuleGrid::encode(&payload, EcLevel::H).unwrap_err();
        assert_eq!(err, VeilError::PayloadTooLong);
    }

    #[test]
    fn out_of_range_module_reads_light() {
        let grid = ModuleGrid::from_modules(2, vec![true; 4]);
        assert!(grid.is_dark(1, 1));
        assert!(!grid.is_dark(2, 0));
        assert!(!grid.is_dark(0, 99));
    }

    #[test]
    fn proportional_mapping_floors() {
        let grid = ModuleGrid::from_modules(4, vec![false; 16]);
        // 8x8 carrier, 4 modules: 2 px cells.
        assert_eq!(grid.cell_of(0, 0, 8, 8, 2.0), Some((0, 0)));
        assert_eq!(grid.cell_of(5, 3, 8, 8, 2.0), Some((1, 2)));
        assert_eq!(grid.cell_of(7, 7, 8, 8, 2.0), Some((3, 3)));
    }

    #[test]
    fn cell_floor_limits_reach_on_small_carriers() {
        // 8 modules over an 8 px carrier would mean 1 px cells; the 2 px
        // floor leaves only the top-left quarter of the grid reachable.
        let mut modules = vec![false; 64];
        modules[3 * 8 + 3] = true;
        let grid = ModuleGrid::from_modules(8, modules);
        assert_eq!(grid.cell_of(7, 7, 8, 8, 2.0), Some((3, 3)));
        assert_eq!(grid.sample(7, 7, 8, 8, 2.0), Some(true));
    }

    #[test]
    fn coordinates_past_the_grid_are_unmapped() {
        let grid = ModuleGrid::from_modules(4, vec![true; 16]);
        // Defensive: a caller handing in a coordinate beyond the carrier
        // must get "no modification", not a panic.
        assert_eq!(grid.cell_of(120, 0, 100, 100, 2.0), None);
        assert_eq!(grid.sample(0, 120, 100, 100, 2.0), None);
    }
}
