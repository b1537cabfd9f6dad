//! Dense simplex tableau.
//!
//! Layout: `rows` constraint rows followed by one objective row; columns are
//! structural variables, one slack per row, optional artificials, and the
//! right-hand side last. The objective row stores negated objective
//! coefficients, so its rhs cell is the current objective value.

/// Dense row-major tableau with an explicit basis.
#[derive(Debug, Clone)]
pub(crate) struct Tableau {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
    /// Basic column of each constraint row.
    pub(crate) basis: Vec<usize>,
}

impl Tableau {
    /// Zero tableau with `rows` constraint rows and `cols` columns (rhs included).
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; (rows + 1) * cols],
            basis: vec![0; rows],
        }
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub(crate) fn num_rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn rhs_col(&self) -> usize {
        self.cols - 1
    }

    pub(crate) fn objective_row(&self) -> usize {
        self.rows
    }

    pub(crate) fn rhs(&self, row: usize) -> f64 {
        self.get(row, self.rhs_col())
    }

    /// Current objective value.
    pub(crate) fn objective_value(&self) -> f64 {
        self.rhs(self.objective_row())
    }

    pub(crate) fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Negates every entry of a row.
    pub(crate) fn negate_row(&mut self, row: usize) {
        for v in self.row_mut(row) {
            *v = -*v;
        }
    }

    /// `target -= factor * source`, over all columns.
    pub(crate) fn sub_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        if factor == 0.0 {
            return;
        }
        let cols = self.cols;
        let (t, s) = (target * cols, source * cols);
        for c in 0..cols {
            let v = self.data[s + c];
            self.data[t + c] -= factor * v;
        }
    }

    /// Most negative objective-row entry among columns `0..limit`.
    ///
    /// Ties go to the lowest column index. `None` once no entry is below `-tol`.
    pub(crate) fn entering_column(&self, limit: usize, tol: f64) -> Option<usize> {
        let obj = self.row(self.objective_row());
        let mut best: Option<(usize, f64)> = None;
        for (c, &v) in obj.iter().enumerate().take(limit) {
            if v < -tol && best.map_or(true, |(_, b)| v < b) {
                best = Some((c, v));
            }
        }
        best.map(|(c, _)| c)
    }

    /// Minimum-ratio row for an entering column.
    ///
    /// Only rows whose entry exceeds `tol` qualify; ties go to the lowest row.
    /// `None` means the column is an unbounded direction.
    pub(crate) fn leaving_row(&self, col: usize, tol: f64) -> Option<usize> {
        let rhs = self.rhs_col();
        let mut best: Option<(usize, f64)> = None;
        for r in 0..self.rows {
            let a = self.get(r, col);
            if a > tol {
                let ratio = self.get(r, rhs) / a;
                if best.map_or(true, |(_, b)| ratio < b) {
                    best = Some((r, ratio));
                }
            }
        }
        best.map(|(r, _)| r)
    }

    /// Gauss-Jordan pivot on `(row, col)`; `col` becomes basic in `row`.
    pub(crate) fn pivot(&mut self, row: usize, col: usize) {
        let p = self.get(row, col);
        for v in self.row_mut(row) {
            *v /= p;
        }
        self.set(row, col, 1.0);

        for r in 0..=self.rows {
            if r != row {
                let factor = self.get(r, col);
                self.sub_scaled_row(r, row, factor);
                self.set(r, col, 0.0);
            }
        }
        self.basis[row] = col;
    }

    /// The row in which `col` is a clean identity column, if any.
    ///
    /// Clean means exactly one constraint-row entry within `tol` of 1 and every
    /// other entry, objective row included, within `tol` of 0.
    pub(crate) fn identity_row(&self, col: usize, tol: f64) -> Option<usize> {
        let mut found = None;
        for r in 0..=self.rows {
            let v = self.get(r, col);
            if v.abs() <= tol {
                continue;
            }
            if r == self.rows || (v - 1.0).abs() > tol || found.is_some() {
                return None;
            }
            found = Some(r);
        }
        found
    }
}
