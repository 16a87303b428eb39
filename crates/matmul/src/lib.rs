mod error;

use std::fmt;

use tracing::warn;

pub use error::MatrixError;

pub type Matrix2 = [[i64; 2]; 2];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Grid { rows: usize, cols: usize },
    Ragged { rows: usize },
}

impl Shape {
    pub fn of<R: AsRef<[i64]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().all(|row| row.as_ref().len() == cols) {
            Self::Grid {
                rows: rows.len(),
                cols,
            }
        } else {
            Self::Ragged { rows: rows.len() }
        }
    }

    fn is_2x2(self) -> bool {
        self == Self::Grid { rows: 2, cols: 2 }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid { rows, cols } => write!(f, "{rows}x{cols}"),
            Self::Ragged { rows } => write!(f, "ragged {rows}-row"),
        }
    }
}

pub fn multiply<R: AsRef<[i64]>>(a: &[R], b: &[R]) -> Result<Matrix2, MatrixError> {
    let (left, right) = (Shape::of(a), Shape::of(b));
    if !left.is_2x2() || !right.is_2x2() {
        warn!(%left, %right, "rejecting non-2x2 matrix product");
        return Err(MatrixError::DimensionMismatch { left, right });
    }

    let a = [
        [a[0].as_ref()[0], a[0].as_ref()[1]],
        [a[1].as_ref()[0], a[1].as_ref()[1]],
    ];
    let b = [
        [b[0].as_ref()[0], b[0].as_ref()[1]],
        [b[1].as_ref()[0], b[1].as_ref()[1]],
    ];
    Ok(strassen_2x2(&a, &b))
}

pub fn strassen_2x2(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    // Wrapping is exact whenever the true product fits in i64.
    let [[a11, a12], [a21, a22]] = *a;
    let [[b11, b12], [b21, b22]] = *b;

    let step1 = a11.wrapping_add(a22).wrapping_mul(b11.wrapping_add(b22));
    let step2 = a21.wrapping_add(a22).wrapping_mul(b11);
    let step3 = a11.wrapping_mul(b12.wrapping_sub(b22));
    let step4 = a22.wrapping_mul(b21.wrapping_sub(b11));
    let step5 = a11.wrapping_add(a12).wrapping_mul(b22);
    let step6 = a21.wrapping_sub(a11).wrapping_mul(b11.wrapping_add(b12));
    let step7 = a12.wrapping_sub(a22).wrapping_mul(b21.wrapping_add(b22));

    [
        [
            step1.wrapping_add(step4).wrapping_sub(step5).wrapping_add(step7),
            step3.wrapping_add(step5),
        ],
        [
            step2.wrapping_add(step4),
            step1.wrapping_sub(step2).wrapping_add(step3).wrapping_add(step6),
        ],
    ]
}
