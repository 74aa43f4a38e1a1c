// src/matrix/gaussian_matrix.rs

use log::{debug, info};

use crate::error::FactorizationError;
use crate::relation_sieve::relation::Relation;

/// Exponent-parity matrix over GF(2), augmented with an identity block so
/// each row remembers which original relations were folded into it.
///
/// Elimination order is fixed: columns ascending, pivot search from the
/// first unused row downward. Identical inputs always produce identical
/// null-space vectors.
pub struct GaussianMatrix {
    m: Vec<Vec<bool>>,
    data_cols: usize,
    elimination_step: bool,
}

impl GaussianMatrix {
    /// Rows follow the relation order handed in (ascending x). Row i
    /// starts as the parity bits of relation i followed by identity bit i.
    pub fn new(relations: &[Relation], base_len: usize) -> Self {
        debug_assert!(relations.len() > base_len);

        let num_rows = relations.len();
        let m = relations
            .iter()
            .enumerate()
            .map(|(i, rel)| {
                let mut row = rel.parity_row();
                debug_assert_eq!(row.len(), base_len);
                row.extend((0..num_rows).map(|j| j == i));
                row
            })
            .collect();

        GaussianMatrix {
            m,
            data_cols: base_len,
            elimination_step: false,
        }
    }

    /// Gauss-Jordan over GF(2); addition is XOR, the only nonzero scalar
    /// is 1 so no scaling is ever needed. Inherently sequential across
    /// pivot steps.
    fn elimination(&mut self) {
        if self.elimination_step {
            return;
        }

        let num_rows = self.m.len();
        let mut pivot_row = 0;

        for col in 0..self.data_cols {
            let Some(found) = (pivot_row..num_rows).find(|&r| self.m[r][col]) else {
                continue;
            };
            self.m.swap(pivot_row, found);

            for r in 0..num_rows {
                if r != pivot_row && self.m[r][col] {
                    let (pivot, target) = if r < pivot_row {
                        let (a, b) = self.m.split_at_mut(pivot_row);
                        (&b[0], &mut a[r])
                    } else {
                        let (a, b) = self.m.split_at_mut(r);
                        (&a[pivot_row], &mut b[0])
                    };
                    Self::add_assign(target, pivot);
                }
            }

            pivot_row += 1;
            if pivot_row == num_rows {
                break;
            }
        }

        debug!(
            "elimination done: rank {}, {} rows, {} data columns",
            pivot_row,
            num_rows,
            self.data_cols
        );
        self.elimination_step = true;
    }

    /// The null-space vectors: for each eliminated row whose data columns
    /// are all zero, the identity bits name a subset of relations with
    /// all-even combined exponents. Ascending row order.
    pub fn null_space(&mut self) -> Result<Vec<Vec<usize>>, FactorizationError> {
        self.elimination();

        let vectors: Vec<Vec<usize>> = self
            .m
            .iter()
            .filter(|row| row[..self.data_cols].iter().all(|&bit| !bit))
            .map(|row| {
                row[self.data_cols..]
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &bit)| bit.then_some(i))
                    .collect()
            })
            .filter(|subset: &Vec<usize>| !subset.is_empty())
            .collect();

        if vectors.is_empty() {
            return Err(FactorizationError::SingularSystemNoSolution);
        }
        info!("linear system: {} null-space vectors", vectors.len());
        Ok(vectors)
    }

    fn add_assign(target: &mut [bool], source: &[bool]) {
        for (t, s) in target.iter_mut().zip(source.iter()) {
            *t ^= *s;
        }
    }
}
