/// Iterator over all 5-element index subsets of `0..n`, in lexicographic
/// order. Drives the best-of-N search: C(6,5) = 6 subsets for a 6-card hand,
/// C(7,5) = 21 for a 7-card hand.
pub struct SubsetsOfFive {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl SubsetsOfFive {
    pub fn new(n: usize) -> Self {
        Self {
            indices: [0, 1, 2, 3, 4],
            done: n < 5,
            n,
        }
    }
}

impl Iterator for SubsetsOfFive {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Find the rightmost index that can still be incremented
        let mut i = 4;
        loop {
            if self.indices[i] < self.n - (5 - i) {
                self.indices[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                // All combinations exhausted
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // at most C(7,5) = 21 for the hand sizes this crate evaluates
            (1, Some(21))
        }
    }
}
