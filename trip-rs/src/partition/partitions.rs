use std::iter::FusedIterator;

use crate::partition::Partition;

/// Iterator over all set partitions of a slice.
///
/// Every partition of `[e, rest @ ..]` is derived from a partition of `rest` by either
/// opening a new singleton group `[e]` in front, or prepending `e` to one of its existing groups.
/// For each partition of `rest`, the singleton option comes first, followed by the existing groups in order.
///
/// Instead of recursing, the iterator keeps one choice per element (0: open a new group,
/// `k > 0`: join group `k - 1` of the partition of the elements behind it).
/// These choices form a mixed-radix counter in which the first element is the fastest digit,
/// so incrementing the counter reproduces the recursive order exactly.
#[derive(Clone, Debug)]
pub struct Partitions<'a, T> {
    elements: &'a [T],
    choices: Vec<usize>,
    exhausted: bool,
}

impl<'a, T> Partitions<'a, T> {
    pub fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            choices: vec![0; elements.len()],
            exhausted: false,
        }
    }

    /// Moves the counter to the next partition.
    /// Returns `false` once every partition has been visited.
    fn advance(&mut self) -> bool {
        let n = self.choices.len();

        //n_groups[k]: number of groups in the partition of elements[k..]
        let mut n_groups = vec![0; n + 1];
        for k in (0..n).rev() {
            n_groups[k] = n_groups[k + 1] + usize::from(self.choices[k] == 0);
        }

        //the radix of digit k is n_groups[k + 1] + 1 and never depends on the lower digits
        for k in 0..n {
            if self.choices[k] < n_groups[k + 1] {
                self.choices[k] += 1;
                return true;
            }
            self.choices[k] = 0;
        }
        false
    }
}

impl<T: Clone> Partitions<'_, T> {
    fn build(&self) -> Partition<T> {
        let mut groups: Partition<T> = Vec::new();
        for (element, &choice) in self.elements.iter().zip(&self.choices).rev() {
            match choice {
                0 => groups.insert(0, vec![element.clone()]),
                k => groups[k - 1].insert(0, element.clone()),
            }
        }
        groups
    }
}

impl<T: Clone> Iterator for Partitions<'_, T> {
    type Item = Partition<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let partition = self.build();
        self.exhausted = !self.advance();
        Some(partition)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.exhausted {
            true => (0, Some(0)),
            false => (1, None),
        }
    }
}

impl<T: Clone> FusedIterator for Partitions<'_, T> {}
