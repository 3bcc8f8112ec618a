mod bell;
mod partitions;

#[doc(inline)]
pub use bell::bell_number;

#[doc(inline)]
pub use partitions::Partitions;

/// A set partition: disjoint, non-empty groups which together hold every element exactly once
pub type Partition<T> = Vec<Vec<T>>;

/// Lazily enumerates every set partition of `elements`.
///
/// The empty sequence has exactly one partition: the one without any groups.
/// In total, `B(elements.len())` partitions are produced (see [`bell_number`]).
/// The input is only borrowed, elements are cloned into the yielded groups.
pub fn partitions<T: Clone>(elements: &[T]) -> Partitions<'_, T> {
    Partitions::new(elements)
}
