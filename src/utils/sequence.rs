/// Return the first element of `items`, or `T::default()` when it is empty.
///
/// Total over every slice, including empty ones.
///
/// # Example
///
/// ```rust
/// use record_processor::utils::first_or_zero;
///
/// assert_eq!(first_or_zero(&[1, 2, 3, 4, 5]), 1);
/// assert_eq!(first_or_zero::<i32>(&[]), 0);
/// assert_eq!(first_or_zero::<String>(&[]), "");
/// ```
pub fn first_or_zero<T: Clone + Default>(items: &[T]) -> T {
    items.first().cloned().unwrap_or_default()
}
