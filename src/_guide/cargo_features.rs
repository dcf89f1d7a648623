/*!

# Cargo Features

**Note: `std` is enabled by default. Disable default features to use the
`no_std` core of this crate.**

* **`alloc`**: Enable the donors that take a snapshot of their input
  ([`sequence`][crate::donors::sequence],
  [`repeating_sequence`][crate::donors::repeating_sequence],
  [`choose`][crate::donors::choose]), along with
  [`vec_of`][crate::donors::vec_of], [`shared`][crate::donors::shared], and
  `Box<dyn Donor<T>>` support.

* **`std`**: Implement `std::error::Error` for
  [`donatis::Error`][crate::Error]. Implies `alloc`.

* **`log`**: Enable logging with [the `log` crate](https://docs.rs/log).

 */
