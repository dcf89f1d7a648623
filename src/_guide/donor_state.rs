/*!

# Cursors, Exhaustion, and Retries

Every donor owns its own cursor. Creating two donors from the same values gives
two cursors that move independently:

```rust
# fn foo() -> donatis::Result<()> {
use donatis::{donors as d, Donor};

let names = ["Alice", "Bob"];
let mut first = d::sequence(names)?;
let mut second = d::sequence(names)?;

assert_eq!(first.next()?, "Alice");
assert_eq!(first.next()?, "Bob");

// `second` has not moved.
assert_eq!(second.next()?, "Alice");
# Ok(())
# }
# foo().unwrap();
```

## Exhaustion

Only [`sequence`][crate::donors::sequence] can run out. Once it has donated its
last element it is exhausted for good: every further pull fails with
[`ErrorKind::Exhausted`][crate::ErrorKind::Exhausted]. It never wraps around
and never falls back to a default. Reach for
[`repeating_sequence`][crate::donors::repeating_sequence] if you want to cycle.

[`ResultExt::exhausted_as_none`][crate::ResultExt::exhausted_as_none] and
[`Donor::values`][crate::Donor::values] make the end of a sequence easy to
handle as an ordinary `None`.

## Failures and Retries

Indexed and chained sequences only move forward after their function succeeds.
When the function fails, the error comes back to you unchanged and the next
pull retries the very same step:

```rust
# fn foo() -> donatis::Result<()> {
use core::cell::Cell;
use donatis::{donors as d, Donor, Error};

let flaky = Cell::new(true);
let mut codes = d::indexed_sequence(|i| {
    if i == 1 && flaky.replace(false) {
        return Err(Error::other("try again"));
    }
    Ok(format!("C{i}"))
});

assert_eq!(codes.next()?, "C0");
assert!(codes.next().is_err());
assert_eq!(codes.next()?, "C1");
# Ok(())
# }
# foo().unwrap();
```

## Threads

Donors are pulled through `&mut self` and hold no locks. If several threads
need values from one sequence, put that donor behind your own mutex.

 */
