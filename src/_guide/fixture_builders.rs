/*!

# Using Donors in Fixture Builders

This crate does not provide a builder DSL. Instead, a builder is anything that
implements [`Build`][crate::Build], and its properties pull from donors.

Because `build` takes `&self`, keep stateful donors behind
[`shared`][crate::donors::shared] handles and pull them with
[`Shared::pull`][crate::donors::Shared::pull]. Derived builders that clone a
handle keep pulling from the same cursor.

```rust
# fn foo() -> donatis::Result<()> {
use donatis::{donors as d, Build, Donor, Result};

#[derive(Debug)]
struct Apple {
    name: String,
    leaves: u32,
}

#[derive(Clone)]
struct AppleMaker {
    name: d::Shared<d::IndexedSequence<fn(usize) -> Result<String>>>,
    leaves: u32,
}

impl AppleMaker {
    fn new() -> Self {
        AppleMaker {
            name: d::shared(d::indexed_sequence(
                (|i: usize| Ok(format!("apple-{i}"))) as fn(usize) -> Result<String>,
            )),
            leaves: 2,
        }
    }

    fn leaves(mut self, leaves: u32) -> Self {
        self.leaves = leaves;
        self
    }
}

impl Build<Apple> for AppleMaker {
    fn build(&self) -> Result<Apple> {
        Ok(Apple {
            name: self.name.pull()?,
            leaves: self.leaves,
        })
    }
}

let leafy = AppleMaker::new();
let bare = leafy.clone().leaves(0);

assert_eq!(leafy.build()?.name, "apple-0");
assert_eq!(bare.build()?.name, "apple-1");
assert_eq!(bare.build()?.leaves, 0);

// A builder is also a donor of fresh objects.
let mut orchard = d::vec_of(d::maker(&leafy), 3);
let apples: Vec<Apple> = orchard.next()?;
assert_eq!(apples[2].name, "apple-5");
# Ok(())
# }
# foo().unwrap();
```

 */
