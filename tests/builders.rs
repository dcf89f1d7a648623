use donatis::{build_fn, donors as d, Build, Donor, Error, Result};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
struct Apple {
    name: String,
    leaves: u32,
    ripeness: f64,
}

type NameRule = fn(usize) -> Result<String>;

#[derive(Clone)]
struct AppleMaker {
    name: d::Shared<d::IndexedSequence<NameRule>>,
    leaves: u32,
    ripeness: d::Shared<d::Sequence<f64>>,
}

impl AppleMaker {
    fn new(ripeness: impl IntoIterator<Item = f64>) -> Result<Self> {
        let name: NameRule = |i| Ok(format!("apple-{i}"));
        Ok(AppleMaker {
            name: d::shared(d::indexed_sequence(name)),
            leaves: 2,
            ripeness: d::shared(d::sequence(ripeness)?),
        })
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
            ripeness: self.ripeness.pull()?,
        })
    }
}

#[test]
fn maker_builds_a_fresh_instance_per_pull() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let maker = AppleMaker::new([0.5, 0.75, 0.9])?;
    let mut apples = d::maker(&maker);

    let mut first = apples.next()?;
    let second = apples.next()?;
    assert_eq!(first.name, "apple-0");
    assert_eq!(second.name, "apple-1");
    assert_eq!(first.ripeness, 0.5);
    assert_eq!(second.ripeness, 0.75);

    // The instances are independent of each other.
    first.leaves = 99;
    assert_eq!(second.leaves, 2);
    assert_ne!(first, second);
    Ok(())
}

#[test]
fn maker_reflects_sequence_position_at_build_time() -> anyhow::Result<()> {
    let maker = AppleMaker::new([0.1, 0.2, 0.3, 0.4])?;

    // Building directly advances the same sequences the donor sees.
    assert_eq!(maker.build()?.name, "apple-0");

    let mut apples = d::maker(&maker);
    assert_eq!(apples.next()?.name, "apple-1");
    assert_eq!(maker.build()?.name, "apple-2");
    assert_eq!(apples.next()?.name, "apple-3");
    Ok(())
}

#[test]
fn maker_propagates_build_failures() -> anyhow::Result<()> {
    let maker = AppleMaker::new([0.5])?;
    let mut apples = d::maker(&maker);

    assert_eq!(apples.next()?.ripeness, 0.5);
    let err = apples.next().unwrap_err();
    assert!(err.is_exhausted());
    Ok(())
}

#[test]
fn maker_over_shared_builder() -> anyhow::Result<()> {
    let maker = Rc::new(AppleMaker::new([0.5, 0.6])?);
    let mut a = d::maker(Rc::clone(&maker));
    let mut b = d::maker(Rc::clone(&maker));

    assert_eq!(a.next()?.name, "apple-0");
    assert_eq!(b.next()?.name, "apple-1");
    assert!(Rc::ptr_eq(a.builder(), b.builder()));
    Ok(())
}

#[test]
fn derived_builders_share_cursors() -> anyhow::Result<()> {
    let leafy = AppleMaker::new([0.5, 0.6, 0.7])?;
    let bare = leafy.clone().leaves(0);
    assert!(leafy.name.ptr_eq(&bare.name));

    let a = leafy.build()?;
    let b = bare.build()?;
    assert_eq!((a.name.as_str(), a.leaves), ("apple-0", 2));
    assert_eq!((b.name.as_str(), b.leaves), ("apple-1", 0));

    // Separately constructed builders get their own cursors.
    let other = AppleMaker::new([0.1])?;
    assert!(!leafy.name.ptr_eq(&other.name));
    assert_eq!(other.build()?.name, "apple-0");
    Ok(())
}

#[test]
fn builder_as_property_donor() -> anyhow::Result<()> {
    #[derive(Debug)]
    struct Tree {
        apples: Vec<Apple>,
        planted_by: String,
    }

    let apple = AppleMaker::new([0.1, 0.2, 0.3, 0.4])?;
    let apples = d::shared(d::vec_of(d::maker(apple), 2));
    let gardener = d::shared(d::the_same(d::indexed_sequence(|i| Ok(format!("gardener-{i}")))));

    let tree = build_fn(|| {
        Ok(Tree {
            apples: apples.pull()?,
            planted_by: gardener.pull()?,
        })
    });

    let first = tree.build()?;
    let second = tree.build()?;
    assert_eq!(first.apples[0].name, "apple-0");
    assert_eq!(second.apples[1].name, "apple-3");
    assert_eq!(first.planted_by, "gardener-0");
    assert_eq!(second.planted_by, "gardener-0");

    // Only four ripeness values were available.
    assert!(tree.build().unwrap_err().is_exhausted());
    Ok(())
}

#[test]
fn reentrant_shared_pull_is_an_error() -> anyhow::Result<()> {
    let inner = d::shared(d::constant(1));
    let handle = inner.clone();
    let mut outer = d::shared(d::from_fn(move || handle.pull()));

    // Not re-entrant: the outer donor pulls a different shared cell.
    assert_eq!(outer.next()?, 1);

    let cell: Rc<std::cell::OnceCell<d::Shared<Box<dyn Donor<i32>>>>> = Rc::default();
    let slot = Rc::clone(&cell);
    let looping = d::shared(Box::new(d::from_fn(move || -> Result<i32> {
        let me = slot.get().ok_or_else(|| Error::other("not wired up"))?;
        me.pull()
    })) as Box<dyn Donor<i32>>);
    let _ = cell.set(looping.clone());

    let err = looping.pull().unwrap_err();
    assert!(err.is_other());
    Ok(())
}
