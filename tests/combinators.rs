use donatis::{donors as d, Donor, Error, Result};
use std::cell::Cell;

#[test]
fn map_transforms_values() -> anyhow::Result<()> {
    let mut emails = d::sequence(["alice", "bob"])?.map(|name| Ok(format!("{name}@example.com")));
    assert_eq!(emails.next()?, "alice@example.com");
    assert_eq!(emails.next()?, "bob@example.com");
    assert!(emails.next().unwrap_err().is_exhausted());
    Ok(())
}

#[test]
fn map_errors_pass_through() -> anyhow::Result<()> {
    let mut checked = d::indexed_sequence(|i| Ok(i)).map(|i| {
        if i % 2 == 1 {
            Err(Error::other("odd"))
        } else {
            Ok(i)
        }
    });
    assert_eq!(checked.next()?, 0);
    assert!(checked.next().unwrap_err().is_other());
    assert_eq!(checked.next()?, 2);
    Ok(())
}

#[test]
fn by_ref_keeps_the_cursor() -> anyhow::Result<()> {
    let mut numbers = d::repeating_sequence([1, 2, 3])?;
    {
        let mut tens = numbers.by_ref().map(|n| Ok(n * 10));
        assert_eq!(tens.next()?, 10);
        assert_eq!(tens.next()?, 20);
    }
    assert_eq!(numbers.next()?, 3);
    assert_eq!(numbers.next()?, 1);
    Ok(())
}

#[test]
fn values_stop_at_exhaustion() -> anyhow::Result<()> {
    let names = d::sequence(["Alice", "Bob", "Carol", "Dave"])?
        .values()
        .collect::<Result<Vec<_>>>()?;
    assert_eq!(names, ["Alice", "Bob", "Carol", "Dave"]);

    let mut values = d::sequence([1])?.values();
    assert_eq!(values.next().transpose()?, Some(1));
    assert!(values.next().is_none());
    assert!(values.next().is_none());
    assert!(values.into_inner().next().unwrap_err().is_exhausted());
    Ok(())
}

#[test]
fn values_yield_other_errors() {
    let fail = Cell::new(true);
    let mut values = d::indexed_sequence(|i| {
        if fail.replace(false) {
            Err(Error::other("first try fails"))
        } else {
            Ok(i)
        }
    })
    .values();

    assert!(values.next().unwrap().is_err());
    assert_eq!(values.next().unwrap().unwrap(), 0);
    let rest: Vec<usize> = values.take(3).map(|v| v.unwrap()).collect();
    assert_eq!(rest, [1, 2, 3]);
}

#[test]
fn boxed_donors_are_interchangeable() -> anyhow::Result<()> {
    let mut donors: Vec<Box<dyn Donor<String>>> = vec![
        Box::new(d::constant(String::from("same"))),
        Box::new(d::sequence([String::from("only")])?),
        Box::new(d::repeating_sequence([String::from("x"), String::from("y")])?),
        Box::new(d::indexed_sequence(|i| Ok(format!("#{i}")))),
        Box::new(d::chained_sequence(
            || Ok(String::from("A")),
            |previous| Ok(format!("{previous}'")),
        )),
    ];

    let firsts = donors
        .iter_mut()
        .map(|donor| donor.next())
        .collect::<Result<Vec<_>>>()?;
    assert_eq!(firsts, ["same", "only", "x", "#0", "A"]);

    let seconds = donors
        .iter_mut()
        .map(|donor| donor.next())
        .collect::<Vec<_>>();
    assert_eq!(seconds[0].as_deref().ok(), Some("same"));
    assert!(seconds[1].as_ref().unwrap_err().is_exhausted());
    assert_eq!(seconds[2].as_deref().ok(), Some("y"));
    assert_eq!(seconds[3].as_deref().ok(), Some("#1"));
    assert_eq!(seconds[4].as_deref().ok(), Some("A'"));
    Ok(())
}

#[test]
fn from_fn_keeps_its_own_state() -> anyhow::Result<()> {
    let mut next = 'a';
    let mut letters = d::from_fn(move || {
        let letter = next;
        next = char::from_u32(next as u32 + 1).ok_or_else(|| Error::other("out of letters"))?;
        Ok(letter)
    });
    assert_eq!(letters.next()?, 'a');
    assert_eq!(letters.next()?, 'b');
    Ok(())
}

#[test]
fn the_same_pulls_once() -> anyhow::Result<()> {
    let pulls = Cell::new(0);
    let mut owner = d::the_same(d::from_fn(|| {
        pulls.set(pulls.get() + 1);
        Ok(String::from("owner"))
    }));
    for _ in 0..3 {
        assert_eq!(owner.next()?, "owner");
    }
    assert_eq!(pulls.get(), 1);
    Ok(())
}

#[test]
fn the_same_retries_a_failed_first_pull() -> anyhow::Result<()> {
    let fail = Cell::new(true);
    let mut owner = d::the_same(d::indexed_sequence(|i| {
        if fail.replace(false) {
            Err(Error::other("not yet"))
        } else {
            Ok(i)
        }
    }));
    assert!(owner.next().unwrap_err().is_other());
    assert_eq!(owner.next()?, 0);
    assert_eq!(owner.next()?, 0);
    Ok(())
}

#[test]
fn vec_of_pulls_len_values() -> anyhow::Result<()> {
    let mut pairs = d::vec_of(d::repeating_sequence(['x', 'o'])?, 3);
    assert_eq!(pairs.next()?, ['x', 'o', 'x']);
    assert_eq!(pairs.next()?, ['o', 'x', 'o']);

    let mut empty = d::vec_of(d::sequence([1])?, 0);
    let none: Vec<i32> = empty.next()?;
    assert!(none.is_empty());
    Ok(())
}

#[test]
fn vec_of_stops_on_exhaustion() -> anyhow::Result<()> {
    let mut rows = d::vec_of(d::sequence([1, 2, 3])?, 2);
    assert_eq!(rows.next()?, [1, 2]);
    assert!(rows.next().unwrap_err().is_exhausted());
    Ok(())
}
