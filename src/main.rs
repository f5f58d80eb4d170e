// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Sample runs of the skip list. Set `RUST_LOG=trace` to watch the tower
//! grow and shrink.

use std::error::Error;
use std::io;
use std::io::Write;

use skipset::SkipList;

fn integers(out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(out, "\n=== Integer skip list ===")?;
    let mut list = SkipList::with_params(0.5, 32)?;

    for key in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5] {
        list.insert(key);
    }
    list.dump(out)?;

    writeln!(out, "contains 5: {}", list.contains(&5))?;
    writeln!(out, "contains 7: {}", list.contains(&7))?;

    let erased: Vec<bool> = [5, 1, 10].iter().map(|key| list.erase(key)).collect();
    writeln!(out, "erase 5, 1, 10: {:?}", erased)?;
    list.dump(out)?;

    write!(out, "in order: ")?;
    let mut cursor = list.cursor();
    while !cursor.is_end() {
        write!(out, "{} ", cursor.key())?;
        cursor.move_next();
    }
    writeln!(out)?;
    return Ok(());
}

fn strings(out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(out, "\n=== String skip list ===")?;
    let mut list = SkipList::with_params(0.25, 32)?;

    for fruit in ["apple", "banana", "cherry", "date", "fig"] {
        list.insert(fruit.to_string());
    }
    list.dump(out)?;

    writeln!(out, "contains 'banana': {}", list.contains("banana"))?;
    writeln!(out, "contains 'grape': {}", list.contains("grape"))?;

    list.erase("banana");
    write!(out, "after erasing 'banana': ")?;
    for fruit in &list {
        write!(out, "{} ", fruit)?;
    }
    writeln!(out)?;
    return Ok(());
}

fn transfer(out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(out, "\n=== Transfer ===")?;
    let mut first: SkipList<i32> = SkipList::new();
    first.insert(10);
    first.insert(20);

    let second = first.take();
    writeln!(out, "taken list:")?;
    second.dump(out)?;
    writeln!(out, "donor after take:")?;
    first.dump(out)?;

    let mut third = SkipList::new();
    third.insert(99);
    third = second;
    writeln!(out, "reassigned list:")?;
    third.dump(out)?;
    return Ok(());
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    integers(&mut out)?;
    strings(&mut out)?;
    transfer(&mut out)?;
    writeln!(out, "\nAll sample runs finished.")?;
    return Ok(());
}
