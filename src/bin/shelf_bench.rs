//! Workload-driven benchmark for the node-store backends.
//!
//! Reads three whitespace-separated integer files (insert, search, delete;
//! `#` starts a line comment), builds one tree per round, times the three
//! phases with a monotonic clock and writes one CSV row per round.
//!
//! ```bash
//! shelf-bench --m 64 --impl array \
//!     --insert keys.txt --search queries.txt --delete keys.txt \
//!     --rounds 5 --tag warmup --csv out.csv
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use eyre::{bail, eyre, Result, WrapErr};
use shelf_tree::{ArrayStore, Child, Key, ListStore, NodeStore, ShelfSet, SkipMirrorStore, StoreKind};

const USAGE: &str = "\
Usage:
  shelf-bench --m ORDER --impl array|linked|skiplist \\
              --insert FILE --search FILE --delete FILE \\
              [--rounds R] [--csv FILE] [--tag TAG]

Input files hold whitespace-separated 32-bit integers; `#` starts a line
comment. Defaults: rounds=3, csv=stdout, tag empty.";

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

struct Args {
    order: usize,
    kind: StoreKind,
    insert: PathBuf,
    search: PathBuf,
    delete: PathBuf,
    rounds: usize,
    csv: Option<PathBuf>,
    tag: String,
}

fn parse_args() -> Result<Args> {
    let mut order = None;
    let mut kind = None;
    let mut insert = None;
    let mut search = None;
    let mut delete = None;
    let mut rounds = 3usize;
    let mut csv = None;
    let mut tag = String::new();

    let mut argv = std::env::args().skip(1);
    while let Some(flag) = argv.next() {
        let mut value = |flag: &str| {
            argv.next().ok_or_else(|| eyre!("{flag} needs a value\n{USAGE}"))
        };
        match flag.as_str() {
            "--m" => order = Some(value("--m")?.parse::<usize>().wrap_err("--m expects an integer order")?),
            "--impl" => {
                let name = value("--impl")?;
                kind = Some(StoreKind::from_str(&name).map_err(|err| eyre!("--impl {name}: {err}"))?);
            }
            "--insert" => insert = Some(PathBuf::from(value("--insert")?)),
            "--search" => search = Some(PathBuf::from(value("--search")?)),
            "--delete" => delete = Some(PathBuf::from(value("--delete")?)),
            "--rounds" => {
                rounds = value("--rounds")?.parse::<usize>().wrap_err("--rounds expects a positive integer")?;
                if rounds == 0 {
                    bail!("--rounds must be at least 1");
                }
            }
            "--csv" => csv = Some(PathBuf::from(value("--csv")?)),
            "--tag" => tag = value("--tag")?,
            "--help" | "-h" => {
                println!("{USAGE}");
                process::exit(0);
            }
            other => bail!("unknown flag `{other}`\n{USAGE}"),
        }
    }

    Ok(Args {
        order: order.ok_or_else(|| eyre!("--m is required\n{USAGE}"))?,
        kind: kind.ok_or_else(|| eyre!("--impl is required\n{USAGE}"))?,
        insert: insert.ok_or_else(|| eyre!("--insert is required\n{USAGE}"))?,
        search: search.ok_or_else(|| eyre!("--search is required\n{USAGE}"))?,
        delete: delete.ok_or_else(|| eyre!("--delete is required\n{USAGE}"))?,
        rounds,
        csv,
        tag,
    })
}

/// Parses a workload file: whitespace-separated integers, `#` to end of
/// line is a comment, anything outside i32 is rejected.
fn load_keys(path: &Path) -> Result<Vec<Key>> {
    let text = fs::read_to_string(path).wrap_err_with(|| format!("cannot read {}", path.display()))?;

    let mut keys = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("");
        for token in line.split_whitespace() {
            let wide: i64 = token
                .parse()
                .wrap_err_with(|| format!("{}:{}: `{token}` is not an integer", path.display(), line_no + 1))?;
            let key = Key::try_from(wide).map_err(|_| {
                eyre!("{}:{}: `{token}` is outside the signed 32-bit range", path.display(), line_no + 1)
            })?;
            keys.push(key);
        }
    }
    Ok(keys)
}

struct Round {
    round: usize,
    insert_ns: u128,
    search_ns: u128,
    delete_ns: u128,
    found: usize,
    height_after_insert: usize,
}

fn run_rounds<S: NodeStore<Child>>(
    order: usize,
    rounds: usize,
    insert: &[Key],
    search: &[Key],
    delete: &[Key],
) -> Vec<Round> {
    let mut results = Vec::with_capacity(rounds);
    for round in 1..=rounds {
        let mut set: ShelfSet<S> = ShelfSet::with_order(order);

        let start = Instant::now();
        for &key in insert {
            set.insert(key);
        }
        let insert_ns = start.elapsed().as_nanos();

        let height_after_insert = set.height();

        let start = Instant::now();
        let mut found = 0usize;
        for &key in search {
            if set.contains(key) {
                found += 1;
            }
        }
        let search_ns = start.elapsed().as_nanos();

        let start = Instant::now();
        for &key in delete {
            set.remove(key);
        }
        let delete_ns = start.elapsed().as_nanos();

        results.push(Round {
            round,
            insert_ns,
            search_ns,
            delete_ns,
            found,
            height_after_insert,
        });
    }
    results
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let insert = load_keys(&args.insert)?;
    let search = load_keys(&args.search)?;
    let delete = load_keys(&args.delete)?;

    let rounds = match args.kind {
        StoreKind::Array => {
            run_rounds::<ArrayStore<Child>>(args.order, args.rounds, &insert, &search, &delete)
        }
        StoreKind::Linked => {
            run_rounds::<ListStore<Child>>(args.order, args.rounds, &insert, &search, &delete)
        }
        StoreKind::SkipList => {
            run_rounds::<SkipMirrorStore<Child>>(args.order, args.rounds, &insert, &search, &delete)
        }
    };

    let mut csv = String::new();
    csv.push_str("tag,impl,M,n_insert,n_search,n_delete,round,insert_ns,search_ns,delete_ns,found_count,height_after_insert\n");
    for row in &rounds {
        writeln!(
            csv,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            args.tag,
            args.kind,
            args.order,
            insert.len(),
            search.len(),
            delete.len(),
            row.round,
            row.insert_ns,
            row.search_ns,
            row.delete_ns,
            row.found,
            row.height_after_insert,
        )
        .expect("writing to a String cannot fail");
    }

    match &args.csv {
        Some(path) => fs::write(path, csv).wrap_err_with(|| format!("cannot write {}", path.display()))?,
        None => print!("{csv}"),
    }
    Ok(())
}
