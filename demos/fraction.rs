use dna_ptrie::{BaseSet, Trie};
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Builds a trie from a file of sequences (one per line) and reports the
/// fraction accounted for by a character class.
///
/// Usage: cargo run --example fraction <filename> <bases>
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <filename> <bases>", args[0]);
        eprintln!("e.g.   {} reads.txt CG", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    let classes: BaseSet = args[2].parse().unwrap_or_else(|err| {
        eprintln!("Bad character class {:?}: {}", args[2], err);
        std::process::exit(1);
    });

    let file = File::open(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    let mut trie = Trie::new();
    for line in BufReader::new(file).lines() {
        let line = line.expect("Error reading file");
        if let Err(err) = trie.insert(line.trim()) {
            eprintln!("Skipping {:?}: {}", line, err);
        }
    }
    trie.compress();

    match trie.fraction(classes) {
        Ok(fraction) => println!("Fraction for {}: {}", &args[2], fraction),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }

    let stats = trie.stats();
    println!("\n=== Trie ===");
    println!("Sequences inserted: {}", trie.len());
    println!("Live nodes: {}", stats.nodes());
    println!(
        "  branches: {}, counted: {}, terminals: {}, runs: {}",
        stats.branches, stats.counted_branches, stats.terminals, stats.runs
    );
    println!(
        "Interned run strings: {} ({} bytes)",
        stats.interned_runs, stats.interned_bytes
    );
}
