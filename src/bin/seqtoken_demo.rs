//! Demonstration harness for the seqtoken codec.
//!
//! Generates a set of sample sequences (fixed patterns plus random workloads),
//! runs each through encode/decode, and reports the token, the size ratio
//! against a plain JSON rendering of the input, and whether the decoded
//! multiset matches the original. The harness is a caller of the two public
//! operations and carries no codec logic of its own.

use colored::*;
use log::LevelFilter;
use rand::Rng;

use seqtoken::{decode, encode, SeqTokenError};

//==================================================================================
// 1. Sample Suites
//==================================================================================

struct Suite {
    descr: &'static str,
    values: Vec<u16>,
}

fn random_values(len: usize, upper: u16) -> Vec<u16> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(1..=upper)).collect()
}

fn build_suites() -> Vec<Suite> {
    vec![
        Suite {
            descr: "4 repetitions",
            values: vec![1, 1, 1, 1],
        },
        Suite {
            descr: "no repetitions",
            values: (1..=10).collect(),
        },
        Suite {
            descr: "unordered set",
            values: vec![3, 1, 4, 2, 5],
        },
        Suite {
            descr: "100 identical values",
            values: vec![150; 100],
        },
        Suite {
            descr: "full range 1..300",
            values: (1..=300).collect(),
        },
        Suite {
            descr: "short sequence",
            values: vec![1, 2, 3, 4, 5],
        },
        Suite {
            descr: "random 50",
            values: random_values(50, 300),
        },
        Suite {
            descr: "random 100",
            values: random_values(100, 300),
        },
        Suite {
            descr: "random 500",
            values: random_values(500, 300),
        },
        Suite {
            descr: "random 1000",
            values: random_values(1000, 300),
        },
        Suite {
            descr: "single-digit values",
            values: random_values(100, 9),
        },
        Suite {
            descr: "two-digit values",
            values: random_values(100, 99),
        },
        Suite {
            descr: "three-digit values",
            values: random_values(100, 300),
        },
        Suite {
            descr: "each value three times (900 total)",
            values: (0u16..900).map(|i| (i % 300) + 1).collect(),
        },
    ]
}

//==================================================================================
// 2. Reporting
//==================================================================================

/// Multiset equality: order is only guaranteed for raw-mode tokens, so the
/// harness compares sorted copies.
fn multisets_match(original: &[u16], decoded: &[u16]) -> bool {
    let mut a = original.to_vec();
    let mut b = decoded.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

fn run_suite(suite: &Suite) -> Result<(), SeqTokenError> {
    let token = encode(&suite.values)?;
    let decoded = decode(&token)?;

    // The baseline is the JSON rendering of the input array, which is what a
    // caller would otherwise ship over the wire.
    let json_size = serde_json::to_string(&suite.values)
        .map(|s| s.len())
        .unwrap_or(0);
    let ratio = if json_size > 0 {
        (1.0 - token.len() as f64 / json_size as f64) * 100.0
    } else {
        0.0
    };

    println!("{} {}", "Suite:".bold(), suite.descr);
    println!("  elements:   {}", suite.values.len());
    if token.len() <= 60 {
        println!("  token:      {}", token);
    } else {
        println!("  token:      {}... ({} chars)", &token[..60], token.len());
    }
    println!(
        "  size:       {} chars vs {} JSON bytes ({:.1}% saved)",
        token.len(),
        json_size,
        ratio
    );

    if multisets_match(&suite.values, &decoded) {
        println!("  multiset:   {}", "match".green());
    } else {
        println!("  multiset:   {}", "MISMATCH".red().bold());
    }
    println!("---");
    Ok(())
}

//==================================================================================
// 3. Entry Point
//==================================================================================

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Info);

    // Custom formatter: just print the level and message
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });

    let _ = builder.try_init();
}

fn main() {
    init_logging();

    for suite in build_suites() {
        if let Err(e) = run_suite(&suite) {
            eprintln!("{} {}: {}", "Error in suite".red(), suite.descr, e);
        }
    }
}
