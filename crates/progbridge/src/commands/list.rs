//! List command - show registered dialect pairs.

use clap::Args;
use progbridge_translate::{Domain, entries};
use serde::Serialize;

/// List command arguments
#[derive(Args)]
pub struct ListArgs {
    /// Only show pairs of this domain (robot, plc)
    #[arg(long)]
    pub domain: Option<Domain>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListedPair {
    domain: Domain,
    from: &'static str,
    to: &'static str,
    available: bool,
}

fn listed(domain: Option<Domain>) -> Vec<ListedPair> {
    entries()
        .into_iter()
        .filter(|(pair, _)| domain.is_none_or(|d| d == pair.domain))
        .map(|(pair, entry)| ListedPair {
            domain: pair.domain,
            from: pair.from,
            to: pair.to,
            available: entry.is_available(),
        })
        .collect()
}

pub fn run(args: &ListArgs) -> anyhow::Result<()> {
    let pairs = listed(args.domain);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
        return Ok(());
    }

    for pair in &pairs {
        let marker = if pair.available { "" } else { " (reserved)" };
        println!("{}: {} -> {}{marker}", pair.domain, pair.from, pair.to);
    }
    Ok(())
}
