//! `titlecheck duplicates`: audit the corpus for near-duplicate titles

use serde_json::json;

use crate::cli::DuplicatesArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use titlecheck_core::error::Result;
use titlecheck_core::index::TitleIndex;
use titlecheck_core::records::{header, quoted};
use titlecheck_core::similarity::{find_all_duplicates, to_percent, DuplicatePair};
use titlecheck_core::trace_time;

pub fn execute(ctx: &CommandContext, args: &DuplicatesArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let index = ctx.load_index(&config)?;

    let mut pairs = find_all_duplicates(&index, args.threshold / 100.0);
    let total = pairs.len();
    if let Some(limit) = args.limit {
        pairs.truncate(limit);
    }
    trace_time!(ctx.start, "find_duplicates", pairs = total);

    output_by_format_result!(ctx.cli.format,
        json => {
            let value = json!({
                "threshold": args.threshold,
                "total": total,
                "pairs": pairs.iter().map(|p| pair_json(&index, p)).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        },
        human => {
            if pairs.is_empty() {
                if !ctx.cli.quiet {
                    println!("No duplicate titles at or above {:.2}%", args.threshold);
                }
                return Ok(());
            }
            for pair in &pairs {
                println!(
                    "{:>6.2}%  [{}] {}",
                    to_percent(pair.score),
                    pair.first,
                    title(&index, pair.first)
                );
                println!("         [{}] {}", pair.second, title(&index, pair.second));
            }
            if total > pairs.len() && !ctx.cli.quiet {
                println!("({} of {} pairs shown)", pairs.len(), total);
            }
        },
        records => {
            println!(
                "{} threshold={:.2} pairs={} total={}",
                header("duplicates"),
                args.threshold,
                pairs.len(),
                total
            );
            for pair in &pairs {
                println!(
                    "P {} {} {:.2} {} {}",
                    pair.first,
                    pair.second,
                    to_percent(pair.score),
                    quoted(title(&index, pair.first)),
                    quoted(title(&index, pair.second))
                );
            }
        }
    )
}

fn title(index: &TitleIndex, position: usize) -> &str {
    index.title(position).unwrap_or_default()
}

fn pair_json(index: &TitleIndex, pair: &DuplicatePair) -> serde_json::Value {
    json!({
        "first": pair.first,
        "second": pair.second,
        "score": pair.score,
        "percent": to_percent(pair.score),
        "first_title": title(index, pair.first),
        "second_title": title(index, pair.second),
    })
}
