//! Basic usage example for the query DSL

use esdsl::prelude::*;

fn main() -> Result<()> {
    // Surface the DSL's warn-level discard logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("=== Query DSL Basic Usage Example ===\n");

    println!("1. A simple term query:");
    let term = TermQuery::new("user", "kimchy").with_boost(1.2);
    println!("{}\n", term.to_json()?);

    println!("2. Child clauses combined in a bool query:");
    let child = BoolQuery::new()
        .must(&TermQuery::new("tag", "something"))
        .must_not(&TermQuery::new("tag", "spam"));
    println!("{}\n", child.to_json()?);

    println!("3. Aggregated into parents with top_children:");
    let query = TopChildrenQuery::new(&child, "blog_tag")
        .with_score_mode("max")
        .with_factor(5)
        .with_incremental_factor(2);
    println!("{}\n", serde_json::to_string_pretty(&query)?);

    println!("4. A typo in the score mode is discarded, not fatal (watch the warning):");
    let tolerant = TopChildrenQuery::new(&MatchAllQuery::new(), "comment")
        .with_score_mode("maximum")
        .with_factor(3);
    println!("score_mode after typo: {:?}", tolerant.score_mode());
    println!("{}\n", tolerant.to_json()?);

    println!("5. Raw JSON fragments re-enter the family through validation:");
    let stored = serde_json::json!({ "term": { "user": { "term": "kimchy" } } });
    let restored = TopChildrenQuery::from_value(stored, "comment")?;
    println!("{}\n", restored.to_json()?);

    match TopChildrenQuery::from_value(serde_json::json!(42), "comment") {
        Err(err) => println!("rejected as expected: {err}"),
        Ok(_) => unreachable!("a bare number is not a query"),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
