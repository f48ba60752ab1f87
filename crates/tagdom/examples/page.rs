//! Example: build a small page and print it
//!
//! Run with `RUST_LOG=tagdom=trace` to watch each append.

use tagdom::{attrs, BuilderConfig, Html};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BuilderConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => BuilderConfig::default(),
    };
    let h = Html::new(config);

    let rows = ["Alpha", "Beta", "Gamma"]
        .iter()
        .enumerate()
        .map(|(i, name)| h.tr((h.td(i + 1)?, h.td(*name)?)))
        .collect::<Result<Vec<_>, _>>()?;

    let page = h.html((
        h.head(h.title("tagdom")?)?,
        h.body((
            h.h1(("Hello ", h.em("world")?))?,
            h.table((attrs! { "_" => "grid", "border" => 1 }, h.tbody(rows)?))?,
            h.p(attrs! { "klass" => "note", "data-count" => 3 })?,
        ))?,
    ))?;

    h.with_tree_mut(|tree| {
        let root = tree.root();
        tree.append_child(root, page)
    })?;

    println!("<!DOCTYPE html>{}", h.to_html(page));
    Ok(())
}
