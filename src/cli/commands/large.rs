use super::common::{print_header, CommandContext};
use crate::core::git::{largest_blobs, LargeObject};
use crate::ui::{paint, Style};
use crate::utils::Result;
use tracing::warn;

const HASH_WIDTH: usize = 12;

pub fn execute(ctx: &CommandContext<'_>) -> Result<Vec<LargeObject>> {
    print_header(&format!("Largest {} blobs in history", ctx.options.top));

    let probe = largest_blobs(ctx.git, ctx.options.top);
    if let Some(reason) = probe.failure() {
        warn!(%reason, "object scan failed");
        println!(
            "{}",
            paint(Style::Yellow, "Could not scan repository objects; treating as none.")
        );
    }

    let objects = probe.unwrap_or_empty();
    if objects.is_empty() {
        println!("No blobs found.");
        return Ok(objects);
    }

    for object in &objects {
        println!("{}", format_object_line(object));
    }

    Ok(objects)
}

pub fn format_object_line(object: &LargeObject) -> String {
    let short_hash: String = object.hash.chars().take(HASH_WIDTH).collect();
    format!(
        "  {:>10}  {}  {}",
        object.human_size,
        paint(Style::Dim, &short_hash),
        object.path
    )
}
