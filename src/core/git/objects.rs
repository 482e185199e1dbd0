use super::command::GitExecutor;
use crate::core::probe::Probe;
use crate::utils::human_size;

const OBJECT_WALK: &[&str] = &["rev-list", "--objects", "--all"];
const SIZE_CHECK: &[&str] = &[
    "cat-file",
    "--batch-check=%(objecttype) %(objectname) %(objectsize) %(rest)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeObject {
    pub hash: String,
    pub size: u64,
    pub human_size: String,
    pub path: String,
}

/// The `top` largest blobs anywhere in history, biggest first.
///
/// The object walk and size lookup are left to git itself.
pub fn largest_blobs(git: &dyn GitExecutor, top: usize) -> Probe<Vec<LargeObject>> {
    Probe::from(git.pipe(OBJECT_WALK, SIZE_CHECK)).map(|output| rank_blobs(&output, top))
}

/// Parses `cat-file --batch-check` lines, keeps blobs, orders them by size.
pub fn rank_blobs(output: &str, top: usize) -> Vec<LargeObject> {
    let mut blobs: Vec<LargeObject> = output.lines().filter_map(parse_blob_line).collect();

    blobs.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    blobs.truncate(top);
    blobs
}

fn parse_blob_line(line: &str) -> Option<LargeObject> {
    let mut fields = line.splitn(4, ' ');
    if fields.next()? != "blob" {
        return None;
    }

    let hash = fields.next()?.to_string();
    let size = fields.next()?.parse::<u64>().ok()?;
    let path = fields.next().unwrap_or_default().trim().to_string();

    Some(LargeObject {
        hash,
        size,
        human_size: human_size(size),
        path,
    })
}
