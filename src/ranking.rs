use crate::model::FileEntry;

/// Order `entries` largest first and keep at most `limit` of them.
///
/// The sort is stable, so equal sizes keep their visitation order.
/// `None` keeps everything.
pub fn top_files(mut entries: Vec<FileEntry>, limit: Option<usize>) -> Vec<FileEntry> {
    entries.sort_by(|a, b| b.size.cmp(&a.size));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}
