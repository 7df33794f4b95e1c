//! File Queue Model
//!
//! Ordered collection of files queued for merging. Queue order is merge
//! order: the server concatenates pages in exactly the order the parts
//! are sent, so every reorder here changes the merged document.

use std::path::PathBuf;

/// Identifier for a queued file.
///
/// Assigned from a monotonic counter, unique for the lifetime of the
/// application, and stable for the lifetime of the entry. Ids are the
/// handle used by removal, reordering, and thumbnail updates, so a
/// background task finishing after its entry was removed can never
/// touch the wrong entry.
pub type EntryId = u64;

/// Thumbnail lifecycle marker for an entry.
///
/// The rendered terminal-graphics protocol is not cloneable, so it lives
/// in a runtime map owned by the App; the model only tracks which state
/// the entry is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThumbnailStatus {
    /// Render task spawned (or thumbnails disabled), nothing to show yet.
    Pending,
    /// First page rendered, protocol available in the App's map.
    Ready,
    /// Rasterization failed; the entry keeps its placeholder.
    Failed,
}

/// One queued file.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub id: EntryId,
    /// Path to the underlying file content.
    pub path: PathBuf,
    /// File name shown in the list and sent as the part filename.
    pub display_name: String,
    /// Size on disk at ingestion time.
    pub size: u64,
    pub thumbnail: ThumbnailStatus,
}

/// The ordered file queue.
#[derive(Clone, Debug, Default)]
pub struct FileListModel {
    entries: Vec<FileEntry>,
    next_id: EntryId,
}

impl FileListModel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a file to the end of the queue and return its id.
    pub fn add(&mut self, path: PathBuf, size: u64) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;

        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.entries.push(FileEntry {
            id,
            path,
            display_name,
            size,
            thumbnail: ThumbnailStatus::Pending,
        });

        id
    }

    /// Remove the entry with the given id. Removing an id that is not
    /// present is a no-op, not an error.
    pub fn remove(&mut self, id: EntryId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Exchange the positions of two entries. Entries not involved keep
    /// their positions. Swapping an entry with itself, or naming an id
    /// that is not present, leaves the order unchanged.
    pub fn swap(&mut self, a: EntryId, b: EntryId) {
        let (Some(i), Some(j)) = (self.position(a), self.position(b)) else {
            return;
        };
        self.entries.swap(i, j);
    }

    /// Current position of an entry in the queue.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: EntryId) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut FileEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Read-only view of the queue in merge order.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combined size of all queued files.
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    /// Empty the queue. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn list_with(names: &[&str]) -> FileListModel {
        let mut files = FileListModel::new();
        for name in names {
            files.add(PathBuf::from(format!("/docs/{name}")), 100);
        }
        files
    }

    #[test]
    fn add_assigns_increasing_unique_ids() {
        let mut files = FileListModel::new();
        let a = files.add(PathBuf::from("/docs/a.pdf"), 1);
        let b = files.add(PathBuf::from("/docs/b.pdf"), 2);
        files.remove(a);
        let c = files.add(PathBuf::from("/docs/c.pdf"), 3);

        assert!(b > a);
        assert!(c > b, "ids are never reused after a removal");
    }

    #[test]
    fn display_name_is_file_name() {
        let mut files = FileListModel::new();
        let id = files.add(PathBuf::from("/some/deep/dir/report.pdf"), 1);
        assert_eq!(files.get(id).unwrap().display_name, "report.pdf");
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut files = list_with(&["a.pdf", "b.pdf"]);
        files.remove(9999);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn swap_is_an_involution() {
        let mut files = list_with(&["a.pdf", "b.pdf", "c.pdf"]);
        let ids: Vec<_> = files.entries().iter().map(|e| e.id).collect();

        files.swap(ids[0], ids[2]);
        files.swap(ids[0], ids[2]);

        let after: Vec<_> = files.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn swap_with_self_keeps_order() {
        let mut files = list_with(&["a.pdf", "b.pdf"]);
        let first = files.entries()[0].id;
        files.swap(first, first);
        assert_eq!(files.entries()[0].id, first);
    }

    #[test]
    fn swap_with_missing_id_keeps_order() {
        let mut files = list_with(&["a.pdf", "b.pdf"]);
        let first = files.entries()[0].id;
        files.swap(first, 9999);
        assert_eq!(files.entries()[0].id, first);
    }

    #[test]
    fn total_bytes_sums_entries() {
        let mut files = FileListModel::new();
        files.add(PathBuf::from("/docs/a.pdf"), 10);
        files.add(PathBuf::from("/docs/b.pdf"), 32);
        assert_eq!(files.total_bytes(), 42);
    }
}
