//! Backend commands queued from the UI loop to the fetch worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    FetchMembers,
}
