/// Identity of one tenant configuration fetch.
///
/// Issued when a login completes; the result of the fetch is only applied if
/// the session is still in the epoch the ticket was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub org_id: String,
}
