pub mod intersect;
mod loader;
pub mod posting_list;

pub use posting_list::PostingListError;
